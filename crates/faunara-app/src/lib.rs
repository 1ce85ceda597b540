//! faunara-app - Application state and request orchestration for the FAUNARA client
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the three form dispatchers, the two modal controllers, the
//! attribute toggle, Escape-driven dismissal, configuration loading and the
//! background tasks that talk to the service.

pub mod actions;
pub mod config;
pub mod form;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod modal;
pub mod preview;
pub mod process;
pub mod results;
pub mod state;
pub mod toggle;

// Re-export primary types
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::AppState;
