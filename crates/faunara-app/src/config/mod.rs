//! Configuration file parsing for the FAUNARA client
//!
//! Supports `<config dir>/faunara/config.toml`, or any path given on the
//! command line.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config, load_settings};
pub use types::*;
