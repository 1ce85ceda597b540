//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers (modal on top, or the forms)
//! - `dispatch`: The three request dispatchers and their completions

pub(crate) mod dispatch;
pub(crate) mod keys;
pub(crate) mod update;


use std::path::PathBuf;

use crate::message::Message;
use faunara_core::{AttributeMap, ContributionRecord};

// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// `POST /api/classify-image`. `image_path` is read inside the task.
    ClassifyImage { image_path: Option<PathBuf> },

    /// `POST /api/classify-attributes`
    ClassifyAttributes { attributes: AttributeMap },

    /// `POST /api/improve-faunara`. `record` is the submitted snapshot
    /// without its image; the image is read from `image_path` in the task.
    Improve {
        record: Box<ContributionRecord>,
        image_path: Option<PathBuf>,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
