//! # faunara-core - Core Domain Types
//!
//! Foundation crate for the FAUNARA client. Provides the wire-level domain
//! types, attribute collection, score formatting, and error handling shared by
//! every other crate.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, serde_json, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`AnimalSummary`] - An animal record as returned by the service
//! - [`ClassificationResponse`] - Body of a successful classify call
//! - [`ContributionReceipt`] - Body of a successful improve call
//! - [`ErrorBody`] - Body of a failed call
//! - [`ContributionRecord`] - A new animal submitted by the user
//!
//! ### Attributes (`attributes`)
//! - [`AttributeField`] - The fixed set of attribute controls
//! - [`AttributeMap`] - Sparse, ordered attribute-name → value mapping
//! - [`collect_attributes()`] - Build an [`AttributeMap`] from any [`AttributeSource`]
//!
//! ### Images (`image_file`)
//! - [`ImageFile`] - An image held in memory for upload and preview
//!
//! ### Score Formatting (`score`)
//! - [`format_score()`] - Similarity score → `"87%"` / `"N/A"`
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with request-flow classification
//! - [`ErrorClass`] - Validation / Transport / Domain / Unknown
//! - [`FlowError`] - Cloneable summary of a failed submission
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! ```rust
//! use faunara_core::prelude::*;
//! ```

pub mod attributes;
pub mod error;
pub mod image_file;
pub mod logging;
pub mod score;
pub mod types;

/// Prelude for common imports used throughout all FAUNARA crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, trace, warn};
}

pub use attributes::{collect_attributes, AttributeField, AttributeMap, AttributeSource};
pub use error::{
    Error, ErrorClass, FlowError, Result, GENERIC_FAILURE, NO_MATCH_CODE, NO_MATCH_PHRASE,
};
pub use image_file::ImageFile;
pub use score::format_score;
pub use types::{
    AnimalSummary, ClassificationResponse, ContributionReceipt, ContributionRecord, ErrorBody,
    ATTRIBUTES_PLACEHOLDER, FACTS_PLACEHOLDER, HABITAT_PLACEHOLDER, NAME_PLACEHOLDER,
};
