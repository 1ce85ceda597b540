//! # faunara-api - FAUNARA Service Client
//!
//! Talks to the classification service over HTTP and turns every response
//! into either a typed body or a classified [`faunara_core::Error`].
//!
//! Depends on [`faunara_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! - [`FaunaraApi`] - The three service operations, implemented by [`HttpClient`]
//! - [`HttpClient`] - `reqwest`-backed implementation rooted at a base URL
//! - [`interpret_response()`] - Content-type check, status check and body parsing
//! - [`Endpoint`] - The consumed endpoints and their failure fallbacks

pub mod client;
pub mod response;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use client::{Endpoint, FaunaraApi, HttpClient, LocalFaunaraApi};
pub use response::{body_excerpt, interpret_response, is_json_content_type, EXCERPT_LIMIT};
