//! HTTP model-invocation backend for quadwords.
//!
//! Implements [`quadwords_core::model::ModelClient`] against an
//! Anthropic-messages-compatible completion endpoint using [`reqwest`].

pub mod client;
mod strip;

pub use client::{HttpModelClient, LlmApiError, LlmConfig};
