//! Core domain model and generation pipeline for quadwords.
//!
//! Everything in this crate is storage- and transport-agnostic: the
//! [`store::GameStore`], [`store::PromptStore`] and [`model::ModelClient`]
//! traits are the only seams to the outside world. The `quadwords-db` and
//! `quadwords-llm` crates provide the production implementations; tests run
//! the full pipeline against in-crate stand-ins.

pub mod config;
pub mod constraints;
pub mod context;
pub mod error;
pub mod game_id;
pub mod games;
pub mod holidays;
pub mod model;
pub mod sampling;
pub mod store;
pub mod types;
pub mod validate;
pub mod vocabulary;
