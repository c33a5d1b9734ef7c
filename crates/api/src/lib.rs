//! HTTP API for the daily puzzle service.
//!
//! Exposes read endpoints for published puzzles, a listing of playable game
//! ids, and an explicit generation trigger. Generation itself runs on a
//! background task fed by an in-process queue so request handlers never block
//! on the language model.
//!
//! This crate is exposed as a library so integration tests can build the
//! exact router (middleware included) that `main.rs` serves.

pub mod background;
pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
