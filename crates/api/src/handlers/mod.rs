//! Request handlers for the puzzle API.
//!
//! Handlers delegate to the game store for reads and hand generation work to
//! the background queue; they never call the language model themselves.

pub mod games;
