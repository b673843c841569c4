//! Engine trait for game implementations.
//!
//! Every game implements `GameEngine` to define:
//! - How a fresh game is set up, and how a saved one is resumed
//! - How typed actions modify state
//! - When a game is finished
//!
//! Callers (UI pages, a socket server) only ever talk to this trait.

pub mod engine;

pub use engine::GameEngine;
