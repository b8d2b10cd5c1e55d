//! Core engine modules for hoststate.

pub mod error;
pub mod resolver;
pub mod snapshot;
pub mod state;
pub mod types;
