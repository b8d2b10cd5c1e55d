//! Readiness classification for inventory host snapshots.

pub mod engine;

pub use engine::error::{Error, Result};
pub use engine::state::{classify, Classification, Requirement};
pub use engine::types::{
    AdministrativeState, AvailabilityStatus, Host, InventoryState, OperationalStatus, Personality,
};
