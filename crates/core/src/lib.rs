//! Goal Tracker Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for yearly goal tracking.
//! It is storage-agnostic: persistence goes through [`storage::KeyValueStoreTrait`],
//! which is implemented by the `storage-sqlite` crate (and in memory here).

pub mod constants;
pub mod errors;
pub mod events;
pub mod goals;
pub mod progress;
pub mod reports;
pub mod storage;
pub mod updates;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
