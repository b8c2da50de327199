//! SQLite storage implementation for Goal Tracker.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the key-value trait defined in `goaltracker-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - The single writer actor
//! - The `kv_store` table backing every year bucket
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies exist.
//! `core` is database-agnostic and works with traits.
//!
//! ```text
//!        core (domain)
//!              │
//!              ▼
//!   storage-sqlite (this crate)
//!              │
//!              ▼
//!          SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod kv;
pub mod schema;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, run_migrations, spawn_writer, DbConnection,
    DbPool, WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use kv::SqliteKeyValueStore;

// Re-export from goaltracker-core for convenience
pub use goaltracker_core::errors::{DatabaseError, Error, Result};
