//! Updates module - the append-only progress log.

mod updates_model;
mod updates_service;
mod updates_traits;


pub use updates_model::{LoggedUpdate, NewProgressUpdate, ProgressUpdate};
pub use updates_service::ProgressUpdateService;
pub use updates_traits::ProgressUpdateServiceTrait;
