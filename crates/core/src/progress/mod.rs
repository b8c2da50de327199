//! Progress module - pure progress, milestone and achievement rules.

mod encouragement;
mod progress_engine;

pub use encouragement::{encouragement_message, EncouragementKind};
pub use progress_engine::{
    apply_progress, check_milestone, clamp_progress, select_celebration, Celebration,
};
