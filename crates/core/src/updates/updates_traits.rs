use async_trait::async_trait;

use crate::errors::Result;
use crate::updates::updates_model::{LoggedUpdate, NewProgressUpdate, ProgressUpdate};

/// Trait for progress log operations.
#[async_trait]
pub trait ProgressUpdateServiceTrait: Send + Sync {
    /// Appends an update for a current-year goal and applies its progress.
    async fn log_update(&self, goal_id: &str, input: NewProgressUpdate) -> Result<LoggedUpdate>;

    /// Current-year updates of one goal, most recent first.
    fn get_goal_updates(&self, goal_id: &str) -> Result<Vec<ProgressUpdate>>;

    /// Every update of `year` (current year when `None`) in log order.
    fn get_all_updates(&self, year: Option<i32>) -> Result<Vec<ProgressUpdate>>;
}
