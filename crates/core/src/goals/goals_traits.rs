use crate::errors::Result;
use crate::goals::goals_model::{Goal, GoalUpdate, NewGoal};
use async_trait::async_trait;

/// Trait for goal service operations.
///
/// Mutations always target the current year bucket.
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal>;
    async fn update_goal(&self, goal_id: &str, changes: GoalUpdate) -> Result<Goal>;
    /// Returns `true` if a goal was removed. Updates logged against the
    /// goal are kept.
    async fn delete_goal(&self, goal_id: &str) -> Result<bool>;
    fn get_goal(&self, goal_id: &str) -> Result<Goal>;
    fn get_active_goals(&self) -> Result<Vec<Goal>>;
    /// All goals of `year`, or of the current year when `None`.
    fn get_all_goals(&self, year: Option<i32>) -> Result<Vec<Goal>>;
    /// Years that hold at least one goal, most recent first.
    fn get_goal_years(&self) -> Result<Vec<i32>>;
}
