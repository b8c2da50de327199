//! Domain event types.

use serde::{Deserialize, Serialize};

/// Domain events emitted by core services after successful mutations.
///
/// These events are facts about goal data. Front ends translate them into
/// their own reactions (refreshing lists, celebration cues, etc.).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// A goal was created in a year bucket.
    GoalCreated { goal_id: String, year: i32 },

    /// Editable fields of a goal changed.
    GoalUpdated { goal_id: String, year: i32 },

    /// A goal was removed. Its updates are kept.
    GoalDeleted { goal_id: String, year: i32 },

    /// A progress update was appended to the log.
    ProgressLogged {
        goal_id: String,
        update_id: String,
        progress: u8,
    },

    /// A goal crossed a milestone threshold.
    MilestoneReached { goal_id: String, milestone: u8 },

    /// A goal moved from active to achieved.
    GoalAchieved { goal_id: String },
}

impl DomainEvent {
    /// Creates a GoalCreated event.
    pub fn goal_created(goal_id: impl Into<String>, year: i32) -> Self {
        Self::GoalCreated {
            goal_id: goal_id.into(),
            year,
        }
    }

    /// Creates a GoalUpdated event.
    pub fn goal_updated(goal_id: impl Into<String>, year: i32) -> Self {
        Self::GoalUpdated {
            goal_id: goal_id.into(),
            year,
        }
    }

    /// Creates a GoalDeleted event.
    pub fn goal_deleted(goal_id: impl Into<String>, year: i32) -> Self {
        Self::GoalDeleted {
            goal_id: goal_id.into(),
            year,
        }
    }

    pub fn progress_logged(
        goal_id: impl Into<String>,
        update_id: impl Into<String>,
        progress: u8,
    ) -> Self {
        Self::ProgressLogged {
            goal_id: goal_id.into(),
            update_id: update_id.into(),
            progress,
        }
    }

    pub fn milestone_reached(goal_id: impl Into<String>, milestone: u8) -> Self {
        Self::MilestoneReached {
            goal_id: goal_id.into(),
            milestone,
        }
    }

    pub fn goal_achieved(goal_id: impl Into<String>) -> Self {
        Self::GoalAchieved {
            goal_id: goal_id.into(),
        }
    }

    /// The goal every event refers to.
    pub fn goal_id(&self) -> &str {
        match self {
            Self::GoalCreated { goal_id, .. }
            | Self::GoalUpdated { goal_id, .. }
            | Self::GoalDeleted { goal_id, .. }
            | Self::ProgressLogged { goal_id, .. }
            | Self::MilestoneReached { goal_id, .. }
            | Self::GoalAchieved { goal_id } => goal_id,
        }
    }
}
