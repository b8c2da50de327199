//! Progress update domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::goals::Goal;
use crate::progress::Celebration;

/// One entry of the progress log. Never edited once appended.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressUpdate {
    pub id: String,
    /// Back-reference only; the goal may since have been deleted.
    pub goal_id: String,
    /// Goal title at the time the update was logged.
    pub goal_title: String,
    #[serde(default)]
    pub note: String,
    /// Goal progress recorded by this update.
    pub progress: u8,
    pub timestamp: DateTime<Utc>,
}

/// Input model for logging progress.
///
/// A missing `progress` keeps the goal's current value. Out-of-range values
/// are clamped.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewProgressUpdate {
    pub progress: Option<i64>,
    pub note: Option<String>,
}

/// Result of logging progress: the appended entry, the goal as persisted,
/// and what feedback the change deserves.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoggedUpdate {
    pub update: ProgressUpdate,
    pub goal: Goal,
    pub previous_progress: u8,
    pub milestone: Option<u8>,
    pub celebration: Option<Celebration>,
}
