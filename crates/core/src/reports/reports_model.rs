//! Report models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::goals::{Goal, GoalStatus};

/// Flattened view of one goal inside a report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalSummary {
    pub id: String,
    pub title: String,
    pub status: GoalStatus,
    pub progress: u8,
    pub created_at: DateTime<Utc>,
    pub achieved_at: Option<DateTime<Utc>>,
}

impl From<&Goal> for GoalSummary {
    fn from(goal: &Goal) -> Self {
        Self {
            id: goal.id.clone(),
            title: goal.title.clone(),
            status: goal.status,
            progress: goal.progress,
            created_at: goal.created_at,
            achieved_at: goal.achieved_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct YearReport {
    pub year: i32,
    pub total_goals: usize,
    pub active_goals: usize,
    pub achieved_goals: usize,
    /// Mean goal progress rounded half up, 0 without goals.
    pub average_progress: u8,
    pub total_updates: usize,
    /// Zero-based month (0 = January) to number of updates. Months without
    /// updates are absent.
    pub updates_by_month: BTreeMap<u32, usize>,
    pub goals: Vec<GoalSummary>,
}

/// Current-year overview for a home screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub year: i32,
    pub total_goals: usize,
    pub active_goals: usize,
    pub achieved_goals: usize,
    pub average_progress: u8,
    /// The first few active goals in creation order.
    pub top_active_goals: Vec<Goal>,
}

/// Mean progress of `goals`, rounded half up. Returns 0 for no goals.
pub fn average_progress(goals: &[Goal]) -> u8 {
    if goals.is_empty() {
        return 0;
    }
    let sum: u64 = goals.iter().map(|g| u64::from(g.progress)).sum();
    let count = goals.len() as u64;
    // floor(sum / count + 1/2) in integer arithmetic; never exceeds 100.
    ((2 * sum + count) / (2 * count)) as u8
}
