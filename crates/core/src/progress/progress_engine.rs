//! Stateless progress rules shared by the update log and front ends.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_PROGRESS, MILESTONES, MIN_PROGRESS};
use crate::goals::{Goal, GoalStatus};

/// Feedback a front end should show after a progress update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Celebration {
    /// The goal just moved to achieved.
    Achievement,
    /// A milestone threshold was crossed.
    Milestone { threshold: u8 },
    /// Progress went up without crossing a threshold.
    Progress,
}

/// Clamps any integer into the valid progress range.
pub fn clamp_progress(value: i64) -> u8 {
    // The clamp guarantees the value fits in a u8.
    value.clamp(i64::from(MIN_PROGRESS), i64::from(MAX_PROGRESS)) as u8
}

/// Returns the lowest milestone `m` with `old < m <= new`.
///
/// When one update crosses several thresholds only the lowest is reported.
pub fn check_milestone(old_progress: u8, new_progress: u8) -> Option<u8> {
    MILESTONES
        .iter()
        .copied()
        .find(|&m| old_progress < m && m <= new_progress)
}

/// Sets the goal's progress to `value` (clamped) and performs the one-way
/// `active -> achieved` transition when it reaches 100.
///
/// Achieved goals are left untouched: their progress stays pinned so the
/// `achieved <=> progress == 100` invariant holds.
///
/// Returns `true` if this call achieved the goal.
pub fn apply_progress(goal: &mut Goal, value: i64, now: DateTime<Utc>) -> bool {
    if goal.status == GoalStatus::Achieved {
        return false;
    }

    let progress = clamp_progress(value);
    goal.progress = progress;

    if progress >= MAX_PROGRESS {
        goal.status = GoalStatus::Achieved;
        goal.achieved_at = Some(now);
        return true;
    }
    false
}

/// Picks the celebration for a progress change. Achievement beats a
/// milestone, which beats plain progress.
pub fn select_celebration(
    previous_progress: u8,
    new_progress: u8,
    just_achieved: bool,
) -> Option<Celebration> {
    if just_achieved {
        return Some(Celebration::Achievement);
    }
    if let Some(threshold) = check_milestone(previous_progress, new_progress) {
        return Some(Celebration::Milestone { threshold });
    }
    if new_progress > previous_progress {
        return Some(Celebration::Progress);
    }
    None
}
