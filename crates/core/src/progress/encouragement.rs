//! Encouragement messages shown alongside celebrations.
//!
//! Purely cosmetic. The randomness source is a parameter so callers can
//! seed it in tests.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::Celebration;

const PROGRESS_MESSAGES: [&str; 8] = [
    "🎉 Great progress! Keep it up!",
    "💪 You're doing amazing!",
    "🌟 Every step counts!",
    "✨ You're on the right track!",
    "🚀 Keep pushing forward!",
    "💯 You've got this!",
    "🎯 Making great strides!",
    "⭐ Progress looks fantastic!",
];

const ACHIEVEMENT_MESSAGES: [&str; 8] = [
    "🏆 Congratulations! You did it!",
    "🎊 Goal achieved! You're incredible!",
    "🌟 Amazing work! You reached your goal!",
    "💫 You're unstoppable! Goal completed!",
    "🎉 Fantastic! Another goal conquered!",
    "✨ Outstanding achievement!",
    "🔥 You're on fire! Goal accomplished!",
    "💎 Perfect! You nailed it!",
];

/// Indexed by milestone band: 25, 50, 75, 90.
const MILESTONE_MESSAGES: [&str; 4] = [
    "🎯 25% complete! You're a quarter of the way there!",
    "🎯 50% complete! Halfway there!",
    "🎯 75% complete! Almost there!",
    "🎯 90% complete! So close to the finish line!",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncouragementKind {
    Progress,
    Achievement,
    Milestone,
}

impl From<Celebration> for EncouragementKind {
    fn from(celebration: Celebration) -> Self {
        match celebration {
            Celebration::Achievement => EncouragementKind::Achievement,
            Celebration::Milestone { .. } => EncouragementKind::Milestone,
            Celebration::Progress => EncouragementKind::Progress,
        }
    }
}

/// Picks a message for `kind`.
///
/// Milestone messages are chosen by the band `progress` falls in; below 25
/// a milestone request falls back to a random progress message.
pub fn encouragement_message<R: Rng + ?Sized>(
    kind: EncouragementKind,
    progress: u8,
    rng: &mut R,
) -> &'static str {
    match kind {
        EncouragementKind::Achievement => pick(&ACHIEVEMENT_MESSAGES, rng),
        EncouragementKind::Milestone => match progress {
            90.. => MILESTONE_MESSAGES[3],
            75..=89 => MILESTONE_MESSAGES[2],
            50..=74 => MILESTONE_MESSAGES[1],
            25..=49 => MILESTONE_MESSAGES[0],
            _ => pick(&PROGRESS_MESSAGES, rng),
        },
        EncouragementKind::Progress => pick(&PROGRESS_MESSAGES, rng),
    }
}

fn pick<R: Rng + ?Sized>(messages: &[&'static str], rng: &mut R) -> &'static str {
    messages.choose(rng).copied().unwrap_or_default()
}
