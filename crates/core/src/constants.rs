/// Maximum number of goals with `active` status allowed in one year bucket
pub const MAX_ACTIVE_GOALS: usize = 150;

/// Maximum length of a goal title, in characters
pub const MAX_TITLE_LENGTH: usize = 100;

/// Maximum length of a goal description, in characters
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

/// Lower bound of goal progress
pub const MIN_PROGRESS: u8 = 0;

/// Upper bound of goal progress; reaching it achieves the goal
pub const MAX_PROGRESS: u8 = 100;

/// Progress thresholds that trigger milestone feedback, ascending
pub const MILESTONES: [u8; 4] = [25, 50, 75, 90];

/// Number of active goals surfaced on the dashboard
pub const DASHBOARD_ACTIVE_GOALS_LIMIT: usize = 5;
