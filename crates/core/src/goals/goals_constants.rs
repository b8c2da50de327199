use serde::Serialize;

/// Category assigned when none is given.
pub const DEFAULT_CATEGORY_ID: &str = "general";

/// A goal category. Categories are a fixed lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GoalCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}

/// All categories. The last entry is the fallback.
pub const GOAL_CATEGORIES: [GoalCategory; 9] = [
    GoalCategory {
        id: "health",
        name: "Health & Fitness",
        icon: "💪",
    },
    GoalCategory {
        id: "career",
        name: "Career",
        icon: "💼",
    },
    GoalCategory {
        id: "education",
        name: "Education",
        icon: "📚",
    },
    GoalCategory {
        id: "finance",
        name: "Finance",
        icon: "💰",
    },
    GoalCategory {
        id: "relationships",
        name: "Relationships",
        icon: "❤️",
    },
    GoalCategory {
        id: "hobbies",
        name: "Hobbies",
        icon: "🎨",
    },
    GoalCategory {
        id: "travel",
        name: "Travel",
        icon: "✈️",
    },
    GoalCategory {
        id: "personal",
        name: "Personal Growth",
        icon: "🌟",
    },
    GoalCategory {
        id: DEFAULT_CATEGORY_ID,
        name: "General",
        icon: "📝",
    },
];

/// Looks up a category, falling back to "general" for unknown ids.
pub fn get_category_by_id(id: &str) -> &'static GoalCategory {
    GOAL_CATEGORIES
        .iter()
        .find(|c| c.id == id)
        .unwrap_or(&GOAL_CATEGORIES[GOAL_CATEGORIES.len() - 1])
}

pub fn is_known_category(id: &str) -> bool {
    GOAL_CATEGORIES.iter().any(|c| c.id == id)
}
