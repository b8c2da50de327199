//! Goals domain models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::goals_constants::{is_known_category, DEFAULT_CATEGORY_ID};
use crate::constants::{MAX_DESCRIPTION_LENGTH, MAX_TITLE_LENGTH};
use crate::errors::{Error, Result, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    Active,
    Achieved,
}

/// Domain model representing a goal.
///
/// `status == Achieved` holds exactly when `progress == 100` and
/// `achieved_at` is set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
    pub status: GoalStatus,
    pub progress: u8,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achieved_at: Option<DateTime<Utc>>,
    /// Year bucket the goal belongs to.
    pub year: i32,
}

impl Goal {
    pub fn is_active(&self) -> bool {
        self.status == GoalStatus::Active
    }

    pub fn is_achieved(&self) -> bool {
        self.status == GoalStatus::Achieved
    }
}

fn default_category() -> String {
    DEFAULT_CATEGORY_ID.to_string()
}

/// Input model for creating a new goal
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub target_date: Option<NaiveDate>,
}

impl NewGoal {
    /// Validates the goal input.
    pub fn validate(&self) -> Result<()> {
        validate_title(&self.title)?;
        if let Some(ref description) = self.description {
            validate_description(description)?;
        }
        if let Some(ref category) = self.category {
            validate_category(category)?;
        }
        Ok(())
    }
}

/// Changes to the editable fields of a goal. Absent fields are left as-is.
///
/// Status, progress and `achieved_at` are deliberately missing: they only
/// change through logged progress updates.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    /// `Some(None)` clears the target date.
    #[serde(default, deserialize_with = "deserialize_patch_date")]
    pub target_date: Option<Option<NaiveDate>>,
}

impl GoalUpdate {
    /// Validates the goal update data.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref title) = self.title {
            validate_title(title)?;
        }
        if let Some(ref description) = self.description {
            validate_description(description)?;
        }
        if let Some(ref category) = self.category {
            validate_category(category)?;
        }
        Ok(())
    }

    /// Validates, then writes the present fields into `goal`. On error the
    /// goal is left untouched.
    pub fn apply_to(self, goal: &mut Goal) -> Result<()> {
        self.validate()?;

        if let Some(title) = self.title {
            goal.title = title.trim().to_string();
        }
        if let Some(description) = self.description {
            goal.description = description.trim().to_string();
        }
        if let Some(category) = self.category {
            goal.category = category;
        }
        if let Some(target_date) = self.target_date {
            goal.target_date = target_date;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self == &GoalUpdate::default()
    }
}

/// Distinguishes an explicit `null` (clear) from an absent field (keep).
fn deserialize_patch_date<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<Option<NaiveDate>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<NaiveDate>::deserialize(deserializer).map(Some)
}

fn validate_title(title: &str) -> Result<()> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation(ValidationError::MissingField(
            "title".to_string(),
        )));
    }
    if trimmed.chars().count() > MAX_TITLE_LENGTH {
        return Err(Error::Validation(ValidationError::TooLong {
            field: "title".to_string(),
            max: MAX_TITLE_LENGTH,
        }));
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<()> {
    if description.trim().chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(Error::Validation(ValidationError::TooLong {
            field: "description".to_string(),
            max: MAX_DESCRIPTION_LENGTH,
        }));
    }
    Ok(())
}

fn validate_category(category: &str) -> Result<()> {
    if !is_known_category(category) {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "Unknown category '{}'",
            category
        ))));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_goal() -> Goal {
        let created = Utc.with_ymd_and_hms(2025, 2, 1, 10, 0, 0).unwrap();
        Goal {
            id: "g1".to_string(),
            title: "Read 20 books".to_string(),
            description: String::new(),
            category: "education".to_string(),
            target_date: None,
            status: GoalStatus::Active,
            progress: 0,
            created_at: created,
            updated_at: created,
            achieved_at: None,
            year: 2025,
        }
    }

    #[test]
    fn test_goal_serializes_camel_case() {
        let json = serde_json::to_value(sample_goal()).unwrap();
        assert_eq!(json["status"], "active");
        assert_eq!(json["createdAt"], "2025-02-01T10:00:00Z");
        assert!(json.get("achievedAt").is_none());
        assert_eq!(json["year"], 2025);
    }

    #[test]
    fn test_goal_deserializes_with_defaults() {
        let json = r#"{
            "id": "1700000000000",
            "title": "Learn Rust",
            "status": "achieved",
            "progress": 100,
            "createdAt": "2024-01-05T08:00:00.000Z",
            "updatedAt": "2024-03-05T08:00:00.000Z",
            "achievedAt": "2024-03-05T08:00:00.000Z",
            "year": 2024
        }"#;
        let goal: Goal = serde_json::from_str(json).unwrap();
        assert_eq!(goal.category, "general");
        assert_eq!(goal.description, "");
        assert!(goal.is_achieved());
        assert!(goal.achieved_at.is_some());
    }

    #[test]
    fn test_new_goal_validation() {
        let ok = NewGoal {
            title: "  Learn to swim ".to_string(),
            ..Default::default()
        };
        assert!(ok.validate().is_ok());

        let blank = NewGoal {
            title: "   ".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            blank.validate(),
            Err(Error::Validation(ValidationError::MissingField(_)))
        ));

        let long = NewGoal {
            title: "x".repeat(MAX_TITLE_LENGTH + 1),
            ..Default::default()
        };
        assert!(matches!(
            long.validate(),
            Err(Error::Validation(ValidationError::TooLong { .. }))
        ));

        let exact = NewGoal {
            title: "é".repeat(MAX_TITLE_LENGTH),
            ..Default::default()
        };
        assert!(exact.validate().is_ok());

        let bad_category = NewGoal {
            title: "Climb".to_string(),
            category: Some("sports".to_string()),
            ..Default::default()
        };
        assert!(bad_category.validate().is_err());
    }

    #[test]
    fn test_goal_update_applies_present_fields_only() {
        let mut goal = sample_goal();
        let update = GoalUpdate {
            title: Some(" Read 30 books ".to_string()),
            target_date: Some(NaiveDate::from_ymd_opt(2025, 12, 31)),
            ..Default::default()
        };
        update.apply_to(&mut goal).unwrap();

        assert_eq!(goal.title, "Read 30 books");
        assert_eq!(goal.category, "education");
        assert_eq!(goal.target_date, NaiveDate::from_ymd_opt(2025, 12, 31));
    }

    #[test]
    fn test_goal_update_rejects_without_partial_write() {
        let mut goal = sample_goal();
        let update = GoalUpdate {
            title: Some("New title".to_string()),
            description: Some("d".repeat(MAX_DESCRIPTION_LENGTH + 1)),
            ..Default::default()
        };
        assert!(update.apply_to(&mut goal).is_err());
        assert_eq!(goal, sample_goal());
    }

    #[test]
    fn test_goal_update_target_date_null_vs_absent() {
        let clear: GoalUpdate = serde_json::from_str(r#"{"targetDate": null}"#).unwrap();
        assert_eq!(clear.target_date, Some(None));

        let keep: GoalUpdate = serde_json::from_str(r#"{"title": "x"}"#).unwrap();
        assert_eq!(keep.target_date, None);
        assert!(!keep.is_empty());
        assert!(GoalUpdate::default().is_empty());
    }
}
