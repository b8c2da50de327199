//! Command handlers. Each returns the JSON document printed on stdout.

use goaltracker_core::goals::{
    get_category_by_id, Goal, GoalStatus, GoalUpdate, NewGoal, GOAL_CATEGORIES,
};
use goaltracker_core::progress::{encouragement_message, EncouragementKind};
use goaltracker_core::updates::NewProgressUpdate;
use goaltracker_core::utils::Clock;
use serde_json::{json, Value};

use crate::cli::Commands;
use crate::main_lib::AppState;

pub async fn execute(command: Commands, state: &AppState) -> anyhow::Result<Value> {
    let output = match command {
        Commands::Create {
            title,
            description,
            category,
            target_date,
        } => {
            let goal = state
                .goal_service
                .create_goal(NewGoal {
                    title,
                    description,
                    category,
                    target_date,
                })
                .await?;
            serde_json::to_value(goal)?
        }

        Commands::Edit {
            id,
            title,
            description,
            category,
            target_date,
            clear_target_date,
        } => {
            let target_date = if clear_target_date {
                Some(None)
            } else {
                target_date.map(Some)
            };
            let changes = GoalUpdate {
                title,
                description,
                category,
                target_date,
            };
            let goal = state.goal_service.update_goal(&id, changes).await?;
            serde_json::to_value(goal)?
        }

        Commands::Delete { id } => {
            let deleted = state.goal_service.delete_goal(&id).await?;
            json!({ "id": id, "deleted": deleted })
        }

        Commands::Show { id } => goal_view(&state.goal_service.get_goal(&id)?)?,

        Commands::List { year, status } => {
            let status: Option<GoalStatus> = status.map(Into::into);
            let goals = state
                .goal_service
                .get_all_goals(year)?
                .iter()
                .filter(|goal| status.map_or(true, |s| goal.status == s))
                .map(goal_view)
                .collect::<anyhow::Result<Vec<_>>>()?;
            Value::Array(goals)
        }

        Commands::Log { id, progress, note } => {
            let logged = state
                .update_service
                .log_update(&id, NewProgressUpdate { progress, note })
                .await?;
            let encouragement = logged.celebration.map(|celebration| {
                encouragement_message(
                    EncouragementKind::from(celebration),
                    logged.goal.progress,
                    &mut rand::thread_rng(),
                )
            });
            json!({ "logged": logged, "encouragement": encouragement })
        }

        Commands::History { id } => {
            serde_json::to_value(state.update_service.get_goal_updates(&id)?)?
        }

        Commands::Report { year } => {
            let year = year.unwrap_or_else(|| state.clock.current_year());
            serde_json::to_value(state.report_service.generate_year_report(year)?)?
        }

        Commands::Years => serde_json::to_value(state.report_service.get_available_years()?)?,

        Commands::Dashboard => serde_json::to_value(state.report_service.get_dashboard_summary()?)?,

        Commands::Categories => serde_json::to_value(GOAL_CATEGORIES)?,
    };
    Ok(output)
}

/// Goal JSON plus the display name and icon of its category. Unknown
/// category ids render as the general category.
fn goal_view(goal: &Goal) -> anyhow::Result<Value> {
    let category = get_category_by_id(&goal.category);
    let mut value = serde_json::to_value(goal)?;
    if let Value::Object(fields) = &mut value {
        fields.insert("categoryName".to_string(), json!(category.name));
        fields.insert("categoryIcon".to_string(), json!(category.icon));
    }
    Ok(value)
}
