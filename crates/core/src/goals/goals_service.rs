use async_trait::async_trait;
use log::{debug, warn};
use std::sync::Arc;
use uuid::Uuid;

use crate::constants::MAX_ACTIVE_GOALS;
use crate::errors::Result;
use crate::events::{DomainEvent, DomainEventSink, NoOpDomainEventSink};
use crate::goals::goals_constants::DEFAULT_CATEGORY_ID;
use crate::goals::goals_errors::GoalError;
use crate::goals::goals_model::{Goal, GoalStatus, GoalUpdate, NewGoal};
use crate::goals::goals_traits::GoalServiceTrait;
use crate::storage::{EntityKind, YearStore};
use crate::utils::time_utils::local_year;
use crate::utils::Clock;

pub struct GoalService {
    store: Arc<YearStore>,
    clock: Arc<dyn Clock>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl GoalService {
    pub fn new(store: Arc<YearStore>, clock: Arc<dyn Clock>) -> Self {
        GoalService {
            store,
            clock,
            event_sink: Arc::new(NoOpDomainEventSink),
        }
    }

    pub fn with_event_sink(mut self, event_sink: Arc<dyn DomainEventSink>) -> Self {
        self.event_sink = event_sink;
        self
    }

    fn load_goals(&self, year: i32) -> Vec<Goal> {
        self.store.read(EntityKind::Goals, year)
    }

    async fn save_goals(&self, year: i32, goals: &[Goal]) {
        if !self.store.write(EntityKind::Goals, year, goals).await {
            warn!("Goals for {} were not persisted", year);
        }
    }
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        new_goal.validate()?;

        // One reading of the clock so `year` and `created_at` agree.
        let now = self.clock.now();
        let year = local_year(now);
        let _guard = self.store.lock_year(year).await;
        let mut goals = self.load_goals(year);

        let active_count = goals.iter().filter(|g| g.is_active()).count();
        if active_count >= MAX_ACTIVE_GOALS {
            return Err(GoalError::CapacityExceeded {
                max: MAX_ACTIVE_GOALS,
            }
            .into());
        }

        let goal = Goal {
            id: Uuid::now_v7().to_string(),
            title: new_goal.title.trim().to_string(),
            description: new_goal
                .description
                .map(|d| d.trim().to_string())
                .unwrap_or_default(),
            category: new_goal
                .category
                .unwrap_or_else(|| DEFAULT_CATEGORY_ID.to_string()),
            target_date: new_goal.target_date,
            status: GoalStatus::Active,
            progress: 0,
            created_at: now,
            updated_at: now,
            achieved_at: None,
            year,
        };

        goals.push(goal.clone());
        self.save_goals(year, &goals).await;
        debug!("Created goal {} in {}", goal.id, year);

        self.event_sink
            .emit(DomainEvent::goal_created(goal.id.clone(), year));
        Ok(goal)
    }

    async fn update_goal(&self, goal_id: &str, changes: GoalUpdate) -> Result<Goal> {
        let now = self.clock.now();
        let year = local_year(now);
        let _guard = self.store.lock_year(year).await;
        let mut goals = self.load_goals(year);

        let goal = goals
            .iter_mut()
            .find(|g| g.id == goal_id)
            .ok_or_else(|| GoalError::NotFound(goal_id.to_string()))?;

        if changes.is_empty() {
            return Ok(goal.clone());
        }
        changes.apply_to(goal)?;
        goal.updated_at = now;
        let updated = goal.clone();

        self.save_goals(year, &goals).await;
        self.event_sink
            .emit(DomainEvent::goal_updated(goal_id, year));
        Ok(updated)
    }

    async fn delete_goal(&self, goal_id: &str) -> Result<bool> {
        let year = self.clock.current_year();
        let _guard = self.store.lock_year(year).await;
        let mut goals = self.load_goals(year);

        let before = goals.len();
        goals.retain(|g| g.id != goal_id);
        let removed = goals.len() != before;

        if removed {
            self.save_goals(year, &goals).await;
            debug!("Deleted goal {} from {}", goal_id, year);
            self.event_sink
                .emit(DomainEvent::goal_deleted(goal_id, year));
        }
        Ok(removed)
    }

    fn get_goal(&self, goal_id: &str) -> Result<Goal> {
        let year = self.clock.current_year();
        self.load_goals(year)
            .into_iter()
            .find(|g| g.id == goal_id)
            .ok_or_else(|| GoalError::NotFound(goal_id.to_string()).into())
    }

    fn get_active_goals(&self) -> Result<Vec<Goal>> {
        let year = self.clock.current_year();
        Ok(self
            .load_goals(year)
            .into_iter()
            .filter(|g| g.is_active())
            .collect())
    }

    fn get_all_goals(&self, year: Option<i32>) -> Result<Vec<Goal>> {
        let year = year.unwrap_or_else(|| self.clock.current_year());
        Ok(self.load_goals(year))
    }

    fn get_goal_years(&self) -> Result<Vec<i32>> {
        Ok(self.store.list_years(EntityKind::Goals))
    }
}
