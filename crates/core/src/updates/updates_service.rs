use async_trait::async_trait;
use log::{debug, warn};
use std::sync::Arc;
use uuid::Uuid;

use crate::errors::Result;
use crate::events::{DomainEvent, DomainEventSink, NoOpDomainEventSink};
use crate::goals::{Goal, GoalError};
use crate::progress::{apply_progress, check_milestone, select_celebration};
use crate::storage::{EntityKind, YearStore};
use crate::updates::updates_model::{LoggedUpdate, NewProgressUpdate, ProgressUpdate};
use crate::updates::updates_traits::ProgressUpdateServiceTrait;
use crate::utils::time_utils::local_year;
use crate::utils::Clock;

pub struct ProgressUpdateService {
    store: Arc<YearStore>,
    clock: Arc<dyn Clock>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl ProgressUpdateService {
    pub fn new(store: Arc<YearStore>, clock: Arc<dyn Clock>) -> Self {
        ProgressUpdateService {
            store,
            clock,
            event_sink: Arc::new(NoOpDomainEventSink),
        }
    }

    pub fn with_event_sink(mut self, event_sink: Arc<dyn DomainEventSink>) -> Self {
        self.event_sink = event_sink;
        self
    }

    fn load_updates(&self, year: i32) -> Vec<ProgressUpdate> {
        self.store.read(EntityKind::Updates, year)
    }

    fn emit_events(&self, logged: &LoggedUpdate, just_achieved: bool) {
        let mut events = vec![DomainEvent::progress_logged(
            logged.goal.id.clone(),
            logged.update.id.clone(),
            logged.update.progress,
        )];
        if let Some(milestone) = logged.milestone {
            events.push(DomainEvent::milestone_reached(
                logged.goal.id.clone(),
                milestone,
            ));
        }
        if just_achieved {
            events.push(DomainEvent::goal_achieved(logged.goal.id.clone()));
        }
        self.event_sink.emit_batch(events);
    }
}

#[async_trait]
impl ProgressUpdateServiceTrait for ProgressUpdateService {
    async fn log_update(&self, goal_id: &str, input: NewProgressUpdate) -> Result<LoggedUpdate> {
        let now = self.clock.now();
        let year = local_year(now);
        let _guard = self.store.lock_year(year).await;
        let mut goals: Vec<Goal> = self.store.read(EntityKind::Goals, year);
        let mut updates = self.load_updates(year);

        let goal = goals
            .iter_mut()
            .find(|g| g.id == goal_id)
            .ok_or_else(|| GoalError::NotFound(goal_id.to_string()))?;

        let previous_progress = goal.progress;
        let requested = input
            .progress
            .unwrap_or_else(|| i64::from(previous_progress));
        let just_achieved = apply_progress(goal, requested, now);
        goal.updated_at = now;

        let update = ProgressUpdate {
            id: Uuid::now_v7().to_string(),
            goal_id: goal_id.to_string(),
            goal_title: goal.title.clone(),
            note: input
                .note
                .map(|n| n.trim().to_string())
                .unwrap_or_default(),
            progress: goal.progress,
            timestamp: now,
        };
        let goal = goal.clone();
        updates.push(update.clone());

        // The log is written before the goal state.
        if !self.store.write(EntityKind::Updates, year, &updates).await {
            warn!("Updates for {} were not persisted", year);
        }
        if !self.store.write(EntityKind::Goals, year, &goals).await {
            warn!("Goals for {} were not persisted", year);
        }

        let milestone = check_milestone(previous_progress, goal.progress);
        let celebration = select_celebration(previous_progress, goal.progress, just_achieved);
        debug!(
            "Logged update {} for goal {}: {} -> {}",
            update.id, goal.id, previous_progress, goal.progress
        );

        let logged = LoggedUpdate {
            update,
            goal,
            previous_progress,
            milestone,
            celebration,
        };
        self.emit_events(&logged, just_achieved);
        Ok(logged)
    }

    fn get_goal_updates(&self, goal_id: &str) -> Result<Vec<ProgressUpdate>> {
        let year = self.clock.current_year();
        let mut updates: Vec<ProgressUpdate> = self
            .load_updates(year)
            .into_iter()
            .filter(|u| u.goal_id == goal_id)
            .collect();
        updates.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(updates)
    }

    fn get_all_updates(&self, year: Option<i32>) -> Result<Vec<ProgressUpdate>> {
        let year = year.unwrap_or_else(|| self.clock.current_year());
        Ok(self.load_updates(year))
    }
}
