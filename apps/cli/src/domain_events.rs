//! Domain event sink for the command line.
//!
//! There is nothing to refresh in a one-shot process, so events are only
//! traced for diagnostics.

use goaltracker_core::events::{DomainEvent, DomainEventSink};

#[derive(Clone, Default)]
pub struct TracingDomainEventSink;

impl DomainEventSink for TracingDomainEventSink {
    fn emit(&self, event: DomainEvent) {
        match &event {
            DomainEvent::GoalAchieved { goal_id } => {
                tracing::info!(goal_id = %goal_id, "Goal achieved")
            }
            DomainEvent::MilestoneReached { goal_id, milestone } => {
                tracing::info!(goal_id = %goal_id, milestone = *milestone, "Milestone reached")
            }
            other => tracing::debug!(event = ?other, "Domain event"),
        }
    }
}
