use log::debug;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::constants::DASHBOARD_ACTIVE_GOALS_LIMIT;
use crate::errors::Result;
use crate::goals::GoalServiceTrait;
use crate::reports::reports_model::{average_progress, DashboardSummary, GoalSummary, YearReport};
use crate::reports::reports_traits::ReportServiceTrait;
use crate::updates::ProgressUpdateServiceTrait;
use crate::utils::time_utils::local_month0;
use crate::utils::Clock;

pub struct ReportService {
    goal_service: Arc<dyn GoalServiceTrait>,
    update_service: Arc<dyn ProgressUpdateServiceTrait>,
    clock: Arc<dyn Clock>,
}

impl ReportService {
    pub fn new(
        goal_service: Arc<dyn GoalServiceTrait>,
        update_service: Arc<dyn ProgressUpdateServiceTrait>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        ReportService {
            goal_service,
            update_service,
            clock,
        }
    }
}

impl ReportServiceTrait for ReportService {
    fn generate_year_report(&self, year: i32) -> Result<YearReport> {
        let goals = self.goal_service.get_all_goals(Some(year))?;
        let updates = self.update_service.get_all_updates(Some(year))?;

        let mut updates_by_month: BTreeMap<u32, usize> = BTreeMap::new();
        for update in &updates {
            *updates_by_month
                .entry(local_month0(update.timestamp))
                .or_insert(0) += 1;
        }

        let active_goals = goals.iter().filter(|g| g.is_active()).count();
        let achieved_goals = goals.iter().filter(|g| g.is_achieved()).count();
        debug!(
            "Report {}: {} goal(s), {} update(s)",
            year,
            goals.len(),
            updates.len()
        );

        Ok(YearReport {
            year,
            total_goals: goals.len(),
            active_goals,
            achieved_goals,
            average_progress: average_progress(&goals),
            total_updates: updates.len(),
            updates_by_month,
            goals: goals.iter().map(GoalSummary::from).collect(),
        })
    }

    fn get_available_years(&self) -> Result<Vec<i32>> {
        let mut years = self.goal_service.get_goal_years()?;
        years.push(self.clock.current_year());
        years.sort_unstable_by(|a, b| b.cmp(a));
        years.dedup();
        Ok(years)
    }

    fn get_dashboard_summary(&self) -> Result<DashboardSummary> {
        let year = self.clock.current_year();
        let goals = self.goal_service.get_all_goals(Some(year))?;

        let top_active_goals: Vec<_> = goals
            .iter()
            .filter(|g| g.is_active())
            .take(DASHBOARD_ACTIVE_GOALS_LIMIT)
            .cloned()
            .collect();

        Ok(DashboardSummary {
            year,
            total_goals: goals.len(),
            active_goals: goals.iter().filter(|g| g.is_active()).count(),
            achieved_goals: goals.iter().filter(|g| g.is_achieved()).count(),
            average_progress: average_progress(&goals),
            top_active_goals,
        })
    }
}
