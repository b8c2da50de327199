//! Reports module - read-only aggregates over goals and updates.

mod reports_model;
mod reports_service;
mod reports_traits;

pub use reports_model::{average_progress, DashboardSummary, GoalSummary, YearReport};
pub use reports_service::ReportService;
pub use reports_traits::ReportServiceTrait;
