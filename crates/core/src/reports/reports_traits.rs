use crate::errors::Result;
use crate::reports::reports_model::{DashboardSummary, YearReport};

/// Trait for report operations. Reports are recomputed on every call.
pub trait ReportServiceTrait: Send + Sync {
    fn generate_year_report(&self, year: i32) -> Result<YearReport>;

    /// Years with goals plus the current year, most recent first.
    fn get_available_years(&self) -> Result<Vec<i32>>;

    fn get_dashboard_summary(&self) -> Result<DashboardSummary>;
}
