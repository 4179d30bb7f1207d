//! Dashboard reporting reads.

use super::types::ReportSummary;
use super::{ApiClient, ApiError};

impl ApiClient {
    /// Fetch the dashboard summary. Figures are displayed verbatim and
    /// never recomputed here.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on network failure or non-success status.
    pub async fn report_summary(&self, token: &str) -> Result<ReportSummary, ApiError> {
        self.get_json("/v1/admin/reports/summary", &[], Some(token))
            .await
    }
}
