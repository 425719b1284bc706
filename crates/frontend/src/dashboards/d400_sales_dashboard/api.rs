use contracts::dashboards::d400_sales_dashboard::{DashboardFilters, DashboardResponse};
use contracts::shared::error::ApiError;

use crate::shared::api_client::client;

/// GET /dashboard with the filter bar as query string
pub async fn fetch_dashboard(filters: &DashboardFilters) -> Result<DashboardResponse, ApiError> {
    client().get(&filters.path()).await
}
