pub mod dto;
pub mod filters;
pub mod metrics;

pub use dto::DashboardResponse;
pub use filters::DashboardFilters;
