pub mod budget_category;
pub mod division;
pub mod post_po_status;
pub mod project_status;
pub mod project_type;
pub mod role;
pub mod sales_stage;
pub mod sph;

pub use budget_category::BudgetCategory;
pub use division::Division;
pub use post_po_status::PostPoStatus;
pub use project_status::ProjectStatus;
pub use project_type::ProjectType;
pub use role::Role;
pub use sales_stage::SalesStage;
pub use sph::{LossReasonCategory, SphReleaseStatus, SphStatus};
