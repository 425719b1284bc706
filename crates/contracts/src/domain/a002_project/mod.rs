pub mod aggregate;
pub mod list_filter;
pub mod post_po;
pub mod revenue;
pub mod validation;

pub use aggregate::{Project, ProjectDetail, ProjectDto, ProjectSummary, RevenuePlanItem};
pub use list_filter::{CardMode, ExecutionFilter, ProjectFilter};
pub use post_po::{PostPoMonitoring, PostPoStage, PostPoStageUpdate};
pub use revenue::{RealizationEdit, RealizationUpdateRequest, RevenueTotals};
pub use validation::{PlanRow, ProjectForm};
