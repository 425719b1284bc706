pub mod achievement;
pub mod aggregate;
pub mod list_filter;
pub mod realization;
pub mod validation;

pub use aggregate::{Budget, BudgetDetail, BudgetRealization, TrendPoint};
pub use list_filter::BudgetFilter;
pub use validation::{BudgetCreateForm, BudgetEditForm, RealizationForm};
