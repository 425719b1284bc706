//! Budget detail page with its realization rows

mod realization;
mod view;

pub use view::BudgetDetails;
