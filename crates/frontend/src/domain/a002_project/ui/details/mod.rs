//! Project detail page
//!
//! - view.rs: page with totals, revenue plan table and trend chart
//! - realization.rs: realization edit modal
//! - post_po.rs: post-PO monitoring panel

mod post_po;
mod realization;
mod view;

pub use view::ProjectDetails;
