//! Customer create/edit modal
//!
//! - view_model.rs: form state and the save command
//! - view.rs: Leptos component

mod view;
mod view_model;

pub use view::CustomerDetails;
pub use view_model::CustomerDetailsViewModel;
