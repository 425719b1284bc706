pub mod filter_select;
pub mod form_select;
pub mod pagination_controls;
pub mod progress_bar;
pub mod stat_card;
