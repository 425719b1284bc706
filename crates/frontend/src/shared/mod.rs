pub mod api_client;
pub mod api_utils;
pub mod charts;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod export;
pub mod icons;
pub mod list_utils;
pub mod modal_frame;
pub mod page_frame;
