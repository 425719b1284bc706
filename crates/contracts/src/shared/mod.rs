pub mod config;
pub mod csv_export;
pub mod envelope;
pub mod error;
pub mod format;
pub mod list_query;
pub mod month;
pub mod query;
pub mod request_seq;
