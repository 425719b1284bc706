mod dashboard;
mod filter_bar;
mod kpi_card;

pub use dashboard::SalesDashboard;
