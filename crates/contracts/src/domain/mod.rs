pub mod a001_customer;
pub mod a002_project;
pub mod a003_budget;
pub mod common;
