//! Types and client-side rules shared by the sales dashboard frontend:
//! API payloads, list filtering, validation, CSV export and dashboard math.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
