//! Dashboard filter bar and its query string

use crate::shared::month::month_to_date;
use crate::shared::query::build_query;

/// Select value meaning "no restriction"
pub const ALL: &str = "ALL";

/// Multi-select filters are empty when nothing is ticked.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardFilters {
    pub status: Vec<String>,
    pub sales_stage: Vec<String>,
    pub project_type: Vec<String>,
    pub division: String,
    pub customer: String,
    /// "YYYY-MM" or empty
    pub from_month: String,
    pub to_month: String,
}

impl Default for DashboardFilters {
    fn default() -> Self {
        Self {
            status: Vec::new(),
            sales_stage: Vec::new(),
            project_type: Vec::new(),
            division: ALL.to_string(),
            customer: ALL.to_string(),
            from_month: String::new(),
            to_month: String::new(),
        }
    }
}

/// Tick or untick a multi-select value
pub fn toggle_value(values: &mut Vec<String>, value: &str) {
    if let Some(pos) = values.iter().position(|v| v == value) {
        values.remove(pos);
    } else {
        values.push(value.to_string());
    }
}

impl DashboardFilters {
    /// Query pairs: repeated multi-select keys, then division, customer and the month range
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs: Vec<(&'static str, String)> = Vec::new();
        pairs.extend(self.status.iter().map(|v| ("status", v.clone())));
        pairs.extend(self.sales_stage.iter().map(|v| ("sales_stage", v.clone())));
        pairs.extend(self.project_type.iter().map(|v| ("project_type", v.clone())));
        if self.division != ALL {
            pairs.push(("division", self.division.clone()));
        }
        if self.customer != ALL {
            pairs.push(("customer", self.customer.clone()));
        }
        if !self.from_month.is_empty() {
            pairs.push(("from", month_to_date(&self.from_month)));
        }
        if !self.to_month.is_empty() {
            pairs.push(("to", month_to_date(&self.to_month)));
        }
        pairs
    }

    /// "/dashboard?..."
    pub fn path(&self) -> String {
        format!("/dashboard{}", build_query(&self.query_pairs()))
    }

    /// Header caption of the status selection
    pub fn status_label(&self) -> String {
        if self.status.is_empty() {
            "All".to_string()
        } else {
            self.status.join(", ")
        }
    }

    /// Exactly Prospect and Carry Over are ticked
    pub fn is_default_status(&self) -> bool {
        self.status.len() == 2
            && self.status.iter().any(|s| s == "Prospect")
            && self.status.iter().any(|s| s == "Carry Over")
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filters_produce_bare_path() {
        assert_eq!(DashboardFilters::default().path(), "/dashboard");
    }

    #[test]
    fn test_query_repeats_multi_select_keys() {
        let mut f = DashboardFilters::default();
        toggle_value(&mut f.status, "Prospect");
        toggle_value(&mut f.status, "Carry Over");
        toggle_value(&mut f.sales_stage, "6");
        f.division = "IT Solutions".into();
        f.from_month = "2025-01".into();
        f.to_month = "2025-06".into();
        assert_eq!(
            f.path(),
            "/dashboard?status=Prospect&status=Carry%20Over&sales_stage=6&division=IT%20Solutions&from=2025-01-01&to=2025-06-01"
        );
        assert!(f.is_default_status());
        assert_eq!(f.status_label(), "Prospect, Carry Over");
    }

    #[test]
    fn test_toggle_removes_existing_value() {
        let mut values = vec!["1".to_string(), "2".to_string()];
        toggle_value(&mut values, "1");
        assert_eq!(values, vec!["2"]);
    }

    #[test]
    fn test_customer_all_is_omitted() {
        let mut f = DashboardFilters::default();
        f.customer = "PT Maju".into();
        assert_eq!(f.path(), "/dashboard?customer=PT%20Maju");
        f.reset();
        assert_eq!(f.status_label(), "All");
        assert_eq!(f.path(), "/dashboard");
    }
}
