use serde::{Deserialize, Serialize};

use crate::domain::common::AggregateRoot;
use crate::shared::list_query::{Searchable, SortValue, Sortable};

/// Monthly marketing budget of one division.
/// Realization totals are computed by the API and omitted when zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: i64,
    #[serde(default)]
    pub division: String,
    /// "YYYY-MM"
    #[serde(default)]
    pub month: String,
    #[serde(default)]
    pub budget_amount: f64,
    #[serde(default)]
    pub total_realization: Option<f64>,
    #[serde(default)]
    pub remaining: Option<f64>,
    #[serde(default)]
    pub achievement: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Budget {
    pub fn total_realization(&self) -> f64 {
        self.total_realization.unwrap_or(0.0)
    }

    pub fn remaining(&self) -> f64 {
        self.remaining.unwrap_or(0.0)
    }

    pub fn achievement(&self) -> f64 {
        self.achievement.unwrap_or(0.0)
    }
}

impl AggregateRoot for Budget {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn collection_name() -> &'static str {
        "budgets"
    }

    fn element_name() -> &'static str {
        "Budget"
    }

    fn list_name() -> &'static str {
        "Budgets"
    }
}

impl Searchable for Budget {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.division.as_str(), self.month.as_str()]
    }
}

impl Sortable for Budget {
    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "division" => SortValue::text(self.division.as_str()),
            "budget_amount" => SortValue::Number(self.budget_amount),
            _ => SortValue::text(self.month.as_str()),
        }
    }
}

/// Spending booked against a budget
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetRealization {
    pub id: i64,
    #[serde(default)]
    pub budget_id: Option<i64>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub created_at: String,
}

/// GET /budgets/:id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetDetail {
    pub budget: Budget,
    #[serde(default)]
    pub realization: Vec<BudgetRealization>,
}

/// One month of GET /budgets/trend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub month: String,
    #[serde(default)]
    pub budget: f64,
    #[serde(default)]
    pub realization: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendResponse {
    #[serde(default)]
    pub trend: Vec<TrendPoint>,
}

/// POST /budgets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBudgetDto {
    pub division: String,
    pub month: String,
    pub budget_amount: f64,
}

/// PUT /budgets/:id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateBudgetDto {
    pub budget_amount: f64,
}

/// POST /budgets/:id/realizations and PUT /budgets/:id/realizations/:rid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealizationDto {
    pub category: String,
    pub amount: f64,
    pub note: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_budget_without_computed_fields() {
        let b: Budget = serde_json::from_str(
            r#"{"id":4,"division":"IT Solutions","month":"2025-02","budget_amount":10000000}"#,
        )
        .unwrap();
        assert_eq!(b.total_realization(), 0.0);
        assert_eq!(b.achievement, None);
    }

    #[test]
    fn test_decode_detail() {
        let d: BudgetDetail = serde_json::from_str(
            r#"{
                "budget": {"id":1,"division":"IT Solutions","month":"2025-01","budget_amount":100,"total_realization":40},
                "realization": [{"id":9,"budget_id":1,"category":"ENT & REP","amount":40,"note":"","created_at":"2025-01-05T10:00:00Z"}]
            }"#,
        )
        .unwrap();
        assert_eq!(d.realization.len(), 1);
        assert_eq!(d.budget.total_realization(), 40.0);
    }

    #[test]
    fn test_paths() {
        assert_eq!(Budget::item_path(5), "/budgets/5");
    }
}
