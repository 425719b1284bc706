use serde::{Deserialize, Serialize};

/// Actual value against its target
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KpiBlock {
    pub value: f64,
    pub target: f64,
    pub pct: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpportunityBlock {
    pub target: f64,
    /// Ratio 0..1
    pub conversion: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Kpis {
    pub total_sales: KpiBlock,
    pub carry_over: KpiBlock,
    pub project_based: KpiBlock,
    pub recurring: KpiBlock,
    pub new_recurring: KpiBlock,
    pub opportunity: OpportunityBlock,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Totals {
    pub total_target_revenue: f64,
    pub total_realization: f64,
    pub total_projects: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineStage {
    pub stage: i32,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pipeline {
    #[serde(deserialize_with = "null_as_empty")]
    pub stages: Vec<PipelineStage>,
    pub total_weighted_revenue: Option<f64>,
}

/// Label/value pair of a breakdown chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownItem {
    pub label: String,
    #[serde(default)]
    pub value: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardBudget {
    pub total_budget: f64,
    pub total_realization: f64,
}

/// Monthly target and realization
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastPoint {
    pub month: String,
    pub target: f64,
    pub realization: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProject {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub target_revenue: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerRow {
    pub customer: String,
    pub total_target: f64,
    pub total_real: f64,
}

/// GET /dashboard. Every section may be missing; missing arrays decode as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardResponse {
    pub kpis: Kpis,
    pub totals: Totals,
    pub pipeline: Pipeline,
    #[serde(deserialize_with = "null_as_empty")]
    pub division_breakdown: Vec<BreakdownItem>,
    #[serde(deserialize_with = "null_as_empty")]
    pub type_breakdown: Vec<BreakdownItem>,
    #[serde(deserialize_with = "null_as_empty")]
    pub customer_contribution: Vec<BreakdownItem>,
    #[serde(deserialize_with = "null_as_empty")]
    pub status_breakdown: Vec<BreakdownItem>,
    pub budget: DashboardBudget,
    #[serde(deserialize_with = "null_as_empty")]
    pub forecast: Vec<ForecastPoint>,
    #[serde(deserialize_with = "null_as_empty")]
    pub top_projects: Vec<TopProject>,
    #[serde(deserialize_with = "null_as_empty")]
    pub customer_table: Vec<CustomerRow>,
}

/// Go encodes empty slices as `null`
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_and_null_arrays_decode_empty() {
        let r: DashboardResponse = serde_json::from_str(
            r#"{"kpis":{"total_sales":{"value":10,"target":20,"pct":50}},"forecast":null}"#,
        )
        .unwrap();
        assert!(r.forecast.is_empty());
        assert!(r.customer_table.is_empty());
        assert!(r.pipeline.stages.is_empty());
        assert_eq!(r.kpis.total_sales.pct, 50.0);
        assert_eq!(r.kpis.opportunity.conversion, 0.0);
    }

    #[test]
    fn test_full_pipeline_section() {
        let r: DashboardResponse = serde_json::from_str(
            r#"{"pipeline":{"stages":[{"stage":2,"label":"Qualification","count":3}],"total_weighted_revenue":1500.5}}"#,
        )
        .unwrap();
        assert_eq!(r.pipeline.stages[0].count, 3);
        assert_eq!(r.pipeline.total_weighted_revenue, Some(1500.5));
    }
}
