use serde::{Deserialize, Serialize};

use super::post_po::PostPoMonitoring;
use crate::domain::common::AggregateRoot;
use crate::enums::{SalesStage, SphReleaseStatus, SphStatus};
use crate::shared::list_query::{Searchable, SortValue, Sortable};

/// Project as returned by the list endpoint (and, flattened, by the detail endpoint)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Project {
    pub id: i64,
    pub project_code: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub customer_id: Option<i64>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub division: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub project_type: String,
    #[serde(default)]
    pub sales_stage: i32,
    #[serde(default)]
    pub sph_release_status: Option<String>,
    #[serde(default)]
    pub sph_status: Option<String>,
    #[serde(default)]
    pub sph_number: Option<String>,
    #[serde(default)]
    pub sph_release_date: Option<String>,
    #[serde(default)]
    pub sph_status_reason_category: Option<String>,
    #[serde(default)]
    pub sph_status_reason_note: Option<String>,
    #[serde(default)]
    pub total_revenue: Option<f64>,
    #[serde(default)]
    pub total_realization: Option<f64>,
    #[serde(default)]
    pub start_month: Option<String>,
    #[serde(default)]
    pub end_month: Option<String>,
    #[serde(default)]
    pub postpo_monitoring: Option<PostPoMonitoring>,
}

impl Project {
    pub fn sph_release(&self) -> SphReleaseStatus {
        SphReleaseStatus::normalize(self.sph_release_status.as_deref().unwrap_or(""))
    }

    /// Missing or unknown statuses read as Open
    pub fn sph_status_kind(&self) -> SphStatus {
        SphStatus::normalize(self.sph_status.as_deref())
    }

    pub fn stage(&self) -> Option<SalesStage> {
        SalesStage::from_number(self.sales_stage)
    }

    pub fn is_closing(&self) -> bool {
        SalesStage::is_closing(self.sales_stage)
    }

    pub fn customer_label(&self) -> &str {
        self.customer_name.as_deref().unwrap_or("-")
    }
}

impl AggregateRoot for Project {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn collection_name() -> &'static str {
        "projects"
    }

    fn element_name() -> &'static str {
        "Project"
    }

    fn list_name() -> &'static str {
        "Projects"
    }
}

impl Searchable for Project {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.project_code.as_str(), self.description.as_str()]
    }
}

impl Sortable for Project {
    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "division" => SortValue::text(self.division.as_str()),
            "status" => SortValue::text(self.status.as_str()),
            "project_type" => SortValue::text(self.project_type.as_str()),
            "total_revenue" => SortValue::number(self.total_revenue),
            "total_realization" => SortValue::number(self.total_realization),
            _ => SortValue::text(self.project_code.as_str()),
        }
    }
}

/// One month of a project's revenue plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePlanItem {
    pub month: String,
    #[serde(default)]
    pub target_revenue: f64,
    #[serde(default)]
    pub target_realization: f64,
}

/// GET /projects/:id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: Project,
    #[serde(default)]
    pub revenue_plans: Vec<RevenuePlanItem>,
}

/// GET /projects/summary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    #[serde(default)]
    pub total_projects: i64,
    #[serde(default)]
    pub prospect_projects: i64,
    #[serde(default)]
    pub closing_projects: i64,
    #[serde(default)]
    pub in_execution_projects: i64,
    #[serde(default)]
    pub completed_projects: i64,
    #[serde(default)]
    pub total_target_revenue: f64,
}

/// Plan row as sent when creating or updating a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePlanPayload {
    pub month: String,
    pub target_revenue: f64,
}

/// POST /projects and PUT /projects/:id body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDto {
    pub customer_id: i64,
    pub description: String,
    pub division: String,
    pub status: String,
    pub project_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sph_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sph_release_date: Option<String>,
    pub sph_release_status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sph_number: Option<String>,
    pub sales_stage: i32,
    pub revenue_plans: Vec<RevenuePlanPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sph_status_reason_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sph_status_reason_note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_list_row() {
        let json = r#"{
            "id": 7,
            "project_code": "PRJ-2025-007",
            "description": "Core network upgrade",
            "customer_id": 3,
            "customer_name": "PT Telkom",
            "division": "Network Communications",
            "status": "Prospect",
            "project_type": "Recurring",
            "sales_stage": 6,
            "sph_release_status": "Yes",
            "sph_status": null,
            "total_revenue": 1500000,
            "total_realization": 250000,
            "start_month": "2025-01",
            "end_month": "2025-06",
            "postpo_monitoring": {
                "stage1_status": "Done",
                "stage2_status": "In Progress",
                "stage3_status": "Not Started",
                "stage4_status": "Not Started",
                "stage5_status": "Not Started"
            }
        }"#;
        let p: Project = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, 7);
        assert!(p.is_closing());
        assert_eq!(p.sph_release(), SphReleaseStatus::Yes);
        assert_eq!(p.sph_status_kind(), SphStatus::Open);
        assert!(p.postpo_monitoring.is_some());
    }

    #[test]
    fn test_decode_detail_flattens_project() {
        let json = r#"{
            "id": 1,
            "project_code": "PRJ-1",
            "sales_stage": 2,
            "revenue_plans": [
                {"month": "2025-01", "target_revenue": 100, "target_realization": 40}
            ]
        }"#;
        let d: ProjectDetail = serde_json::from_str(json).unwrap();
        assert_eq!(d.project.project_code, "PRJ-1");
        assert_eq!(d.revenue_plans.len(), 1);
        assert_eq!(d.revenue_plans[0].target_realization, 40.0);
    }

    #[test]
    fn test_sort_values() {
        let p = Project {
            project_code: "PRJ-9".into(),
            total_revenue: None,
            ..Default::default()
        };
        assert_eq!(p.sort_value("total_revenue"), SortValue::Number(0.0));
        assert_eq!(p.sort_value("project_code"), SortValue::Text("PRJ-9".into()));
    }
}
