//! Create / edit form for projects: field coupling rules and submit validation

use std::collections::HashSet;

use super::aggregate::{Project, ProjectDto, RevenuePlanItem, RevenuePlanPayload};
use crate::enums::{
    Division, LossReasonCategory, ProjectStatus, ProjectType, SalesStage, SphReleaseStatus,
    SphStatus,
};
use crate::shared::error::ValidationError;
use crate::shared::format::parse_amount;
use crate::shared::month::normalize_month;

/// Raw revenue plan row as typed by the user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanRow {
    pub month: String,
    pub target_revenue: String,
}

impl PlanRow {
    pub fn new(month: &str, target_revenue: f64) -> Self {
        Self {
            month: month.to_string(),
            target_revenue: if target_revenue > 0.0 {
                target_revenue.to_string()
            } else {
                String::new()
            },
        }
    }

    fn month(&self) -> Option<String> {
        normalize_month(&self.month)
    }

    fn value(&self) -> Option<f64> {
        parse_amount(&self.target_revenue)
    }

    fn is_complete(&self) -> bool {
        self.month().is_some() && self.value().is_some_and(|v| v > 0.0)
    }

    /// Inline error for this row while editing a recurring plan
    pub fn error(&self, row: usize) -> Option<ValidationError> {
        if self.month().is_none() {
            Some(ValidationError::RevenuePlanMonthMissing { row })
        } else if !self.value().is_some_and(|v| v > 0.0) {
            Some(ValidationError::RevenuePlanValueNotPositive { row })
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectForm {
    pub description: String,
    pub customer_id: Option<i64>,
    pub division: Division,
    /// Set for "user" accounts; the division selector is then disabled
    pub locked_division: Option<Division>,
    pub status: ProjectStatus,
    pub project_type: ProjectType,
    pub sales_stage: SalesStage,
    pub sph_status: Option<SphStatus>,
    pub sph_release_status: SphReleaseStatus,
    pub sph_number: String,
    pub sph_release_date: String,
    pub reason_category: Option<LossReasonCategory>,
    pub reason_note: String,
    /// Project-based plans only use the first row
    pub plan_rows: Vec<PlanRow>,
}

impl ProjectForm {
    pub fn new(locked_division: Option<Division>) -> Self {
        Self {
            description: String::new(),
            customer_id: None,
            division: locked_division.unwrap_or(Division::ItSolutions),
            locked_division,
            status: ProjectStatus::Prospect,
            project_type: ProjectType::ProjectBased,
            sales_stage: SalesStage::Prospecting,
            sph_status: None,
            sph_release_status: SphReleaseStatus::No,
            sph_number: String::new(),
            sph_release_date: String::new(),
            reason_category: None,
            reason_note: String::new(),
            plan_rows: vec![PlanRow::default()],
        }
    }

    /// Pre-fill from an existing project and its revenue plan
    pub fn from_project(
        project: &Project,
        plans: &[RevenuePlanItem],
        locked_division: Option<Division>,
    ) -> Self {
        let mut form = Self::new(locked_division);
        form.description = project.description.clone();
        form.customer_id = project.customer_id;
        if locked_division.is_none() {
            if let Some(d) = Division::from_code(&project.division) {
                form.division = d;
            }
        }
        form.status = ProjectStatus::from_code(&project.status).unwrap_or(ProjectStatus::Prospect);
        form.project_type =
            ProjectType::from_code(&project.project_type).unwrap_or(ProjectType::ProjectBased);
        form.sales_stage = project.stage().unwrap_or(SalesStage::Prospecting);
        form.sph_status = project
            .sph_status
            .as_deref()
            .and_then(SphStatus::from_code);
        form.sph_release_status = project.sph_release();
        form.sph_number = project.sph_number.clone().unwrap_or_default();
        form.sph_release_date = project
            .sph_release_date
            .as_deref()
            .map(|d| d.chars().take(10).collect())
            .unwrap_or_default();
        form.reason_category = project
            .sph_status_reason_category
            .as_deref()
            .and_then(LossReasonCategory::from_code);
        form.reason_note = project.sph_status_reason_note.clone().unwrap_or_default();

        let mut rows: Vec<PlanRow> = plans
            .iter()
            .map(|p| PlanRow::new(&normalize_month(&p.month).unwrap_or_default(), p.target_revenue))
            .collect();
        if rows.is_empty() {
            rows.push(PlanRow::default());
        }
        form.plan_rows = rows;
        form
    }

    pub fn division_locked(&self) -> bool {
        self.locked_division.is_some()
    }

    /// Leaving "New Prospect" downgrades "New Recurring" to "Recurring"
    pub fn set_status(&mut self, status: ProjectStatus) {
        self.status = status;
        if status != ProjectStatus::NewProspect && self.project_type == ProjectType::NewRecurring {
            self.project_type = ProjectType::Recurring;
        }
    }

    pub fn project_type_options(&self) -> Vec<ProjectType> {
        ProjectType::allowed_for(self.status)
    }

    /// Releasing "No" drops any SPH number typed so far
    pub fn set_sph_release_status(&mut self, value: SphReleaseStatus) {
        self.sph_release_status = value;
        if value == SphReleaseStatus::No {
            self.sph_number.clear();
        }
    }

    /// Statuses other than Loss/Drop carry no reason
    pub fn set_sph_status(&mut self, value: Option<SphStatus>) {
        self.sph_status = value;
        if !self.requires_reason() {
            self.reason_category = None;
            self.reason_note.clear();
        }
    }

    /// The free-text note only exists for the "Other" category
    pub fn set_reason_category(&mut self, value: Option<LossReasonCategory>) {
        self.reason_category = value;
        if value != Some(LossReasonCategory::Other) {
            self.reason_note.clear();
        }
    }

    pub fn requires_reason(&self) -> bool {
        self.sph_status.is_some_and(|s| s.requires_reason())
    }

    pub fn add_plan_row(&mut self) {
        self.plan_rows.push(PlanRow::default());
    }

    pub fn remove_plan_row(&mut self, index: usize) {
        if index < self.plan_rows.len() {
            self.plan_rows.remove(index);
        }
    }

    /// Live per-row errors for a recurring plan (empty list for project-based)
    pub fn row_errors(&self) -> Vec<Option<ValidationError>> {
        if !self.project_type.is_recurring() {
            return Vec::new();
        }
        self.plan_rows
            .iter()
            .enumerate()
            .map(|(i, r)| r.error(i + 1))
            .collect()
    }

    pub fn has_duplicate_months(&self) -> bool {
        has_duplicate_months(&self.plan_rows.iter().filter_map(PlanRow::month).collect::<Vec<_>>())
    }

    /// Rows that make it into the payload, sorted by month
    fn plan_payload(&self) -> Vec<RevenuePlanPayload> {
        let rows: Vec<&PlanRow> = if self.project_type.is_recurring() {
            self.plan_rows.iter().filter(|r| r.is_complete()).collect()
        } else {
            self.plan_rows.iter().take(1).filter(|r| r.is_complete()).collect()
        };
        let mut payload: Vec<RevenuePlanPayload> = rows
            .into_iter()
            .filter_map(|r| {
                Some(RevenuePlanPayload {
                    month: r.month()?,
                    target_revenue: r.value()?,
                })
            })
            .collect();
        payload.sort_by(|a, b| a.month.cmp(&b.month));
        payload
    }

    /// Validate in order and build the request body. The first failing rule wins.
    pub fn validate(&self) -> Result<ProjectDto, ValidationError> {
        let customer_id = self.customer_id.ok_or(ValidationError::Required("Customer"))?;

        if self.project_type == ProjectType::NewRecurring
            && self.status != ProjectStatus::NewProspect
        {
            return Err(ValidationError::NewRecurringRequiresNewProspect);
        }

        let plans = self.plan_payload();
        if plans.is_empty() {
            return Err(ValidationError::RevenuePlanEmpty);
        }
        if self.project_type.is_recurring() {
            let months: Vec<String> = plans.iter().map(|p| p.month.clone()).collect();
            if has_duplicate_months(&months) {
                return Err(ValidationError::RevenuePlanDuplicateMonth);
            }
        }

        if self.sph_release_status == SphReleaseStatus::Yes && self.sph_number.trim().is_empty() {
            return Err(ValidationError::SphNumberRequired);
        }

        let requires_reason = self.requires_reason();
        if requires_reason {
            match self.reason_category {
                None => return Err(ValidationError::ReasonCategoryRequired),
                Some(LossReasonCategory::Other) if self.reason_note.trim().is_empty() => {
                    return Err(ValidationError::ReasonNoteRequired)
                }
                _ => {}
            }
        }

        let non_blank = |v: &str| {
            let v = v.trim();
            (!v.is_empty()).then(|| v.to_string())
        };

        Ok(ProjectDto {
            customer_id,
            description: self.description.trim().to_string(),
            division: self.locked_division.unwrap_or(self.division).code().to_string(),
            status: self.status.code().to_string(),
            project_type: self.project_type.code().to_string(),
            sph_status: self.sph_status.map(|s| s.code().to_string()),
            sph_release_date: non_blank(&self.sph_release_date),
            sph_release_status: self.sph_release_status.code().to_string(),
            sph_number: non_blank(&self.sph_number),
            sales_stage: self.sales_stage.number(),
            revenue_plans: plans,
            sph_status_reason_category: if requires_reason {
                self.reason_category.map(|c| c.code().to_string())
            } else {
                None
            },
            sph_status_reason_note: if requires_reason {
                non_blank(&self.reason_note)
            } else {
                None
            },
        })
    }
}

fn has_duplicate_months(months: &[String]) -> bool {
    let unique: HashSet<&String> = months.iter().collect();
    unique.len() != months.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ProjectForm {
        let mut form = ProjectForm::new(None);
        form.customer_id = Some(3);
        form.description = "Fiber backbone".into();
        form.plan_rows = vec![PlanRow::new("2025-04", 5_000_000.0)];
        form
    }

    #[test]
    fn test_valid_project_based() {
        let dto = valid_form().validate().unwrap();
        assert_eq!(dto.customer_id, 3);
        assert_eq!(dto.project_type, "Project Based");
        assert_eq!(dto.revenue_plans.len(), 1);
        assert_eq!(dto.sph_release_status, "No");
        assert_eq!(dto.sph_number, None);
    }

    #[test]
    fn test_customer_required_first() {
        let mut form = valid_form();
        form.customer_id = None;
        form.plan_rows.clear();
        assert_eq!(form.validate(), Err(ValidationError::Required("Customer")));
    }

    #[test]
    fn test_new_recurring_rejected_without_new_prospect() {
        let mut form = valid_form();
        form.status = ProjectStatus::NewProspect;
        form.project_type = ProjectType::NewRecurring;
        assert!(form.validate().is_ok());

        // selected while "New Prospect", status then changed without the coupling rule
        form.status = ProjectStatus::Prospect;
        assert_eq!(
            form.validate(),
            Err(ValidationError::NewRecurringRequiresNewProspect)
        );
    }

    #[test]
    fn test_status_change_downgrades_new_recurring() {
        let mut form = valid_form();
        form.set_status(ProjectStatus::NewProspect);
        form.project_type = ProjectType::NewRecurring;
        form.set_status(ProjectStatus::CarryOver);
        assert_eq!(form.project_type, ProjectType::Recurring);
        assert!(!form.project_type_options().contains(&ProjectType::NewRecurring));
    }

    #[test]
    fn test_sph_number_required_when_released() {
        let mut form = valid_form();
        form.set_sph_release_status(SphReleaseStatus::Yes);
        form.sph_number = "  ".into();
        assert_eq!(form.validate(), Err(ValidationError::SphNumberRequired));

        form.sph_number = "SPH/001/2025".into();
        assert_eq!(
            form.validate().unwrap().sph_number.as_deref(),
            Some("SPH/001/2025")
        );
    }

    #[test]
    fn test_release_no_clears_sph_number() {
        let mut form = valid_form();
        form.set_sph_release_status(SphReleaseStatus::Yes);
        form.sph_number = "SPH/002".into();
        form.set_sph_release_status(SphReleaseStatus::No);
        assert!(form.sph_number.is_empty());
        assert_eq!(form.validate().unwrap().sph_number, None);
    }

    #[test]
    fn test_loss_requires_reason_and_other_requires_note() {
        let mut form = valid_form();
        form.set_sph_status(Some(SphStatus::Loss));
        assert_eq!(form.validate(), Err(ValidationError::ReasonCategoryRequired));

        form.set_reason_category(Some(LossReasonCategory::Other));
        assert_eq!(form.validate(), Err(ValidationError::ReasonNoteRequired));

        form.reason_note = "Customer postponed budget".into();
        let dto = form.validate().unwrap();
        assert_eq!(dto.sph_status_reason_category.as_deref(), Some("Other"));
        assert_eq!(
            dto.sph_status_reason_note.as_deref(),
            Some("Customer postponed budget")
        );

        form.set_sph_status(Some(SphStatus::Drop));
        form.set_reason_category(Some(LossReasonCategory::Teknis));
        assert!(form.reason_note.is_empty());
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_leaving_loss_clears_reason() {
        let mut form = valid_form();
        form.set_sph_status(Some(SphStatus::Loss));
        form.set_reason_category(Some(LossReasonCategory::Other));
        form.reason_note = "n/a".into();
        form.set_sph_status(Some(SphStatus::Win));
        assert_eq!(form.reason_category, None);
        assert!(form.reason_note.is_empty());
        let dto = form.validate().unwrap();
        assert_eq!(dto.sph_status_reason_category, None);
    }

    #[test]
    fn test_recurring_plan_sorted_and_incomplete_rows_dropped() {
        let mut form = valid_form();
        form.project_type = ProjectType::Recurring;
        form.plan_rows = vec![
            PlanRow::new("2025-03", 100.0),
            PlanRow::new("", 50.0),
            PlanRow::new("2025-01", 100.0),
            PlanRow::new("2025-02", 0.0),
        ];
        let errors = form.row_errors();
        assert_eq!(errors[1], Some(ValidationError::RevenuePlanMonthMissing { row: 2 }));
        assert_eq!(errors[3], Some(ValidationError::RevenuePlanValueNotPositive { row: 4 }));

        let dto = form.validate().unwrap();
        let months: Vec<&str> = dto.revenue_plans.iter().map(|p| p.month.as_str()).collect();
        assert_eq!(months, vec!["2025-01", "2025-03"]);
    }

    #[test]
    fn test_duplicate_months_rejected() {
        let mut form = valid_form();
        form.project_type = ProjectType::Recurring;
        form.plan_rows = vec![PlanRow::new("2025-01", 100.0), PlanRow::new("2025-01", 200.0)];
        assert!(form.has_duplicate_months());
        assert_eq!(form.validate(), Err(ValidationError::RevenuePlanDuplicateMonth));
    }

    #[test]
    fn test_empty_plan_rejected() {
        let mut form = valid_form();
        form.plan_rows = vec![PlanRow::new("2025-01", 0.0)];
        assert_eq!(form.validate(), Err(ValidationError::RevenuePlanEmpty));
    }

    #[test]
    fn test_locked_division_wins() {
        let mut form = ProjectForm::new(Some(Division::NetworkCommunications));
        form.customer_id = Some(1);
        form.plan_rows = vec![PlanRow::new("2025-01", 10.0)];
        form.division = Division::ItSolutions;
        assert!(form.division_locked());
        assert_eq!(form.validate().unwrap().division, "Network Communications");
    }
}
