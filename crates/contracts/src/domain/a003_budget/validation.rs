//! Budget and realization forms

use super::aggregate::{
    Budget, BudgetRealization, CreateBudgetDto, RealizationDto, UpdateBudgetDto,
};
use crate::enums::BudgetCategory;
use crate::shared::error::ValidationError;
use crate::shared::format::{format_idr, parse_amount};

/// Amount typed into a budget field: a number ≥ 0
fn parse_budget_amount(raw: &str) -> Result<f64, ValidationError> {
    parse_amount(raw)
        .filter(|v| *v >= 0.0)
        .ok_or(ValidationError::NegativeBudget)
}

/// "Add budget" modal. A division-scoped user cannot pick another division.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BudgetCreateForm {
    pub division: String,
    pub locked_division: Option<String>,
    pub month: String,
    pub amount: String,
}

impl BudgetCreateForm {
    pub fn new(locked_division: Option<String>) -> Self {
        Self {
            division: locked_division.clone().unwrap_or_default(),
            locked_division,
            ..Default::default()
        }
    }

    pub fn division_locked(&self) -> bool {
        self.locked_division.is_some()
    }

    pub fn validate(&self) -> Result<CreateBudgetDto, ValidationError> {
        let division = self
            .locked_division
            .clone()
            .unwrap_or_else(|| self.division.trim().to_string());
        if division.is_empty() {
            return Err(ValidationError::Required("Division"));
        }
        let month = self.month.trim();
        if month.is_empty() {
            return Err(ValidationError::Required("Month"));
        }
        let budget_amount = parse_budget_amount(&self.amount)?;
        Ok(CreateBudgetDto {
            division,
            month: month.to_string(),
            budget_amount,
        })
    }
}

/// "Edit budget" modal: only the amount changes
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetEditForm {
    pub budget_id: i64,
    pub total_realization: f64,
    pub amount: String,
}

impl BudgetEditForm {
    pub fn from_budget(budget: &Budget) -> Self {
        Self {
            budget_id: budget.id,
            total_realization: budget.total_realization(),
            amount: budget.budget_amount.to_string(),
        }
    }

    /// The new amount may not drop below what has already been spent
    pub fn validate(&self) -> Result<UpdateBudgetDto, ValidationError> {
        let budget_amount = parse_budget_amount(&self.amount)?;
        if budget_amount < self.total_realization {
            return Err(ValidationError::BudgetBelowRealization(format_idr(
                self.total_realization,
            )));
        }
        Ok(UpdateBudgetDto { budget_amount })
    }
}

/// Add/edit realization modal on the budget detail page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RealizationForm {
    /// `Some` when editing an existing row
    pub realization_id: Option<i64>,
    pub category: Option<BudgetCategory>,
    pub amount: String,
    pub note: String,
}

impl RealizationForm {
    pub fn from_realization(r: &BudgetRealization) -> Self {
        Self {
            realization_id: Some(r.id),
            category: BudgetCategory::from_code(&r.category),
            amount: r.amount.to_string(),
            note: r.note.clone(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.realization_id.is_some()
    }

    pub fn validate(&self) -> Result<RealizationDto, ValidationError> {
        let category = self.category.ok_or(ValidationError::Required("Category"))?;
        let amount = parse_amount(&self.amount)
            .filter(|v| *v > 0.0)
            .ok_or(ValidationError::NonPositiveAmount)?;
        Ok(RealizationDto {
            category: category.code().to_string(),
            amount,
            note: self.note.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_below_realization_is_rejected() {
        let form = BudgetEditForm {
            budget_id: 1,
            total_realization: 5_000_000.0,
            amount: "4000000".into(),
        };
        let err = form.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Budget cannot be lower than the total realization (Rp 5.000.000)."
        );
    }

    #[test]
    fn test_edit_equal_to_realization_is_allowed() {
        let form = BudgetEditForm {
            budget_id: 1,
            total_realization: 5_000_000.0,
            amount: "5000000".into(),
        };
        assert_eq!(form.validate().unwrap().budget_amount, 5_000_000.0);
    }

    #[test]
    fn test_edit_rejects_negative_and_garbage() {
        let mut form = BudgetEditForm::from_budget(&Budget::default());
        form.amount = "-1".into();
        assert_eq!(form.validate(), Err(ValidationError::NegativeBudget));
        form.amount = "abc".into();
        assert_eq!(form.validate(), Err(ValidationError::NegativeBudget));
    }

    #[test]
    fn test_create_requires_month() {
        let mut form = BudgetCreateForm::new(None);
        form.division = "IT Solutions".into();
        form.amount = "100".into();
        assert_eq!(
            form.validate().unwrap_err().to_string(),
            "Month is required."
        );
        form.month = "2025-04".into();
        let dto = form.validate().unwrap();
        assert_eq!(dto.month, "2025-04");
        assert_eq!(dto.budget_amount, 100.0);
    }

    #[test]
    fn test_create_uses_locked_division() {
        let mut form = BudgetCreateForm::new(Some("IT Solutions".into()));
        form.division = "Network Communications".into();
        form.month = "2025-04".into();
        form.amount = "0".into();
        assert_eq!(form.validate().unwrap().division, "IT Solutions");
    }

    #[test]
    fn test_realization_rules() {
        let mut form = RealizationForm::default();
        form.amount = "10".into();
        assert_eq!(
            form.validate().unwrap_err().to_string(),
            "Category is required."
        );
        form.category = Some(BudgetCategory::EntRep);
        form.amount = "0".into();
        assert_eq!(form.validate(), Err(ValidationError::NonPositiveAmount));
        form.amount = "250000".into();
        let dto = form.validate().unwrap();
        assert_eq!(dto.category, "ENT & REP");
        assert_eq!(dto.amount, 250_000.0);
    }
}
