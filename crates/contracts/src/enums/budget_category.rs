use serde::{Deserialize, Serialize};
use std::fmt;

/// Spending category of a budget realization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BudgetCategory {
    #[serde(rename = "AKOMODASI PERDIN MARKETING")]
    AkomodasiPerdinMarketing,
    #[serde(rename = "ENT & REP")]
    EntRep,
    #[serde(rename = "OPERASIONAL MARKETING")]
    OperasionalMarketing,
    #[serde(rename = "AKOMODASI TENDER")]
    AkomodasiTender,
    #[serde(rename = "PURCHASE ORDER")]
    PurchaseOrder,
    #[serde(rename = "FIELD TRIAL LITBANG")]
    FieldTrialLitbang,
}

impl BudgetCategory {
    pub fn code(&self) -> &'static str {
        match self {
            BudgetCategory::AkomodasiPerdinMarketing => "AKOMODASI PERDIN MARKETING",
            BudgetCategory::EntRep => "ENT & REP",
            BudgetCategory::OperasionalMarketing => "OPERASIONAL MARKETING",
            BudgetCategory::AkomodasiTender => "AKOMODASI TENDER",
            BudgetCategory::PurchaseOrder => "PURCHASE ORDER",
            BudgetCategory::FieldTrialLitbang => "FIELD TRIAL LITBANG",
        }
    }

    pub fn all() -> Vec<BudgetCategory> {
        vec![
            BudgetCategory::AkomodasiPerdinMarketing,
            BudgetCategory::EntRep,
            BudgetCategory::OperasionalMarketing,
            BudgetCategory::AkomodasiTender,
            BudgetCategory::PurchaseOrder,
            BudgetCategory::FieldTrialLitbang,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.code() == code)
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
