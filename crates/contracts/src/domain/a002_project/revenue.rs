//! Revenue plan math and the realization edit on the project detail page

use serde::{Deserialize, Serialize};

use super::aggregate::RevenuePlanItem;
use crate::enums::SalesStage;
use crate::shared::format::percent_of;
use crate::shared::month::normalize_month;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevenueTotals {
    pub target: f64,
    pub realization: f64,
    /// Rounded percentage, 0 when there is no target
    pub achievement_pct: i64,
    /// Target weighted by the win probability of the sales stage
    pub weighted_forecast: f64,
}

impl RevenueTotals {
    pub fn compute(plans: &[RevenuePlanItem], sales_stage: i32) -> Self {
        let target: f64 = plans.iter().map(|p| p.target_revenue).sum();
        let realization: f64 = plans.iter().map(|p| p.target_realization).sum();
        Self {
            target,
            realization,
            achievement_pct: percent_of(realization, target).round() as i64,
            weighted_forecast: target * SalesStage::probability_of(sales_stage),
        }
    }
}

/// Realization minus target; negative while behind plan
pub fn row_gap(item: &RevenuePlanItem) -> f64 {
    item.target_realization - item.target_revenue
}

/// Rounded achievement of one month, `None` when that month has no target
pub fn row_percent(item: &RevenuePlanItem) -> Option<i64> {
    (item.target_revenue > 0.0)
        .then(|| (item.target_realization / item.target_revenue * 100.0).round() as i64)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowLevel {
    OnTarget,
    Near,
    Behind,
}

impl RowLevel {
    /// ≥100 on target, ≥70 near, otherwise behind
    pub fn of(pct: i64) -> Self {
        if pct >= 100 {
            RowLevel::OnTarget
        } else if pct >= 70 {
            RowLevel::Near
        } else {
            RowLevel::Behind
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            RowLevel::OnTarget => "text--success",
            RowLevel::Near => "text--warning",
            RowLevel::Behind => "text--error",
        }
    }
}

/// Realization entered for one plan month, optionally booked to another month
#[derive(Debug, Clone, PartialEq)]
pub struct RealizationEdit {
    pub source_month: String,
    pub realization: f64,
    /// Month the value is booked to when moving; blank means the source month
    pub apply_month: String,
    pub move_enabled: bool,
}

/// PUT /projects/:id/realization/:month body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealizationUpdateRequest {
    pub realization: f64,
    pub apply_month: String,
    #[serde(rename = "move")]
    pub move_: bool,
}

impl RealizationEdit {
    /// Without a move the value always stays on the source month
    pub fn target_month(&self) -> String {
        if !self.move_enabled {
            return self.source_month.clone();
        }
        normalize_month(&self.apply_month).unwrap_or_else(|| self.source_month.clone())
    }

    /// A move only happens when enabled and the months differ
    pub fn is_move(&self) -> bool {
        self.move_enabled && self.target_month() != self.source_month
    }

    pub fn request(&self) -> RealizationUpdateRequest {
        RealizationUpdateRequest {
            realization: self.realization,
            apply_month: self.target_month(),
            move_: self.is_move(),
        }
    }
}

/// Optimistic local patch after the realization PUT succeeded.
///
/// On a move the source month's realization is zeroed. The target month is
/// upserted (a new row starts with a zero target) and rows are re-sorted by
/// month. The page re-fetches the detail afterwards and replaces this state.
pub fn apply_realization_edit(plans: &mut Vec<RevenuePlanItem>, edit: &RealizationEdit) {
    let target = edit.target_month();

    if edit.is_move() {
        if let Some(src) = plans.iter_mut().find(|p| p.month == edit.source_month) {
            src.target_realization = 0.0;
        }
    }

    match plans.iter_mut().find(|p| p.month == target) {
        Some(dst) => dst.target_realization = edit.realization,
        None => plans.push(RevenuePlanItem {
            month: target,
            target_revenue: 0.0,
            target_realization: edit.realization,
        }),
    }

    plans.sort_by(|a, b| a.month.cmp(&b.month));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(month: &str, target: f64, real: f64) -> RevenuePlanItem {
        RevenuePlanItem {
            month: month.into(),
            target_revenue: target,
            target_realization: real,
        }
    }

    #[test]
    fn test_totals_and_weighted_forecast() {
        let plans = vec![plan("2025-01", 1000.0, 500.0), plan("2025-02", 1000.0, 1000.0)];
        let totals = RevenueTotals::compute(&plans, 4);
        assert_eq!(totals.target, 2000.0);
        assert_eq!(totals.realization, 1500.0);
        assert_eq!(totals.achievement_pct, 75);
        assert!((totals.weighted_forecast - 1200.0).abs() < 1e-9);
    }

    #[test]
    fn test_totals_without_target() {
        let totals = RevenueTotals::compute(&[], 6);
        assert_eq!(totals.achievement_pct, 0);
        assert_eq!(totals.weighted_forecast, 0.0);
    }

    #[test]
    fn test_row_percent_and_gap() {
        assert_eq!(row_percent(&plan("2025-01", 300.0, 200.0)), Some(67));
        assert_eq!(row_percent(&plan("2025-01", 0.0, 200.0)), None);
        assert_eq!(row_gap(&plan("2025-01", 300.0, 200.0)), -100.0);
        assert_eq!(RowLevel::of(100), RowLevel::OnTarget);
        assert_eq!(RowLevel::of(70), RowLevel::Near);
        assert_eq!(RowLevel::of(69), RowLevel::Behind);
    }

    #[test]
    fn test_move_zeroes_source_and_sets_target() {
        let mut plans = vec![plan("2025-01", 1000.0, 400.0), plan("2025-02", 1000.0, 0.0)];
        let edit = RealizationEdit {
            source_month: "2025-01".into(),
            realization: 750.0,
            apply_month: "2025-02".into(),
            move_enabled: true,
        };
        assert!(edit.is_move());
        apply_realization_edit(&mut plans, &edit);

        assert_eq!(plans[0].month, "2025-01");
        assert_eq!(plans[0].target_realization, 0.0);
        assert_eq!(plans[1].month, "2025-02");
        assert_eq!(plans[1].target_realization, 750.0);
    }

    #[test]
    fn test_move_to_missing_month_creates_row() {
        let mut plans = vec![plan("2025-03", 1000.0, 300.0)];
        let edit = RealizationEdit {
            source_month: "2025-03".into(),
            realization: 300.0,
            apply_month: "2025-01".into(),
            move_enabled: true,
        };
        apply_realization_edit(&mut plans, &edit);
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0], plan("2025-01", 0.0, 300.0));
        assert_eq!(plans[1], plan("2025-03", 1000.0, 0.0));
    }

    #[test]
    fn test_apply_month_without_move_books_source_month() {
        let mut plans = vec![plan("2025-01", 1000.0, 400.0), plan("2025-02", 1000.0, 0.0)];
        let edit = RealizationEdit {
            source_month: "2025-01".into(),
            realization: 900.0,
            apply_month: "2025-02".into(),
            move_enabled: false,
        };
        let req = edit.request();
        assert!(!req.move_);
        assert_eq!(req.apply_month, "2025-01");
        apply_realization_edit(&mut plans, &edit);
        assert_eq!(plans[0].target_realization, 900.0);
        assert_eq!(plans[1].target_realization, 0.0);
    }

    #[test]
    fn test_same_month_is_not_a_move() {
        let edit = RealizationEdit {
            source_month: "2025-01".into(),
            realization: 10.0,
            apply_month: "".into(),
            move_enabled: true,
        };
        assert!(!edit.is_move());
        let json = serde_json::to_value(edit.request()).unwrap();
        assert_eq!(json["move"], false);
        assert_eq!(json["apply_month"], "2025-01");
    }
}
