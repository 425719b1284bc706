//! Budgets list: filters, CSV export and the trend query

use std::collections::BTreeSet;

use super::aggregate::Budget;
use crate::shared::csv_export::CsvExportable;
use crate::shared::format::format_percent_1;
use crate::shared::list_query::{ListState, SortDirection};
use crate::shared::query::build_query;

/// `None` means "All"
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BudgetFilter {
    pub division: Option<String>,
    pub year: Option<String>,
}

impl BudgetFilter {
    pub fn matches(&self, b: &Budget) -> bool {
        self.division.as_ref().map_or(true, |d| &b.division == d)
            && self.year.as_ref().map_or(true, |y| b.month.starts_with(y.as_str()))
    }

    /// Trend endpoint path, only when both division and year are chosen
    pub fn trend_path(&self) -> Option<String> {
        match (&self.division, &self.year) {
            (Some(d), Some(y)) => Some(format!(
                "/budgets/trend{}",
                build_query(&[("division", d.clone()), ("year", y.clone())])
            )),
            _ => None,
        }
    }

    /// `budgets_export_<division|all>_<year|all>.csv`
    pub fn export_filename(&self) -> String {
        let division = self
            .division
            .as_deref()
            .map(|d| d.replace(' ', "_"))
            .unwrap_or_else(|| "all".to_string());
        let year = self.year.as_deref().unwrap_or("all");
        format!("budgets_export_{}_{}.csv", division, year)
    }
}

pub type BudgetListState = ListState<BudgetFilter>;

/// The budgets list is always ordered by month, oldest first
pub fn new_list_state(page_size: usize) -> BudgetListState {
    ListState::new("month", SortDirection::Asc).with_page_size(page_size)
}

/// Distinct years present in the fetched budgets, ascending
pub fn year_options(budgets: &[Budget]) -> Vec<String> {
    budgets
        .iter()
        .filter_map(|b| b.month.get(0..4))
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Every budget that passes the filter and search, unpaginated (export source)
pub fn filtered(state: &BudgetListState, budgets: &[Budget]) -> Vec<Budget> {
    state.filtered(budgets, |b, f| f.matches(b))
}

impl CsvExportable for Budget {
    fn headers() -> Vec<&'static str> {
        vec![
            "Month",
            "Division",
            "Budget",
            "Realization",
            "Achievement (%)",
            "Remaining",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.month.clone(),
            self.division.clone(),
            self.budget_amount.to_string(),
            self.total_realization().to_string(),
            self.achievement
                .map(format_percent_1)
                .unwrap_or_else(|| "0".to_string()),
            self.remaining().to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::csv_export::encode_csv;

    fn budget(id: i64, division: &str, month: &str) -> Budget {
        Budget {
            id,
            division: division.to_string(),
            month: month.to_string(),
            budget_amount: 1000.0,
            ..Default::default()
        }
    }

    fn sample() -> Vec<Budget> {
        vec![
            budget(1, "IT Solutions", "2025-03"),
            budget(2, "Network Communications", "2024-12"),
            budget(3, "IT Solutions", "2025-01"),
            budget(4, "IT Solutions", "2024-02"),
        ]
    }

    #[test]
    fn test_year_options_are_distinct_and_sorted() {
        assert_eq!(year_options(&sample()), vec!["2024", "2025"]);
    }

    #[test]
    fn test_filter_by_division_and_year_sorted_by_month() {
        let mut state = new_list_state(10);
        state.update_filter(|f| {
            f.division = Some("IT Solutions".into());
            f.year = Some("2025".into());
        });
        let page = state.apply(&sample(), |b, f| f.matches(b));
        let ids: Vec<i64> = page.items.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_unfiltered_list_is_oldest_month_first() {
        let state = new_list_state(10);
        let ids: Vec<i64> = filtered(&state, &sample()).iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![4, 2, 3, 1]);
    }

    #[test]
    fn test_no_match_yields_empty_first_page() {
        let mut state = new_list_state(10);
        state.update_filter(|f| f.year = Some("2030".into()));
        let page = state.apply(&sample(), |b, f| f.matches(b));
        assert_eq!(page.total_count, 0);
        assert_eq!(page.page, 1);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_search_on_month() {
        let mut state = new_list_state(10);
        state.set_search("2024");
        let page = state.apply(&sample(), |b, f| f.matches(b));
        let ids: Vec<i64> = page.items.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![4, 2]);
    }

    #[test]
    fn test_filtered_ignores_pagination() {
        let mut state = new_list_state(1);
        state.set_page(2);
        assert_eq!(filtered(&state, &sample()).len(), 4);
    }

    #[test]
    fn test_trend_only_with_both_filters() {
        let mut f = BudgetFilter::default();
        assert_eq!(f.trend_path(), None);
        f.division = Some("IT Solutions".into());
        assert_eq!(f.trend_path(), None);
        f.year = Some("2025".into());
        assert_eq!(
            f.trend_path().as_deref(),
            Some("/budgets/trend?division=IT%20Solutions&year=2025")
        );
    }

    #[test]
    fn test_export_filename() {
        let mut f = BudgetFilter::default();
        assert_eq!(f.export_filename(), "budgets_export_all_all.csv");
        f.division = Some("IT Solutions".into());
        f.year = Some("2025".into());
        assert_eq!(f.export_filename(), "budgets_export_IT_Solutions_2025.csv");
    }

    #[test]
    fn test_csv_rows() {
        let mut b = budget(1, "Oil Mining & Goverments", "2025-01");
        b.total_realization = Some(250.0);
        b.remaining = Some(750.0);
        b.achievement = Some(25.0);
        let csv = encode_csv(&[b, budget(2, "IT Solutions", "2025-02")]).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Month,Division,Budget,Realization,Achievement (%),Remaining");
        assert_eq!(lines[1], "2025-01,Oil Mining & Goverments,1000,250,25.0,750");
        assert_eq!(lines[2], "2025-02,IT Solutions,1000,0,0,0");
    }
}
