//! Realization rows of the budget detail page

use chrono::NaiveDate;

use super::aggregate::{Budget, BudgetRealization};
use crate::shared::csv_export::CsvExportable;

/// Rows of the selected category (`None` = all), newest first
pub fn visible_realizations(
    rows: &[BudgetRealization],
    category: Option<&str>,
) -> Vec<BudgetRealization> {
    let mut out: Vec<BudgetRealization> = rows
        .iter()
        .filter(|r| category.map_or(true, |c| r.category == c))
        .cloned()
        .collect();
    out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    out
}

/// Amount per category, in order of first appearance
pub fn category_totals(rows: &[BudgetRealization]) -> Vec<(String, f64)> {
    let mut totals: Vec<(String, f64)> = Vec::new();
    for r in rows {
        match totals.iter_mut().find(|(c, _)| *c == r.category) {
            Some((_, sum)) => *sum += r.amount,
            None => totals.push((r.category.clone(), r.amount)),
        }
    }
    totals
}

/// "2025-01-05T10:00:00Z" -> "5/1/2025"; empty when missing or unparsable
pub fn format_created_date(created_at: &str) -> String {
    created_at
        .get(0..10)
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        .map(|d| d.format("%-d/%-m/%Y").to_string())
        .unwrap_or_default()
}

/// `budget-<division>-<month>.csv`
pub fn export_filename(budget: &Budget) -> String {
    format!("budget-{}-{}.csv", budget.division, budget.month)
}

impl CsvExportable for BudgetRealization {
    fn headers() -> Vec<&'static str> {
        vec!["Category", "Amount", "Note", "Date"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.category.clone(),
            self.amount.to_string(),
            self.note.clone(),
            format_created_date(&self.created_at),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::csv_export::encode_csv;

    fn row(id: i64, category: &str, amount: f64, created_at: &str) -> BudgetRealization {
        BudgetRealization {
            id,
            budget_id: Some(1),
            category: category.to_string(),
            amount,
            note: String::new(),
            created_at: created_at.to_string(),
        }
    }

    fn sample() -> Vec<BudgetRealization> {
        vec![
            row(1, "ENT & REP", 100.0, "2025-01-03T08:00:00Z"),
            row(2, "PURCHASE ORDER", 50.0, "2025-01-10T08:00:00Z"),
            row(3, "ENT & REP", 25.0, "2025-01-07T08:00:00Z"),
        ]
    }

    #[test]
    fn test_newest_first() {
        let ids: Vec<i64> = visible_realizations(&sample(), None)
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_category_filter() {
        let ids: Vec<i64> = visible_realizations(&sample(), Some("ENT & REP"))
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_category_totals() {
        assert_eq!(
            category_totals(&sample()),
            vec![
                ("ENT & REP".to_string(), 125.0),
                ("PURCHASE ORDER".to_string(), 50.0)
            ]
        );
    }

    #[test]
    fn test_created_date_format() {
        assert_eq!(format_created_date("2025-01-05T10:00:00Z"), "5/1/2025");
        assert_eq!(format_created_date(""), "");
    }

    #[test]
    fn test_csv_quotes_category_with_note_comma() {
        let mut r = row(1, "ENT & REP", 1500.0, "2025-02-14T00:00:00Z");
        r.note = "dinner, client".into();
        let csv = encode_csv(&[r]).unwrap();
        assert_eq!(
            csv,
            "Category,Amount,Note,Date\nENT & REP,1500,\"dinner, client\",14/2/2025\n"
        );
    }

    #[test]
    fn test_export_filename() {
        let b = Budget {
            id: 1,
            division: "IT Solutions".into(),
            month: "2025-01".into(),
            ..Default::default()
        };
        assert_eq!(export_filename(&b), "budget-IT Solutions-2025-01.csv");
    }
}
