//! Numbers derived from the dashboard response for cards and charts

use std::collections::{BTreeSet, HashMap};

use super::dto::{BreakdownItem, CustomerRow, ForecastPoint, PipelineStage};
use super::filters::DashboardFilters;
use crate::enums::SalesStage;
use crate::shared::format::{format_idr, percent_of};
use crate::shared::month::{months_of_year, normalize_month, year_of};

/// Running totals
pub fn cumulative(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .scan(0.0, |running, v| {
            *running += if v.is_finite() { *v } else { 0.0 };
            Some(*running)
        })
        .collect()
}

/// Year shown by the cumulative chart: from month, to month, first forecast
/// point, then the current year
pub fn trend_year(filters: &DashboardFilters, forecast: &[ForecastPoint], current_year: i32) -> i32 {
    year_of(&filters.from_month)
        .or_else(|| year_of(&filters.to_month))
        .or_else(|| forecast.first().and_then(|f| year_of(&f.month)))
        .unwrap_or(current_year)
}

/// Twelve points, January to December. Repeated months are summed, months of
/// other years are dropped, missing months are zero.
pub fn normalize_forecast_to_year(forecast: &[ForecastPoint], year: i32) -> Vec<ForecastPoint> {
    let mut by_month: HashMap<String, (f64, f64)> = HashMap::new();
    for point in forecast {
        let Some(key) = normalize_month(&point.month) else {
            continue;
        };
        let entry = by_month.entry(key).or_insert((0.0, 0.0));
        entry.0 += point.target;
        entry.1 += point.realization;
    }

    months_of_year(year)
        .into_iter()
        .map(|month| {
            let (target, realization) = by_month.get(&month).copied().unwrap_or((0.0, 0.0));
            ForecastPoint {
                month,
                target,
                realization,
            }
        })
        .collect()
}

/// Stages 1 through 6, whatever subset the API returned
pub fn ordered_pipeline(stages: &[PipelineStage]) -> Vec<PipelineStage> {
    (1..=SalesStage::COUNT as i32)
        .map(|n| match stages.iter().find(|s| s.stage == n) {
            Some(hit) => hit.clone(),
            None => PipelineStage {
                stage: n,
                label: format!("Stage {}", n),
                count: 0,
            },
        })
        .collect()
}

/// Funnel bars: each stage counts every deal at that stage or later
pub fn funnel_cumulative(counts: &[i64]) -> Vec<i64> {
    let mut out = vec![0; counts.len()];
    let mut running = 0;
    for (i, count) in counts.iter().enumerate().rev() {
        running += count;
        out[i] = running;
    }
    out
}

pub fn achievement_pct(realization: f64, target: f64) -> f64 {
    percent_of(realization, target)
}

/// "12.5%", or "0%" when the total is zero
pub fn share_label(value: f64, total: f64) -> String {
    if total == 0.0 {
        "0%".to_string()
    } else {
        format!("{:.1}%", value / total * 100.0)
    }
}

/// Progress bar width, clamped to 0..=100
pub fn bar_width(pct: f64) -> f64 {
    if pct.is_nan() {
        0.0
    } else {
        pct.clamp(0.0, 100.0)
    }
}

/// Label to value lookup; a missing label reads as 0 through `breakdown_value`
pub fn breakdown_map(items: &[BreakdownItem]) -> HashMap<String, f64> {
    items
        .iter()
        .map(|item| (item.label.clone(), item.value))
        .collect()
}

pub fn breakdown_value(map: &HashMap<String, f64>, label: &str) -> f64 {
    map.get(label).copied().unwrap_or(0.0)
}

/// Short axis label: "1.5 B", "250 M", "12 K", smaller values in full
pub fn compact_idr(value: f64) -> String {
    let abs = value.abs();
    let scaled = |divisor: f64, suffix: &str| {
        let text = format!("{:.1}", value / divisor);
        format!("{} {}", text.strip_suffix(".0").unwrap_or(&text), suffix)
    };
    if abs >= 1_000_000_000.0 {
        scaled(1_000_000_000.0, "B")
    } else if abs >= 1_000_000.0 {
        scaled(1_000_000.0, "M")
    } else if abs >= 1_000.0 {
        scaled(1_000.0, "K")
    } else {
        format_idr(value)
    }
}

/// Distinct non-empty customer names of the customer table, sorted
pub fn customer_options(rows: &[CustomerRow]) -> Vec<String> {
    rows.iter()
        .map(|r| r.customer.trim())
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(month: &str, target: f64, realization: f64) -> ForecastPoint {
        ForecastPoint {
            month: month.to_string(),
            target,
            realization,
        }
    }

    #[test]
    fn test_cumulative() {
        assert_eq!(cumulative(&[1.0, 2.0, 3.0]), vec![1.0, 3.0, 6.0]);
        assert_eq!(cumulative(&[f64::NAN, 2.0]), vec![0.0, 2.0]);
        assert!(cumulative(&[]).is_empty());
    }

    #[test]
    fn test_trend_year_priority() {
        let forecast = vec![point("2023-05", 1.0, 0.0)];
        let mut f = DashboardFilters::default();
        assert_eq!(trend_year(&f, &[], 2026), 2026);
        assert_eq!(trend_year(&f, &forecast, 2026), 2023);
        f.to_month = "2024-03".into();
        assert_eq!(trend_year(&f, &forecast, 2026), 2024);
        f.from_month = "2022-11".into();
        assert_eq!(trend_year(&f, &forecast, 2026), 2022);
    }

    #[test]
    fn test_normalize_forecast_sums_duplicates_and_fills_gaps() {
        let forecast = vec![
            point("2025-03", 100.0, 40.0),
            point("2025-03-15", 50.0, 10.0),
            point("2024-12", 999.0, 999.0),
            point("2025-12", 5.0, 0.0),
        ];
        let year = normalize_forecast_to_year(&forecast, 2025);
        assert_eq!(year.len(), 12);
        assert_eq!(year[0], point("2025-01", 0.0, 0.0));
        assert_eq!(year[2], point("2025-03", 150.0, 50.0));
        assert_eq!(year[11], point("2025-12", 5.0, 0.0));
        let total: f64 = year.iter().map(|p| p.target).sum();
        assert_eq!(total, 155.0);
    }

    #[test]
    fn test_ordered_pipeline_fills_missing_stages() {
        let stages = vec![
            PipelineStage {
                stage: 3,
                label: "Presales Analysis".into(),
                count: 4,
            },
            PipelineStage {
                stage: 1,
                label: "Prospecting".into(),
                count: 7,
            },
        ];
        let ordered = ordered_pipeline(&stages);
        assert_eq!(ordered.len(), 6);
        assert_eq!(ordered[0].count, 7);
        assert_eq!(ordered[1].label, "Stage 2");
        assert_eq!(ordered[1].count, 0);
        assert_eq!(ordered[2].label, "Presales Analysis");
    }

    #[test]
    fn test_funnel_cumulative() {
        assert_eq!(
            funnel_cumulative(&[5, 4, 3, 2, 1, 1]),
            vec![16, 11, 7, 4, 2, 1]
        );
    }

    #[test]
    fn test_share_and_bar() {
        assert_eq!(share_label(25.0, 200.0), "12.5%");
        assert_eq!(share_label(25.0, 0.0), "0%");
        assert_eq!(bar_width(140.0), 100.0);
        assert_eq!(bar_width(-3.0), 0.0);
        assert_eq!(bar_width(42.5), 42.5);
        assert_eq!(achievement_pct(50.0, 0.0), 0.0);
        assert_eq!(achievement_pct(50.0, 200.0), 25.0);
    }

    #[test]
    fn test_breakdown_map() {
        let items = vec![BreakdownItem {
            label: "Carry Over".into(),
            value: 12.0,
        }];
        let map = breakdown_map(&items);
        assert_eq!(breakdown_value(&map, "Carry Over"), 12.0);
        assert_eq!(breakdown_value(&map, "Prospect"), 0.0);
    }

    #[test]
    fn test_compact_idr() {
        assert_eq!(compact_idr(1_500_000_000.0), "1.5 B");
        assert_eq!(compact_idr(2_000_000_000.0), "2 B");
        assert_eq!(compact_idr(250_000_000.0), "250 M");
        assert_eq!(compact_idr(12_000.0), "12 K");
        assert_eq!(compact_idr(-3_400_000.0), "-3.4 M");
        assert_eq!(compact_idr(950.0), "950");
    }

    #[test]
    fn test_customer_options() {
        let rows = vec![
            CustomerRow {
                customer: "PT B".into(),
                ..Default::default()
            },
            CustomerRow {
                customer: "PT A".into(),
                ..Default::default()
            },
            CustomerRow {
                customer: "PT B".into(),
                ..Default::default()
            },
            CustomerRow::default(),
        ];
        assert_eq!(customer_options(&rows), vec!["PT A", "PT B"]);
    }
}
