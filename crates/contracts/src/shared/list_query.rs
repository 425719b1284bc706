//! In-memory search / filter / sort / paginate pipeline shared by every list page

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::config::DEFAULT_PAGE_SIZE;
use super::month::normalize_month;

/// Types that can be matched against a free-text search box
pub trait Searchable {
    /// Fields the search box looks into
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match on any search field.
    /// A blank query matches everything; otherwise the query is used as typed.
    fn matches_search(&self, query: &str) -> bool {
        if query.trim().is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }
}

/// Value a row exposes for a sortable column
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Number(f64),
    Text(String),
}

impl SortValue {
    pub fn text(value: impl Into<String>) -> Self {
        SortValue::Text(value.into())
    }

    /// Numeric column value; a missing number sorts as 0
    pub fn number(value: Option<f64>) -> Self {
        SortValue::Number(value.unwrap_or(0.0))
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortValue::Number(a), SortValue::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
            (SortValue::Number(_), SortValue::Text(_)) => Ordering::Less,
            (SortValue::Text(_), SortValue::Number(_)) => Ordering::Greater,
        }
    }
}

/// Types whose rows can be ordered by a named column
pub trait Sortable {
    fn sort_value(&self, field: &str) -> SortValue;

    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        self.sort_value(field).compare(&other.sort_value(field))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn is_ascending(self) -> bool {
        matches!(self, SortDirection::Asc)
    }
}

/// Stable sort; rows that compare equal keep their fetched order
pub fn sort_items<T: Sortable>(items: &mut [T], field: &str, direction: SortDirection) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if direction.is_ascending() {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Requested month window. Either bound may be left open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthRange {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl MonthRange {
    pub fn new(start: Option<String>, end: Option<String>) -> Self {
        let clean = |v: Option<String>| v.and_then(|s| normalize_month(&s));
        Self {
            start: clean(start),
            end: clean(end),
        }
    }

    pub fn is_open(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Whether an item spanning `[item_start, item_end]` overlaps the window.
    ///
    /// With no bounds every item passes. Once a bound is set, items with an
    /// unknown start or end are excluded.
    pub fn overlaps(&self, item_start: Option<&str>, item_end: Option<&str>) -> bool {
        if self.is_open() {
            return true;
        }
        let (Some(item_start), Some(item_end)) = (
            item_start.and_then(normalize_month),
            item_end.and_then(normalize_month),
        ) else {
            return false;
        };

        match (&self.start, &self.end) {
            (Some(start), Some(end)) => !(item_end < *start || item_start > *end),
            (Some(start), None) => item_end >= *start,
            (None, Some(end)) => item_start <= *end,
            (None, None) => true,
        }
    }
}

pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    total_count.div_ceil(page_size).max(1)
}

/// One page of a list
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based, already clamped into range
    pub page: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

/// Slice a list into 1-based pages, clamping the requested page into range
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_pages = total_pages(items.len(), page_size);
    let page = page.clamp(1, total_pages);
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(items.len());
    Page {
        items: items.get(start..end).unwrap_or(&[]).to_vec(),
        page,
        total_pages,
        total_count: items.len(),
    }
}

/// Search, filter and sort state of a list page.
///
/// Changing the search text or any filter sends the user back to page 1;
/// changing the sort column or direction keeps the current page.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<F> {
    pub filter: F,
    pub search: String,
    pub sort_field: String,
    pub sort_direction: SortDirection,
    pub page: usize,
    pub page_size: usize,
}

impl<F: Default> ListState<F> {
    pub fn new(sort_field: &str, sort_direction: SortDirection) -> Self {
        Self {
            filter: F::default(),
            search: String::new(),
            sort_field: sort_field.to_string(),
            sort_direction,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Clear every filter and the search text
    pub fn reset_filters(&mut self) {
        self.filter = F::default();
        self.search.clear();
        self.page = 1;
    }
}

impl<F> ListState<F> {
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn update_filter(&mut self, f: impl FnOnce(&mut F)) {
        f(&mut self.filter);
        self.page = 1;
    }

    /// Same column flips the direction, a new column starts ascending
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_field = field.to_string();
            self.sort_direction = SortDirection::Asc;
        }
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Filter, search and sort without paginating
    pub fn filtered<T, P>(&self, items: &[T], filter_predicate: P) -> Vec<T>
    where
        T: Searchable + Sortable + Clone,
        P: Fn(&T, &F) -> bool,
    {
        let mut rows: Vec<T> = items
            .iter()
            .filter(|item| filter_predicate(item, &self.filter))
            .filter(|item| item.matches_search(&self.search))
            .cloned()
            .collect();
        sort_items(&mut rows, &self.sort_field, self.sort_direction);
        rows
    }

    /// Run the full pipeline over a fetched collection
    pub fn apply<T, P>(&self, items: &[T], filter_predicate: P) -> Page<T>
    where
        T: Searchable + Sortable + Clone,
        P: Fn(&T, &F) -> bool,
    {
        let rows = self.filtered(items, filter_predicate);
        paginate(&rows, self.page, self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        code: &'static str,
        division: &'static str,
        revenue: Option<f64>,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.code, self.division]
        }
    }

    impl Sortable for Row {
        fn sort_value(&self, field: &str) -> SortValue {
            match field {
                "revenue" => SortValue::number(self.revenue),
                "division" => SortValue::text(self.division),
                _ => SortValue::text(self.code),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { code: "PRJ-003", division: "IT Solutions", revenue: Some(900.0) },
            Row { code: "PRJ-001", division: "Network Communications", revenue: Some(100.0) },
            Row { code: "PRJ-010", division: "IT Solutions", revenue: None },
            Row { code: "PRJ-002", division: "Oil Mining & Goverments", revenue: Some(20.0) },
        ]
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    struct DivisionFilter {
        division: Option<&'static str>,
        min_revenue: Option<f64>,
    }

    fn predicate(row: &Row, f: &DivisionFilter) -> bool {
        f.division.map_or(true, |d| row.division == d)
            && f.min_revenue.map_or(true, |m| row.revenue.unwrap_or(0.0) >= m)
    }

    #[test]
    fn test_search_is_case_insensitive_subset() {
        let all = rows();
        for query in ["prj-00", "SOLUTIONS", "oil", "x"] {
            let found: Vec<&Row> = all.iter().filter(|r| r.matches_search(query)).collect();
            assert!(found.len() <= all.len());
            for row in found {
                let q = query.to_lowercase();
                assert!(
                    row.code.to_lowercase().contains(&q)
                        || row.division.to_lowercase().contains(&q)
                );
            }
        }
        assert!(all.iter().all(|r| r.matches_search("   ")));
    }

    #[test]
    fn test_search_keeps_inner_whitespace_of_query() {
        let all = rows();
        assert_eq!(all.iter().filter(|r| r.matches_search("IT Sol")).count(), 2);
        // surrounding spaces are part of the query, so "it" inside "IT Solutions" no longer matches
        assert_eq!(all.iter().filter(|r| r.matches_search(" it ")).count(), 0);
        assert_eq!(all.iter().filter(|r| r.matches_search(" mining")).count(), 1);
    }

    #[test]
    fn test_sort_direction_serde() {
        assert_eq!(serde_json::to_string(&SortDirection::Desc).unwrap(), "\"desc\"");
        let asc: SortDirection = serde_json::from_str("\"asc\"").unwrap();
        assert_eq!(asc, SortDirection::Asc);
    }

    #[test]
    fn test_filters_compose_as_intersection() {
        let all = rows();
        let a = DivisionFilter { division: Some("IT Solutions"), min_revenue: None };
        let b = DivisionFilter { division: None, min_revenue: Some(50.0) };
        let both = DivisionFilter { division: Some("IT Solutions"), min_revenue: Some(50.0) };

        let only_a: Vec<Row> = all.iter().filter(|r| predicate(r, &a)).cloned().collect();
        let only_b: Vec<Row> = all.iter().filter(|r| predicate(r, &b)).cloned().collect();
        let combined: Vec<Row> = all.iter().filter(|r| predicate(r, &both)).cloned().collect();
        let intersection: Vec<Row> = only_a.into_iter().filter(|r| only_b.contains(r)).collect();

        assert_eq!(combined, intersection);
        assert_eq!(combined.len(), 1);
        assert_eq!(combined[0].code, "PRJ-003");
    }

    #[test]
    fn test_numeric_sort_treats_missing_as_zero() {
        let mut all = rows();
        sort_items(&mut all, "revenue", SortDirection::Asc);
        let codes: Vec<&str> = all.iter().map(|r| r.code).collect();
        assert_eq!(codes, vec!["PRJ-010", "PRJ-002", "PRJ-001", "PRJ-003"]);
    }

    #[test]
    fn test_text_sort_descending() {
        let mut all = rows();
        sort_items(&mut all, "code", SortDirection::Desc);
        let codes: Vec<&str> = all.iter().map(|r| r.code).collect();
        assert_eq!(codes, vec!["PRJ-010", "PRJ-003", "PRJ-002", "PRJ-001"]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let mut all = rows();
        sort_items(&mut all, "division", SortDirection::Asc);
        let it: Vec<&str> = all
            .iter()
            .filter(|r| r.division == "IT Solutions")
            .map(|r| r.code)
            .collect();
        assert_eq!(it, vec!["PRJ-003", "PRJ-010"]);
    }

    #[test]
    fn test_month_range_overlap() {
        let both = MonthRange::new(Some("2025-03".into()), Some("2025-06".into()));
        assert!(both.overlaps(Some("2025-01"), Some("2025-03")));
        assert!(both.overlaps(Some("2025-06"), Some("2025-12")));
        assert!(both.overlaps(Some("2025-04-01"), Some("2025-05-01")));
        assert!(!both.overlaps(Some("2025-01"), Some("2025-02")));
        assert!(!both.overlaps(Some("2025-07"), Some("2025-08")));
        assert!(!both.overlaps(None, Some("2025-04")));

        let start_only = MonthRange::new(Some("2025-03".into()), None);
        assert!(start_only.overlaps(Some("2020-01"), Some("2025-03")));
        assert!(!start_only.overlaps(Some("2020-01"), Some("2025-02")));

        let end_only = MonthRange::new(None, Some("2025-03".into()));
        assert!(end_only.overlaps(Some("2025-03"), Some("2030-01")));
        assert!(!end_only.overlaps(Some("2025-04"), Some("2030-01")));

        let open = MonthRange::default();
        assert!(open.overlaps(None, None));
    }

    #[test]
    fn test_pagination_clamps() {
        let items: Vec<u32> = (1..=23).collect();
        assert_eq!(total_pages(23, 10), 3);
        assert_eq!(total_pages(0, 10), 1);

        let last = paginate(&items, 3, 10);
        assert_eq!(last.items, vec![21, 22, 23]);

        let beyond = paginate(&items, 9, 10);
        assert_eq!(beyond.page, 3);

        let zero = paginate(&items, 0, 10);
        assert_eq!(zero.page, 1);
        assert_eq!(zero.items.len(), 10);

        let empty: Page<u32> = paginate(&[], 4, 10);
        assert_eq!(empty.page, 1);
        assert!(empty.items.is_empty());
        assert_eq!(empty.total_pages, 1);
    }

    #[test]
    fn test_filter_and_search_changes_reset_page() {
        let mut state: ListState<DivisionFilter> = ListState::new("code", SortDirection::Desc);
        state.set_page(3);
        state.update_filter(|f| f.division = Some("IT Solutions"));
        assert_eq!(state.page, 1);

        state.set_page(2);
        state.set_search("prj");
        assert_eq!(state.page, 1);

        state.set_page(2);
        state.toggle_sort("code");
        assert_eq!(state.page, 2);
        assert_eq!(state.sort_direction, SortDirection::Asc);

        state.toggle_sort("revenue");
        assert_eq!(state.sort_field, "revenue");
        assert_eq!(state.sort_direction, SortDirection::Asc);
    }

    #[test]
    fn test_apply_runs_full_pipeline() {
        let mut state: ListState<DivisionFilter> = ListState::new("code", SortDirection::Asc);
        state.update_filter(|f| f.division = Some("IT Solutions"));
        let page = state.apply(&rows(), predicate);
        assert_eq!(page.total_count, 2);
        assert_eq!(page.items[0].code, "PRJ-003");

        state.set_search("010");
        let page = state.apply(&rows(), predicate);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].code, "PRJ-010");
    }
}
