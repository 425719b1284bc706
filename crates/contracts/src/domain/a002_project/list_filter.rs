//! Filters of the projects list, summary-card presets and the server export query

use super::aggregate::Project;
use crate::enums::{SphReleaseStatus, SphStatus};
use crate::shared::list_query::{ListState, MonthRange, Searchable, SortDirection};
use crate::shared::query::build_query;

/// Post-PO execution filter. Only projects that carry monitoring data pass
/// while it is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionFilter {
    #[default]
    All,
    InExecution,
    Completed,
}

impl ExecutionFilter {
    pub fn code(&self) -> &'static str {
        match self {
            ExecutionFilter::All => "all",
            ExecutionFilter::InExecution => "in_execution",
            ExecutionFilter::Completed => "completed",
        }
    }

    fn matches(&self, project: &Project) -> bool {
        match self {
            ExecutionFilter::All => true,
            ExecutionFilter::InExecution => project
                .postpo_monitoring
                .as_ref()
                .is_some_and(|m| !m.is_completed()),
            ExecutionFilter::Completed => project
                .postpo_monitoring
                .as_ref()
                .is_some_and(|m| m.is_completed()),
        }
    }
}

/// Summary card the user clicked on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardMode {
    #[default]
    All,
    Pipeline,
    Closing,
    InExecution,
    Completed,
}

impl CardMode {
    pub fn code(&self) -> &'static str {
        match self {
            CardMode::All => "all",
            CardMode::Pipeline => "pipeline",
            CardMode::Closing => "closing",
            CardMode::InExecution => "in_execution",
            CardMode::Completed => "completed",
        }
    }
}

/// Exact-match dropdown filters of the projects list. `None` means "All".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectFilter {
    pub division: Option<String>,
    pub customer_id: Option<i64>,
    pub status: Option<String>,
    pub sph_released: Option<SphReleaseStatus>,
    pub sph_status: Option<SphStatus>,
    pub project_type: Option<String>,
    pub sales_stage: Option<i32>,
    pub months: MonthRange,
    pub execution: ExecutionFilter,
    pub card_mode: CardMode,
}

impl ProjectFilter {
    /// Every filter except the SPH status one (used by the SPH status cards)
    pub fn matches_base(&self, p: &Project) -> bool {
        self.division.as_ref().map_or(true, |d| &p.division == d)
            && self.customer_id.map_or(true, |c| p.customer_id == Some(c))
            && self.status.as_ref().map_or(true, |s| &p.status == s)
            && self.sph_released.map_or(true, |s| p.sph_release() == s)
            && self
                .project_type
                .as_ref()
                .map_or(true, |t| &p.project_type == t)
            && self.sales_stage.map_or(true, |s| p.sales_stage == s)
            && (self.card_mode != CardMode::Pipeline || (1..6).contains(&p.sales_stage))
            && self.execution.matches(p)
            && self
                .months
                .overlaps(p.start_month.as_deref(), p.end_month.as_deref())
    }

    pub fn matches(&self, p: &Project) -> bool {
        self.matches_base(p) && self.sph_status.map_or(true, |s| p.sph_status_kind() == s)
    }

    /// Reset every filter, then apply the preset of a summary card
    pub fn apply_card(&mut self, mode: CardMode) {
        *self = ProjectFilter {
            card_mode: mode,
            ..Default::default()
        };
        match mode {
            CardMode::All | CardMode::Pipeline => {}
            CardMode::Closing => self.sales_stage = Some(6),
            CardMode::InExecution => {
                self.sales_stage = Some(6);
                self.execution = ExecutionFilter::InExecution;
            }
            CardMode::Completed => {
                self.sales_stage = Some(6);
                self.execution = ExecutionFilter::Completed;
            }
        }
    }

    /// Clicking the active SPH status card clears it
    pub fn toggle_sph_status(&mut self, status: SphStatus) {
        self.sph_status = if self.sph_status == Some(status) {
            None
        } else {
            Some(status)
        };
    }
}

pub type ProjectListState = ListState<ProjectFilter>;

/// Projects list starts sorted by code, newest first
pub fn new_list_state(page_size: usize) -> ProjectListState {
    ListState::new("project_code", SortDirection::Desc).with_page_size(page_size)
}

/// Order of the SPH status cards
pub const SPH_CARD_ORDER: [SphStatus; 5] = [
    SphStatus::Open,
    SphStatus::Win,
    SphStatus::Hold,
    SphStatus::Loss,
    SphStatus::Drop,
];

/// Count per SPH status over the list narrowed by everything but the SPH status filter
pub fn sph_status_counts(projects: &[Project], state: &ProjectListState) -> Vec<(SphStatus, usize)> {
    let base: Vec<&Project> = projects
        .iter()
        .filter(|p| state.filter.matches_base(p) && p.matches_search(&state.search))
        .collect();
    SPH_CARD_ORDER
        .iter()
        .map(|st| (*st, base.iter().filter(|p| p.sph_status_kind() == *st).count()))
        .collect()
}

/// Year a server export covers: start month, else end month, else the current year
pub fn export_year(filter: &ProjectFilter, current_year: i32) -> i32 {
    let year_of = |m: &Option<String>| m.as_deref().and_then(|m| m[..4].parse::<i32>().ok());
    year_of(&filter.months.start)
        .or_else(|| year_of(&filter.months.end))
        .unwrap_or(current_year)
}

/// Query string and file name for GET /projects/export/csv
pub fn export_request(state: &ProjectListState, current_year: i32) -> (String, String) {
    let f = &state.filter;
    let year = export_year(f, current_year);

    let mut pairs: Vec<(&str, String)> = vec![("year", year.to_string())];
    if let Some(d) = &f.division {
        pairs.push(("division", d.clone()));
    }
    if let Some(c) = f.customer_id {
        pairs.push(("customer_id", c.to_string()));
    }
    if let Some(s) = &f.status {
        pairs.push(("status", s.clone()));
    }
    if let Some(s) = f.sph_released {
        pairs.push(("sph_released", s.code().to_string()));
    }
    if let Some(s) = f.sph_status {
        pairs.push(("sph_status", s.code().to_string()));
    }
    if let Some(t) = &f.project_type {
        pairs.push(("project_type", t.clone()));
    }
    if let Some(s) = f.sales_stage {
        pairs.push(("sales_stage", s.to_string()));
    }
    if let Some(m) = &f.months.start {
        pairs.push(("start_month", m.clone()));
    }
    if let Some(m) = &f.months.end {
        pairs.push(("end_month", m.clone()));
    }
    let q = state.search.trim();
    if !q.is_empty() {
        pairs.push(("q", q.to_string()));
    }
    if f.execution != ExecutionFilter::All {
        pairs.push(("execution", f.execution.code().to_string()));
    }
    pairs.push(("card_mode", f.card_mode.code().to_string()));

    (
        format!("/projects/export/csv{}", build_query(&pairs)),
        format!("projects_export_{}.csv", year),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_project::post_po::PostPoMonitoring;
    use crate::enums::PostPoStatus;

    fn project(code: &str, stage: i32) -> Project {
        Project {
            id: 1,
            project_code: code.into(),
            division: "IT Solutions".into(),
            status: "Prospect".into(),
            project_type: "Recurring".into(),
            sales_stage: stage,
            start_month: Some("2025-01".into()),
            end_month: Some("2025-06".into()),
            ..Default::default()
        }
    }

    fn monitoring(done: usize) -> PostPoMonitoring {
        let mut m = PostPoMonitoring::default();
        let statuses = [
            &mut m.stage1_status,
            &mut m.stage2_status,
            &mut m.stage3_status,
            &mut m.stage4_status,
            &mut m.stage5_status,
        ];
        for (i, s) in statuses.into_iter().enumerate() {
            if i < done {
                *s = PostPoStatus::Done;
            }
        }
        m
    }

    #[test]
    fn test_pipeline_card_excludes_closing_and_unknown_stage() {
        let mut f = ProjectFilter::default();
        f.apply_card(CardMode::Pipeline);
        assert!(f.matches(&project("A", 3)));
        assert!(!f.matches(&project("B", 6)));
        assert!(!f.matches(&project("C", 0)));
    }

    #[test]
    fn test_execution_filters_need_monitoring() {
        let mut in_exec = project("A", 6);
        in_exec.postpo_monitoring = Some(monitoring(2));
        let mut done = project("B", 6);
        done.postpo_monitoring = Some(monitoring(5));
        let bare = project("C", 6);

        let mut f = ProjectFilter::default();
        f.apply_card(CardMode::InExecution);
        assert_eq!(f.sales_stage, Some(6));
        assert!(f.matches(&in_exec));
        assert!(!f.matches(&done));
        assert!(!f.matches(&bare));

        f.apply_card(CardMode::Completed);
        assert!(!f.matches(&in_exec));
        assert!(f.matches(&done));
        assert!(!f.matches(&bare));

        f.apply_card(CardMode::Closing);
        assert_eq!(f.execution, ExecutionFilter::All);
        assert!(f.matches(&bare));
    }

    #[test]
    fn test_apply_card_resets_previous_filters() {
        let mut f = ProjectFilter {
            division: Some("IT Solutions".into()),
            sph_status: Some(SphStatus::Win),
            ..Default::default()
        };
        f.apply_card(CardMode::Closing);
        assert_eq!(f.division, None);
        assert_eq!(f.sph_status, None);
        assert_eq!(f.card_mode, CardMode::Closing);
    }

    #[test]
    fn test_month_filter_excludes_projects_without_dates() {
        let mut f = ProjectFilter::default();
        f.months = MonthRange::new(Some("2025-05".into()), None);
        assert!(f.matches(&project("A", 1)));
        let mut undated = project("B", 1);
        undated.end_month = None;
        assert!(!f.matches(&undated));
    }

    #[test]
    fn test_sph_counts_ignore_sph_status_filter() {
        let mut a = project("A", 1);
        a.sph_status = Some("Win".into());
        let mut b = project("B", 1);
        b.sph_status = Some("Loss".into());
        let c = project("C", 1);
        let mut other_div = project("D", 1);
        other_div.division = "IT Solutions x".into();
        let all = vec![a, b, c, other_div];

        let mut state = new_list_state(10);
        state.update_filter(|f| {
            f.division = Some("IT Solutions".into());
            f.toggle_sph_status(SphStatus::Win);
        });
        let counts = sph_status_counts(&all, &state);
        assert_eq!(
            counts,
            vec![
                (SphStatus::Open, 1),
                (SphStatus::Win, 1),
                (SphStatus::Hold, 0),
                (SphStatus::Loss, 1),
                (SphStatus::Drop, 0),
            ]
        );

        let page = state.apply(&all, |p, f| f.matches(p));
        assert_eq!(page.total_count, 1);

        state.update_filter(|f| f.toggle_sph_status(SphStatus::Win));
        assert_eq!(state.filter.sph_status, None);
    }

    #[test]
    fn test_export_request() {
        let mut state = new_list_state(10);
        let (path, file) = export_request(&state, 2026);
        assert_eq!(path, "/projects/export/csv?year=2026&card_mode=all");
        assert_eq!(file, "projects_export_2026.csv");

        state.update_filter(|f| {
            f.division = Some("IT Solutions".into());
            f.months = MonthRange::new(None, Some("2024-09".into()));
            f.apply_card(CardMode::Completed);
            f.months = MonthRange::new(None, Some("2024-09".into()));
        });
        state.set_search(" fiber ");
        let (path, file) = export_request(&state, 2026);
        assert_eq!(
            path,
            "/projects/export/csv?year=2024&sales_stage=6&end_month=2024-09&q=fiber&execution=completed&card_mode=completed"
        );
        assert_eq!(file, "projects_export_2024.csv");
    }

    #[test]
    fn test_default_sort_is_code_descending() {
        let state = new_list_state(10);
        assert_eq!(state.sort_field, "project_code");
        assert_eq!(state.sort_direction, SortDirection::Desc);
        assert_eq!(state.page, 1);
    }
}
