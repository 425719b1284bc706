//! Post-PO monitoring: the five fixed execution stages that follow a won deal

use serde::{Deserialize, Serialize};

use crate::enums::{PostPoStatus, SalesStage};

pub const STAGE_COUNT: usize = 5;

pub const STAGE_NAMES: [&str; STAGE_COUNT] = [
    "Order Confirmation & Planning",
    "Procurement & Delivery Execution",
    "Implementation",
    "Goods Receipt / Service Acceptance",
    "Invoice Submission",
];

/// Name of a stage, 1-based
pub fn stage_name(stage: usize) -> Option<&'static str> {
    STAGE_NAMES.get(stage.checked_sub(1)?).copied()
}

/// Monitoring is only shown and editable once the project reached Closing
pub fn is_unlocked(sales_stage: i32) -> bool {
    SalesStage::is_closing(sales_stage)
}

/// One stage of the checklist
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostPoStage {
    pub status: PostPoStatus,
    pub date: Option<String>,
    pub note: Option<String>,
}

/// Wire shape: five flat groups of `stageN_status` / `stageN_date` / `stageN_note`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostPoMonitoring {
    #[serde(default)]
    pub stage1_status: PostPoStatus,
    #[serde(default)]
    pub stage2_status: PostPoStatus,
    #[serde(default)]
    pub stage3_status: PostPoStatus,
    #[serde(default)]
    pub stage4_status: PostPoStatus,
    #[serde(default)]
    pub stage5_status: PostPoStatus,

    #[serde(default)]
    pub stage1_date: Option<String>,
    #[serde(default)]
    pub stage2_date: Option<String>,
    #[serde(default)]
    pub stage3_date: Option<String>,
    #[serde(default)]
    pub stage4_date: Option<String>,
    #[serde(default)]
    pub stage5_date: Option<String>,

    #[serde(default)]
    pub stage1_note: Option<String>,
    #[serde(default)]
    pub stage2_note: Option<String>,
    #[serde(default)]
    pub stage3_note: Option<String>,
    #[serde(default)]
    pub stage4_note: Option<String>,
    #[serde(default)]
    pub stage5_note: Option<String>,
}

impl PostPoMonitoring {
    fn fields_mut(
        &mut self,
        stage: usize,
    ) -> Option<(&mut PostPoStatus, &mut Option<String>, &mut Option<String>)> {
        match stage {
            1 => Some((&mut self.stage1_status, &mut self.stage1_date, &mut self.stage1_note)),
            2 => Some((&mut self.stage2_status, &mut self.stage2_date, &mut self.stage2_note)),
            3 => Some((&mut self.stage3_status, &mut self.stage3_date, &mut self.stage3_note)),
            4 => Some((&mut self.stage4_status, &mut self.stage4_date, &mut self.stage4_note)),
            5 => Some((&mut self.stage5_status, &mut self.stage5_date, &mut self.stage5_note)),
            _ => None,
        }
    }

    /// Stage 1..=5; dates are cut to "YYYY-MM-DD"
    pub fn stage(&self, stage: usize) -> Option<PostPoStage> {
        let (status, date, note) = match stage {
            1 => (self.stage1_status, &self.stage1_date, &self.stage1_note),
            2 => (self.stage2_status, &self.stage2_date, &self.stage2_note),
            3 => (self.stage3_status, &self.stage3_date, &self.stage3_note),
            4 => (self.stage4_status, &self.stage4_date, &self.stage4_note),
            5 => (self.stage5_status, &self.stage5_date, &self.stage5_note),
            _ => return None,
        };
        Some(PostPoStage {
            status,
            date: date.as_deref().map(|d| d.chars().take(10).collect()),
            note: note.clone(),
        })
    }

    pub fn stages(&self) -> Vec<(usize, PostPoStage)> {
        (1..=STAGE_COUNT)
            .filter_map(|n| self.stage(n).map(|s| (n, s)))
            .collect()
    }

    pub fn statuses(&self) -> [PostPoStatus; STAGE_COUNT] {
        [
            self.stage1_status,
            self.stage2_status,
            self.stage3_status,
            self.stage4_status,
            self.stage5_status,
        ]
    }

    pub fn done_count(&self) -> usize {
        self.statuses()
            .iter()
            .filter(|s| **s == PostPoStatus::Done)
            .count()
    }

    /// Every stage is Done
    pub fn is_completed(&self) -> bool {
        self.done_count() == STAGE_COUNT
    }

    /// round(done / 5 * 100)
    pub fn progress_pct(&self) -> u32 {
        ((self.done_count() as f64 / STAGE_COUNT as f64) * 100.0).round() as u32
    }

    /// Mirror a successful stage update locally
    pub fn apply(&mut self, update: &PostPoStageUpdate) {
        if let Some((status, date, note)) = self.fields_mut(update.stage) {
            *status = update.status;
            *date = update.date.clone();
            *note = update.note.clone();
        }
    }
}

/// PUT /projects/:id/postpo-monitoring body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostPoStageUpdate {
    pub stage: usize,
    pub status: PostPoStatus,
    pub date: Option<String>,
    pub note: Option<String>,
}

impl PostPoStageUpdate {
    /// Blank date or note inputs are sent as null
    pub fn new(stage: usize, status: PostPoStatus, date: &str, note: &str) -> Self {
        let blank_to_none = |v: &str| {
            let v = v.trim();
            (!v.is_empty()).then(|| v.to_string())
        };
        Self {
            stage,
            status,
            date: blank_to_none(date),
            note: blank_to_none(note),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_done() -> PostPoMonitoring {
        PostPoMonitoring {
            stage1_status: PostPoStatus::Done,
            stage2_status: PostPoStatus::Done,
            stage3_status: PostPoStatus::Done,
            stage4_status: PostPoStatus::Done,
            stage5_status: PostPoStatus::Done,
            ..Default::default()
        }
    }

    #[test]
    fn test_progress() {
        let mut m = PostPoMonitoring::default();
        assert_eq!(m.progress_pct(), 0);
        m.stage1_status = PostPoStatus::Done;
        assert_eq!(m.progress_pct(), 20);
        m.stage2_status = PostPoStatus::Done;
        m.stage3_status = PostPoStatus::InProgress;
        assert_eq!(m.progress_pct(), 40);
        assert!(!m.is_completed());
        assert_eq!(all_done().progress_pct(), 100);
        assert!(all_done().is_completed());
    }

    #[test]
    fn test_gate_on_closing_stage() {
        assert!(is_unlocked(6));
        for stage in 0..6 {
            assert!(!is_unlocked(stage));
        }
    }

    #[test]
    fn test_apply_update_patches_one_stage() {
        let mut m = PostPoMonitoring::default();
        let update = PostPoStageUpdate::new(3, PostPoStatus::InProgress, "2025-02-10", "  ");
        assert_eq!(update.note, None);
        m.apply(&update);

        let stage = m.stage(3).unwrap();
        assert_eq!(stage.status, PostPoStatus::InProgress);
        assert_eq!(stage.date.as_deref(), Some("2025-02-10"));
        assert_eq!(m.stage(2).unwrap().status, PostPoStatus::NotStarted);

        m.apply(&PostPoStageUpdate::new(9, PostPoStatus::Done, "", ""));
        assert_eq!(m.done_count(), 0);
    }

    #[test]
    fn test_stage_date_is_truncated() {
        let m: PostPoMonitoring = serde_json::from_str(
            r#"{"stage1_status":"Done","stage1_date":"2025-03-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(m.stage(1).unwrap().date.as_deref(), Some("2025-03-01"));
        assert_eq!(m.stage(5).unwrap().status, PostPoStatus::NotStarted);
    }

    #[test]
    fn test_stage_names() {
        assert_eq!(stage_name(1), Some("Order Confirmation & Planning"));
        assert_eq!(stage_name(5), Some("Invoice Submission"));
        assert_eq!(stage_name(0), None);
        assert_eq!(stage_name(6), None);
    }

    #[test]
    fn test_update_serializes_nulls() {
        let json = serde_json::to_value(PostPoStageUpdate::new(1, PostPoStatus::Done, "", "ok")).unwrap();
        assert_eq!(json["status"], "Done");
        assert!(json["date"].is_null());
        assert_eq!(json["note"], "ok");
    }
}
