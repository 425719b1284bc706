//! SPH (quotation letter) related enumerations

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the quotation letter has been released to the customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SphReleaseStatus {
    Yes,
    #[default]
    No,
}

impl SphReleaseStatus {
    pub fn code(&self) -> &'static str {
        match self {
            SphReleaseStatus::Yes => "Yes",
            SphReleaseStatus::No => "No",
        }
    }

    pub fn all() -> Vec<SphReleaseStatus> {
        vec![SphReleaseStatus::Yes, SphReleaseStatus::No]
    }

    /// Anything other than a case-insensitive "yes" counts as not released
    pub fn normalize(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("yes") {
            SphReleaseStatus::Yes
        } else {
            SphReleaseStatus::No
        }
    }
}

impl fmt::Display for SphReleaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SphStatus {
    #[default]
    Open,
    Hold,
    Drop,
    Win,
    Loss,
}

impl SphStatus {
    pub fn code(&self) -> &'static str {
        match self {
            SphStatus::Open => "Open",
            SphStatus::Hold => "Hold",
            SphStatus::Drop => "Drop",
            SphStatus::Win => "Win",
            SphStatus::Loss => "Loss",
        }
    }

    pub fn all() -> Vec<SphStatus> {
        vec![
            SphStatus::Open,
            SphStatus::Hold,
            SphStatus::Drop,
            SphStatus::Win,
            SphStatus::Loss,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|s| s.code().eq_ignore_ascii_case(code.trim()))
    }

    /// Missing or unknown statuses are treated as Open
    pub fn normalize(raw: Option<&str>) -> Self {
        raw.and_then(Self::from_code).unwrap_or_default()
    }

    /// Loss and Drop require a reason category
    pub fn requires_reason(&self) -> bool {
        matches!(self, SphStatus::Loss | SphStatus::Drop)
    }
}

impl fmt::Display for SphStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Reason a quotation was lost or dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LossReasonCategory {
    Administrasi,
    Teknis,
    Other,
}

impl LossReasonCategory {
    pub fn code(&self) -> &'static str {
        match self {
            LossReasonCategory::Administrasi => "Administrasi",
            LossReasonCategory::Teknis => "Teknis",
            LossReasonCategory::Other => "Other",
        }
    }

    pub fn all() -> Vec<LossReasonCategory> {
        vec![
            LossReasonCategory::Administrasi,
            LossReasonCategory::Teknis,
            LossReasonCategory::Other,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.code() == code)
    }
}

impl fmt::Display for LossReasonCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_status_normalize() {
        assert_eq!(SphReleaseStatus::normalize("Yes"), SphReleaseStatus::Yes);
        assert_eq!(SphReleaseStatus::normalize(" yes "), SphReleaseStatus::Yes);
        assert_eq!(SphReleaseStatus::normalize("No"), SphReleaseStatus::No);
        assert_eq!(SphReleaseStatus::normalize(""), SphReleaseStatus::No);
    }

    #[test]
    fn test_sph_status_normalize_defaults_to_open() {
        assert_eq!(SphStatus::normalize(None), SphStatus::Open);
        assert_eq!(SphStatus::normalize(Some("")), SphStatus::Open);
        assert_eq!(SphStatus::normalize(Some("loss")), SphStatus::Loss);
        assert_eq!(SphStatus::normalize(Some("Pending")), SphStatus::Open);
    }

    #[test]
    fn test_requires_reason() {
        assert!(SphStatus::Loss.requires_reason());
        assert!(SphStatus::Drop.requires_reason());
        assert!(!SphStatus::Win.requires_reason());
        assert!(!SphStatus::Open.requires_reason());
    }
}
