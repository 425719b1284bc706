use serde::{Deserialize, Serialize};
use std::fmt;

/// Progress of a single post-PO monitoring stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PostPoStatus {
    #[default]
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Done")]
    Done,
}

impl PostPoStatus {
    pub fn code(&self) -> &'static str {
        match self {
            PostPoStatus::NotStarted => "Not Started",
            PostPoStatus::InProgress => "In Progress",
            PostPoStatus::Done => "Done",
        }
    }

    pub fn all() -> Vec<PostPoStatus> {
        vec![
            PostPoStatus::NotStarted,
            PostPoStatus::InProgress,
            PostPoStatus::Done,
        ]
    }

    /// Unknown or empty values read as "Not Started"
    pub fn normalize(raw: &str) -> Self {
        Self::all()
            .into_iter()
            .find(|s| s.code() == raw)
            .unwrap_or_default()
    }
}

impl fmt::Display for PostPoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
