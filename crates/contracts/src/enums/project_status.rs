use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[serde(rename = "Carry Over")]
    CarryOver,
    #[serde(rename = "Prospect")]
    Prospect,
    #[serde(rename = "New Prospect")]
    NewProspect,
}

impl ProjectStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ProjectStatus::CarryOver => "Carry Over",
            ProjectStatus::Prospect => "Prospect",
            ProjectStatus::NewProspect => "New Prospect",
        }
    }

    pub fn all() -> Vec<ProjectStatus> {
        vec![
            ProjectStatus::CarryOver,
            ProjectStatus::Prospect,
            ProjectStatus::NewProspect,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
