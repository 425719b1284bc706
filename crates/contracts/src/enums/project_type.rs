use serde::{Deserialize, Serialize};
use std::fmt;

use super::ProjectStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectType {
    #[serde(rename = "Project Based")]
    ProjectBased,
    #[serde(rename = "Recurring")]
    Recurring,
    #[serde(rename = "New Recurring")]
    NewRecurring,
}

impl ProjectType {
    pub fn code(&self) -> &'static str {
        match self {
            ProjectType::ProjectBased => "Project Based",
            ProjectType::Recurring => "Recurring",
            ProjectType::NewRecurring => "New Recurring",
        }
    }

    pub fn all() -> Vec<ProjectType> {
        vec![
            ProjectType::ProjectBased,
            ProjectType::Recurring,
            ProjectType::NewRecurring,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.code() == code)
    }

    /// Recurring plans carry one row per month, project-based plans a single row
    pub fn is_recurring(&self) -> bool {
        !matches!(self, ProjectType::ProjectBased)
    }

    /// "New Recurring" is only offered while the status is "New Prospect"
    pub fn allowed_for(status: ProjectStatus) -> Vec<ProjectType> {
        Self::all()
            .into_iter()
            .filter(|t| *t != ProjectType::NewRecurring || status == ProjectStatus::NewProspect)
            .collect()
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_recurring_only_offered_for_new_prospect() {
        assert!(ProjectType::allowed_for(ProjectStatus::NewProspect).contains(&ProjectType::NewRecurring));
        assert!(!ProjectType::allowed_for(ProjectStatus::Prospect).contains(&ProjectType::NewRecurring));
        assert!(!ProjectType::allowed_for(ProjectStatus::CarryOver).contains(&ProjectType::NewRecurring));
    }

    #[test]
    fn test_is_recurring() {
        assert!(!ProjectType::ProjectBased.is_recurring());
        assert!(ProjectType::Recurring.is_recurring());
        assert!(ProjectType::NewRecurring.is_recurring());
    }
}
