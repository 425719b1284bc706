//! Achievement colouring for budgets.
//!
//! The list and the detail page use different cut-offs; both are kept as-is
//! until the business confirms one set of thresholds.

/// Colour band of a budget's achievement percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AchievementLevel {
    /// Spending is at or past the budget
    Over,
    Warning,
    Healthy,
}

impl AchievementLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            AchievementLevel::Over => "text--error",
            AchievementLevel::Warning => "text--warning",
            AchievementLevel::Healthy => "text--success",
        }
    }
}

/// Budgets list: ≥100 over, ≥80 warning, otherwise healthy
pub fn list_achievement_level(pct: f64) -> AchievementLevel {
    if pct >= 100.0 {
        AchievementLevel::Over
    } else if pct >= 80.0 {
        AchievementLevel::Warning
    } else {
        AchievementLevel::Healthy
    }
}

/// Budget detail: >100 over, ≥80 healthy, otherwise warning
pub fn detail_achievement_level(pct: f64) -> AchievementLevel {
    if pct > 100.0 {
        AchievementLevel::Over
    } else if pct >= 80.0 {
        AchievementLevel::Healthy
    } else {
        AchievementLevel::Warning
    }
}

/// Negative remaining budget is flagged
pub fn remaining_is_negative(remaining: f64) -> bool {
    remaining < 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_thresholds() {
        assert_eq!(list_achievement_level(100.0), AchievementLevel::Over);
        assert_eq!(list_achievement_level(120.0), AchievementLevel::Over);
        assert_eq!(list_achievement_level(80.0), AchievementLevel::Warning);
        assert_eq!(list_achievement_level(79.9), AchievementLevel::Healthy);
    }

    #[test]
    fn test_detail_thresholds() {
        assert_eq!(detail_achievement_level(100.0), AchievementLevel::Healthy);
        assert_eq!(detail_achievement_level(100.1), AchievementLevel::Over);
        assert_eq!(detail_achievement_level(80.0), AchievementLevel::Healthy);
        assert_eq!(detail_achievement_level(50.0), AchievementLevel::Warning);
    }

    #[test]
    fn test_thresholds_disagree_at_exactly_100() {
        assert_ne!(list_achievement_level(100.0), detail_achievement_level(100.0));
    }
}
