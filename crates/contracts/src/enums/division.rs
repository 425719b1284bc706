use serde::{Deserialize, Serialize};
use std::fmt;

/// Business division. Projects, budgets and "user"-role accounts are scoped by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Division {
    #[serde(rename = "Network Communications")]
    NetworkCommunications,
    #[serde(rename = "Oil Mining & Goverments")]
    OilMiningGovernments,
    #[serde(rename = "IT Solutions")]
    ItSolutions,
}

impl Division {
    /// Value sent to and received from the API
    pub fn code(&self) -> &'static str {
        match self {
            Division::NetworkCommunications => "Network Communications",
            Division::OilMiningGovernments => "Oil Mining & Goverments",
            Division::ItSolutions => "IT Solutions",
        }
    }

    pub fn all() -> Vec<Division> {
        vec![
            Division::NetworkCommunications,
            Division::OilMiningGovernments,
            Division::ItSolutions,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|d| d.code() == code)
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_round_trips_every_division() {
        for d in Division::all() {
            assert_eq!(Division::from_code(d.code()), Some(d));
        }
        assert_eq!(Division::from_code("Retail"), None);
    }

    #[test]
    fn test_serde_uses_api_labels() {
        let json = serde_json::to_string(&Division::OilMiningGovernments).unwrap();
        assert_eq!(json, "\"Oil Mining & Goverments\"");
    }
}
