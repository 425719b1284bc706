use serde::{Deserialize, Serialize};

/// Pipeline position of a project, 1 (Prospecting) through 6 (Closing).
/// Serialized as the bare stage number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum SalesStage {
    Prospecting,
    Qualification,
    PresalesAnalysis,
    Quotation,
    Negotiation,
    Closing,
}

impl SalesStage {
    pub const COUNT: usize = 6;

    pub fn number(&self) -> i32 {
        match self {
            SalesStage::Prospecting => 1,
            SalesStage::Qualification => 2,
            SalesStage::PresalesAnalysis => 3,
            SalesStage::Quotation => 4,
            SalesStage::Negotiation => 5,
            SalesStage::Closing => 6,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SalesStage::Prospecting => "Prospecting",
            SalesStage::Qualification => "Qualification",
            SalesStage::PresalesAnalysis => "Presales Analysis",
            SalesStage::Quotation => "Quotation",
            SalesStage::Negotiation => "Negotiation",
            SalesStage::Closing => "Closing",
        }
    }

    /// Win probability used for the weighted revenue forecast
    pub fn probability(&self) -> f64 {
        match self {
            SalesStage::Prospecting => 0.10,
            SalesStage::Qualification => 0.20,
            SalesStage::PresalesAnalysis => 0.40,
            SalesStage::Quotation => 0.60,
            SalesStage::Negotiation => 0.80,
            SalesStage::Closing => 1.00,
        }
    }

    pub fn all() -> Vec<SalesStage> {
        vec![
            SalesStage::Prospecting,
            SalesStage::Qualification,
            SalesStage::PresalesAnalysis,
            SalesStage::Quotation,
            SalesStage::Negotiation,
            SalesStage::Closing,
        ]
    }

    pub fn from_number(n: i32) -> Option<Self> {
        Self::all().into_iter().find(|s| s.number() == n)
    }

    /// Probability for a raw stage number, 0 when it is out of range
    pub fn probability_of(n: i32) -> f64 {
        Self::from_number(n).map(|s| s.probability()).unwrap_or(0.0)
    }

    pub fn is_closing(n: i32) -> bool {
        n == SalesStage::Closing.number()
    }

    /// "3 - Presales Analysis"
    pub fn display(&self) -> String {
        format!("{} - {}", self.number(), self.label())
    }
}

impl TryFrom<i32> for SalesStage {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        SalesStage::from_number(value).ok_or_else(|| format!("Invalid sales stage: {}", value))
    }
}

impl From<SalesStage> for i32 {
    fn from(stage: SalesStage) -> Self {
        stage.number()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probabilities() {
        assert_eq!(SalesStage::probability_of(1), 0.10);
        assert_eq!(SalesStage::probability_of(3), 0.40);
        assert_eq!(SalesStage::probability_of(6), 1.00);
        assert_eq!(SalesStage::probability_of(0), 0.0);
        assert_eq!(SalesStage::probability_of(7), 0.0);
    }

    #[test]
    fn test_serde_as_number() {
        assert_eq!(serde_json::to_string(&SalesStage::Quotation).unwrap(), "4");
        let stage: SalesStage = serde_json::from_str("6").unwrap();
        assert_eq!(stage, SalesStage::Closing);
        assert!(serde_json::from_str::<SalesStage>("9").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(SalesStage::PresalesAnalysis.display(), "3 - Presales Analysis");
    }
}
