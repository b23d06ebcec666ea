use serde::{Deserialize, Serialize};

/// Federal filing status. Wire codes are single letters: `U` (unmarried /
/// single), `J` (joint), `S` (separate), `H` (head of household).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilingStatus {
    Single,
    MarriedFilingJointly,
    MarriedFilingSeparately,
    HeadOfHousehold,
}

impl FilingStatus {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Single => "U",
            Self::MarriedFilingJointly => "J",
            Self::MarriedFilingSeparately => "S",
            Self::HeadOfHousehold => "H",
        }
    }

    /// Exact match on the wire code; anything else is rejected.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "U" => Some(Self::Single),
            "J" => Some(Self::MarriedFilingJointly),
            "S" => Some(Self::MarriedFilingSeparately),
            "H" => Some(Self::HeadOfHousehold),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::MarriedFilingJointly => "Married Filing Jointly",
            Self::MarriedFilingSeparately => "Married Filing Separately",
            Self::HeadOfHousehold => "Head of Household",
        }
    }

    /// All statuses in display order.
    pub fn all() -> [Self; 4] {
        [
            Self::Single,
            Self::MarriedFilingJointly,
            Self::MarriedFilingSeparately,
            Self::HeadOfHousehold,
        ]
    }
}
