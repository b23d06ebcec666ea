use serde::{Deserialize, Serialize};

/// How often a job pays out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayPeriod {
    Annual,
    Monthly,
    SemiMonthly,
    Biweekly,
    Weekly,
}

impl PayPeriod {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Annual => "A",
            Self::Monthly => "M",
            Self::SemiMonthly => "S",
            Self::Biweekly => "B",
            Self::Weekly => "W",
        }
    }

    /// Exact match on the uppercase wire code.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "A" => Some(Self::Annual),
            "M" => Some(Self::Monthly),
            "S" => Some(Self::SemiMonthly),
            "B" => Some(Self::Biweekly),
            "W" => Some(Self::Weekly),
            _ => None,
        }
    }

    /// Pay periods in a year.
    pub fn per_year(&self) -> u32 {
        match self {
            Self::Annual => 1,
            Self::Monthly => 12,
            Self::SemiMonthly => 24,
            Self::Biweekly => 26,
            Self::Weekly => 52,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Annual => "Annual",
            Self::Monthly => "Monthly",
            Self::SemiMonthly => "Semi-monthly",
            Self::Biweekly => "Biweekly",
            Self::Weekly => "Weekly",
        }
    }

    /// All periods in display order.
    pub fn all() -> [Self; 5] {
        [
            Self::Annual,
            Self::Monthly,
            Self::SemiMonthly,
            Self::Biweekly,
            Self::Weekly,
        ]
    }
}

/// Occurrence count for a pay-period code, `-1` when the code is unknown.
///
/// The sentinel is part of the wire contract and is not an error; callers
/// that want a typed period should use [`PayPeriod::parse`] instead.
///
/// # Examples
///
/// ```
/// use fedtax_core::models::period_multiplier;
///
/// assert_eq!(period_multiplier("M"), 12);
/// assert_eq!(period_multiplier("Q"), -1);
/// ```
pub fn period_multiplier(code: &str) -> i32 {
    PayPeriod::parse(code).map_or(-1, |period| period.per_year() as i32)
}
