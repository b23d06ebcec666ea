use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A named amount: an itemized deduction or a credit. Like jobs, line
/// items are identified only by their list position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub description: String,
    pub amount: Decimal,
}

impl LineItem {
    pub fn new(description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            description: description.into(),
            amount,
        }
    }
}
