use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Result of a full estimate. Field names are the wire names the web
/// page reads, so this serializes directly as the `/calculate` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSummary {
    pub gross_income: Decimal,
    pub taxable_income: Decimal,
    pub fica_tax: Decimal,
    pub income_tax: Decimal,
    pub refundable_credits: Decimal,
    /// FICA plus income tax minus refundable credits. Negative when
    /// refundable credits exceed the liability.
    pub total_tax: Decimal,
}
