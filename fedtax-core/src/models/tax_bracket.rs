use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One slice of a progressive rate schedule.
///
/// `upper` is `None` for the top bracket, which taxes everything above
/// `lower` at `rate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub lower: Decimal,
    pub upper: Option<Decimal>,
    pub rate: Decimal,
}
