mod filing_status;
mod job;
mod line_item;
mod pay_period;
mod tax_bracket;
mod tax_summary;

pub use filing_status::FilingStatus;
pub use job::{CompensationKind, Job};
pub use line_item::LineItem;
pub use pay_period::{PayPeriod, period_multiplier};
pub use tax_bracket::TaxBracket;
pub use tax_summary::TaxSummary;
