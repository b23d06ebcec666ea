//! Mutable session state for one taxpayer.
//!
//! A [`Taxpayer`] collects jobs, deductions, and credits as they are
//! entered. Entries carry no identifiers; list position is the only
//! handle, so removing index `i` shifts every later entry down by one.
//!
//! [`Taxpayer::calculate`] runs the full estimate:
//!
//! | Step | Description |
//! |------|-------------|
//! | 1 | Gross income: sum of every job's annual income |
//! | 2 | FICA tax on gross income |
//! | 3 | Taxable income: gross - standard deduction - entered deductions, floored at 0 |
//! | 4 | Income tax from the bracket schedule for the filing status |
//! | 5 | Non-refundable credits subtracted one at a time, floored at 0 after each |
//! | 6 | Refundable credits summed |
//! | 7 | Total tax: FICA + income tax - refundable credits (may be negative) |
//!
//! The standard deduction in step 3 is always applied from the tables;
//! a deduction entry that itself looks like a standard deduction only
//! latches [`Taxpayer::standard_deduction_added`] so a front end can
//! point out the likely double count.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use fedtax_core::Taxpayer;
//! use fedtax_core::models::{CompensationKind, FilingStatus, Job, PayPeriod};
//!
//! let mut taxpayer = Taxpayer::new();
//! taxpayer.set_filing_status(FilingStatus::Single);
//! taxpayer.add_job(
//!     "Day job",
//!     CompensationKind::Salaried,
//!     dec!(5000.00),
//!     PayPeriod::Monthly,
//!     Job::default_hours(),
//! );
//!
//! let summary = taxpayer.calculate();
//!
//! assert_eq!(summary.gross_income, dec!(60000.00));
//! assert_eq!(summary.income_tax, dec!(5161.50));
//! assert_eq!(summary.total_tax, dec!(9751.50));
//! ```

use rust_decimal::Decimal;
use tracing::warn;

use crate::calculations::common::{max, round_half_up};
use crate::calculations::fica::{FicaBreakdown, FicaCalculator};
use crate::calculations::income_tax::TaxSchedule;
use crate::models::{CompensationKind, FilingStatus, Job, LineItem, PayPeriod, TaxSummary};
use crate::tables;

/// One in-memory tax estimation session.
///
/// Holds everything the user has entered and nothing else; all
/// calculations read the current lists, so entries can be added and
/// removed freely between estimates.
#[derive(Debug, Clone, Default)]
pub struct Taxpayer {
    jobs: Vec<Job>,
    filing_status: Option<FilingStatus>,
    deductions: Vec<LineItem>,
    refundable_credits: Vec<LineItem>,
    non_refundable_credits: Vec<LineItem>,
    standard_deduction_added: bool,
}

impl Taxpayer {
    /// An empty session: no jobs, no entries, no filing status.
    pub fn new() -> Self {
        Self::default()
    }

    /// The jobs entered so far, in entry order.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// The itemized deductions entered so far.
    pub fn deductions(&self) -> &[LineItem] {
        &self.deductions
    }

    /// The refundable credits entered so far.
    pub fn refundable_credits(&self) -> &[LineItem] {
        &self.refundable_credits
    }

    /// The non-refundable credits entered so far.
    pub fn non_refundable_credits(&self) -> &[LineItem] {
        &self.non_refundable_credits
    }

    /// The chosen filing status, or `None` before one is set.
    pub fn filing_status(&self) -> Option<FilingStatus> {
        self.filing_status
    }

    /// Whether any deduction entry has looked like a standard deduction.
    ///
    /// Once set the flag stays set, even if the entry is removed.
    pub fn standard_deduction_added(&self) -> bool {
        self.standard_deduction_added
    }

    /// Appends a job, resolving the pay period to its occurrence count.
    pub fn add_job(
        &mut self,
        description: impl Into<String>,
        kind: CompensationKind,
        amount: Decimal,
        period: PayPeriod,
        hours_per_period: Decimal,
    ) {
        self.jobs
            .push(Job::new(description, kind, amount, period, hours_per_period));
    }

    /// Removes the job at `index`. Returns false and leaves the list
    /// untouched when the index is out of range.
    pub fn remove_job(&mut self, index: usize) -> bool {
        remove_at(&mut self.jobs, "jobs", index)
    }

    /// Sets (or replaces) the filing status.
    pub fn set_filing_status(&mut self, status: FilingStatus) {
        self.filing_status = Some(status);
    }

    /// Appends an itemized deduction.
    ///
    /// Latches [`Taxpayer::standard_deduction_added`] when the entry
    /// looks like a standard deduction.
    pub fn add_deduction(&mut self, description: impl Into<String>, amount: Decimal) {
        let item = LineItem::new(description, amount);
        if looks_like_standard_deduction(&item.description, item.amount) {
            self.standard_deduction_added = true;
        }
        self.deductions.push(item);
    }

    /// Removes the deduction at `index`, bounds-checked.
    pub fn remove_deduction(&mut self, index: usize) -> bool {
        remove_at(&mut self.deductions, "deductions", index)
    }

    /// Appends a refundable credit.
    pub fn add_refundable_credit(&mut self, description: impl Into<String>, amount: Decimal) {
        self.refundable_credits.push(LineItem::new(description, amount));
    }

    /// Removes the refundable credit at `index`, bounds-checked.
    pub fn remove_refundable_credit(&mut self, index: usize) -> bool {
        remove_at(&mut self.refundable_credits, "refundable_credits", index)
    }

    /// Appends a non-refundable credit.
    pub fn add_non_refundable_credit(&mut self, description: impl Into<String>, amount: Decimal) {
        self.non_refundable_credits
            .push(LineItem::new(description, amount));
    }

    /// Removes the non-refundable credit at `index`, bounds-checked.
    pub fn remove_non_refundable_credit(&mut self, index: usize) -> bool {
        remove_at(
            &mut self.non_refundable_credits,
            "non_refundable_credits",
            index,
        )
    }

    /// The standard deduction for the current filing status, falling
    /// back to the Single amount while no status is set.
    pub fn standard_deduction_amount(&self) -> Decimal {
        tables::standard_deduction(self.filing_status)
    }

    /// FICA on `gross_income` with the surtax threshold for the current
    /// filing status.
    pub fn calculate_fica(&self, gross_income: Decimal) -> FicaBreakdown {
        FicaCalculator::for_status(self.filing_status).calculate(gross_income)
    }

    /// Bracket income tax on `taxable_income` for the current filing
    /// status. With no status set there is no schedule to apply, so the
    /// tax is zero.
    pub fn calculate_income_tax(&self, taxable_income: Decimal) -> Decimal {
        let status = match self.filing_status {
            Some(status) => status,
            None => {
                warn!("income tax requested with no filing status set, returning zero");
                return Decimal::ZERO;
            }
        };

        let brackets = tables::tax_brackets(status);
        TaxSchedule::new(&brackets).calculate(taxable_income)
    }

    /// Runs the full estimate over the current session state.
    pub fn calculate(&self) -> TaxSummary {
        let gross_income = self.gross_income();
        let fica_tax = self.calculate_fica(gross_income).total();
        let taxable_income = self.taxable_income(gross_income);
        let bracket_tax = self.calculate_income_tax(taxable_income);
        let income_tax = self.income_tax_after_credits(bracket_tax);
        let refundable_credits = self.refundable_credit_total();
        let total_tax = round_half_up(fica_tax + income_tax - refundable_credits);

        TaxSummary {
            gross_income,
            taxable_income,
            fica_tax,
            income_tax,
            refundable_credits,
            total_tax,
        }
    }

    /// Sums every job's annual income.
    fn gross_income(&self) -> Decimal {
        round_half_up(self.jobs.iter().map(Job::annual_income).sum())
    }

    /// Gross income less the standard deduction and every entered
    /// deduction, floored at zero.
    fn taxable_income(&self, gross_income: Decimal) -> Decimal {
        let deductions: Decimal = self.deductions.iter().map(|item| item.amount).sum();
        max(
            round_half_up(gross_income - self.standard_deduction_amount() - deductions),
            Decimal::ZERO,
        )
    }

    /// Applies non-refundable credits in entry order, flooring the
    /// running value at zero after each one.
    fn income_tax_after_credits(&self, bracket_tax: Decimal) -> Decimal {
        let mut tax = bracket_tax;
        for credit in &self.non_refundable_credits {
            tax = max(round_half_up(tax - credit.amount), Decimal::ZERO);
        }
        tax
    }

    /// Sums the refundable credits.
    fn refundable_credit_total(&self) -> Decimal {
        round_half_up(self.refundable_credits.iter().map(|item| item.amount).sum())
    }
}

/// Bounds-checked removal shared by all four lists.
fn remove_at<T>(items: &mut Vec<T>, list: &str, index: usize) -> bool {
    if index >= items.len() {
        warn!(list, index, len = items.len(), "removal index out of range");
        return false;
    }
    items.remove(index);
    true
}

/// A deduction entry counts as a standard deduction when "standard"
/// appears in the description (any case) or the amount equals one of
/// the table's deduction figures.
fn looks_like_standard_deduction(description: &str, amount: Decimal) -> bool {
    description.to_lowercase().contains("standard")
        || tables::standard_deduction_amounts().contains(&amount)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn salaried_monthly(taxpayer: &mut Taxpayer, description: &str, amount: Decimal) {
        taxpayer.add_job(
            description,
            CompensationKind::Salaried,
            amount,
            PayPeriod::Monthly,
            Job::default_hours(),
        );
    }

    // =========================================================================
    // job list tests
    // =========================================================================

    #[test]
    fn new_session_is_empty() {
        let taxpayer = Taxpayer::new();

        assert!(taxpayer.jobs().is_empty());
        assert!(taxpayer.deductions().is_empty());
        assert!(taxpayer.refundable_credits().is_empty());
        assert!(taxpayer.non_refundable_credits().is_empty());
        assert_eq!(taxpayer.filing_status(), None);
        assert!(!taxpayer.standard_deduction_added());
    }

    #[test]
    fn add_job_appends_in_entry_order() {
        let mut taxpayer = Taxpayer::new();

        salaried_monthly(&mut taxpayer, "First", dec!(1000.00));
        salaried_monthly(&mut taxpayer, "Second", dec!(2000.00));

        assert_eq!(taxpayer.jobs().len(), 2);
        assert_eq!(taxpayer.jobs()[0].description, "First");
        assert_eq!(taxpayer.jobs()[1].description, "Second");
    }

    #[test]
    fn remove_job_shifts_later_jobs_down() {
        let mut taxpayer = Taxpayer::new();
        salaried_monthly(&mut taxpayer, "First", dec!(1000.00));
        salaried_monthly(&mut taxpayer, "Second", dec!(2000.00));
        salaried_monthly(&mut taxpayer, "Third", dec!(3000.00));

        let removed = taxpayer.remove_job(1);

        assert!(removed);
        assert_eq!(taxpayer.jobs().len(), 2);
        assert_eq!(taxpayer.jobs()[0].description, "First");
        assert_eq!(taxpayer.jobs()[1].description, "Third");
    }

    #[test]
    fn remove_job_with_index_at_len_fails() {
        let mut taxpayer = Taxpayer::new();
        salaried_monthly(&mut taxpayer, "Only", dec!(1000.00));

        let removed = taxpayer.remove_job(1);

        assert!(!removed);
        assert_eq!(taxpayer.jobs().len(), 1);
    }

    #[test]
    fn remove_job_from_empty_list_fails() {
        let mut taxpayer = Taxpayer::new();

        let removed = taxpayer.remove_job(0);

        assert!(!removed);
    }

    // =========================================================================
    // filing status tests
    // =========================================================================

    #[test]
    fn set_filing_status_stores_the_status() {
        let mut taxpayer = Taxpayer::new();

        taxpayer.set_filing_status(FilingStatus::HeadOfHousehold);

        assert_eq!(taxpayer.filing_status(), Some(FilingStatus::HeadOfHousehold));
    }

    #[test]
    fn set_filing_status_replaces_a_previous_choice() {
        let mut taxpayer = Taxpayer::new();
        taxpayer.set_filing_status(FilingStatus::MarriedFilingJointly);

        taxpayer.set_filing_status(FilingStatus::MarriedFilingSeparately);

        assert_eq!(
            taxpayer.filing_status(),
            Some(FilingStatus::MarriedFilingSeparately)
        );
    }

    // =========================================================================
    // deduction and standard-deduction flag tests
    // =========================================================================

    #[test]
    fn add_deduction_latches_on_standard_in_the_description() {
        let mut taxpayer = Taxpayer::new();

        taxpayer.add_deduction("Standard Deduction", dec!(15000.00));

        assert!(taxpayer.standard_deduction_added());
        assert_eq!(taxpayer.deductions().len(), 1);
    }

    #[test]
    fn add_deduction_matches_the_description_case_insensitively() {
        let mut taxpayer = Taxpayer::new();

        taxpayer.add_deduction("see STANDARD notes", dec!(1.00));

        assert!(taxpayer.standard_deduction_added());
    }

    #[test]
    fn add_deduction_latches_on_a_known_deduction_amount() {
        let mut taxpayer = Taxpayer::new();

        taxpayer.add_deduction("Mortgage payoff", dec!(22500.00));

        assert!(taxpayer.standard_deduction_added());
    }

    #[test]
    fn add_deduction_ignores_ordinary_entries() {
        let mut taxpayer = Taxpayer::new();

        taxpayer.add_deduction("Charity", dec!(500.00));

        assert!(!taxpayer.standard_deduction_added());
        assert_eq!(taxpayer.deductions().len(), 1);
    }

    #[test]
    fn standard_deduction_flag_survives_removal() {
        let mut taxpayer = Taxpayer::new();
        taxpayer.add_deduction("Standard Deduction", dec!(30000.00));

        let removed = taxpayer.remove_deduction(0);

        assert!(removed);
        assert!(taxpayer.deductions().is_empty());
        assert!(taxpayer.standard_deduction_added());
    }

    // =========================================================================
    // credit list tests
    // =========================================================================

    #[test]
    fn credits_land_in_their_own_lists() {
        let mut taxpayer = Taxpayer::new();

        taxpayer.add_refundable_credit("EITC", dec!(1000.00));
        taxpayer.add_non_refundable_credit("Child care", dec!(600.00));

        assert_eq!(taxpayer.refundable_credits().len(), 1);
        assert_eq!(taxpayer.non_refundable_credits().len(), 1);
        assert_eq!(taxpayer.refundable_credits()[0].description, "EITC");
        assert_eq!(taxpayer.non_refundable_credits()[0].amount, dec!(600.00));
    }

    #[test]
    fn remove_refundable_credit_ignores_other_list_lengths() {
        let mut taxpayer = Taxpayer::new();
        taxpayer.add_deduction("Charity", dec!(500.00));
        taxpayer.add_deduction("Mortgage interest", dec!(8000.00));

        let removed = taxpayer.remove_refundable_credit(0);

        assert!(!removed);
        assert_eq!(taxpayer.deductions().len(), 2);
    }

    #[test]
    fn remove_non_refundable_credit_is_bounds_checked() {
        let mut taxpayer = Taxpayer::new();
        taxpayer.add_non_refundable_credit("Child care", dec!(600.00));

        let removed = taxpayer.remove_non_refundable_credit(1);

        assert!(!removed);
        assert_eq!(taxpayer.non_refundable_credits().len(), 1);
    }

    // =========================================================================
    // standard_deduction_amount tests
    // =========================================================================

    #[test]
    fn standard_deduction_amount_follows_the_status() {
        let mut taxpayer = Taxpayer::new();
        taxpayer.set_filing_status(FilingStatus::MarriedFilingJointly);

        let amount = taxpayer.standard_deduction_amount();

        assert_eq!(amount, dec!(30000));
    }

    #[test]
    fn standard_deduction_amount_defaults_while_unset() {
        let taxpayer = Taxpayer::new();

        let amount = taxpayer.standard_deduction_amount();

        assert_eq!(amount, dec!(15000));
    }

    // =========================================================================
    // calculate_fica and calculate_income_tax tests
    // =========================================================================

    #[test]
    fn calculate_fica_uses_the_session_status_threshold() {
        let mut taxpayer = Taxpayer::new();
        taxpayer.set_filing_status(FilingStatus::MarriedFilingSeparately);

        let fica = taxpayer.calculate_fica(dec!(130000.00));

        // (130000 - 125000) × 0.009
        assert_eq!(fica.additional_medicare_tax, dec!(45.00));
    }

    #[test]
    fn calculate_fica_without_status_uses_defaults() {
        let taxpayer = Taxpayer::new();

        let fica = taxpayer.calculate_fica(dec!(60000.00));

        assert_eq!(fica.total(), dec!(4590.00));
    }

    #[test]
    fn calculate_income_tax_uses_the_session_schedule() {
        let mut taxpayer = Taxpayer::new();
        taxpayer.set_filing_status(FilingStatus::MarriedFilingJointly);

        let tax = taxpayer.calculate_income_tax(dec!(45000.00));

        // 23850 × 0.10 + (45000 - 23850) × 0.12
        assert_eq!(tax, dec!(4923.00));
    }

    #[test]
    fn calculate_income_tax_without_status_is_zero() {
        let taxpayer = Taxpayer::new();

        let tax = taxpayer.calculate_income_tax(dec!(45000.00));

        assert_eq!(tax, dec!(0.00));
    }

    // =========================================================================
    // calculate (integration) tests
    // =========================================================================

    #[test]
    fn calculate_monthly_salary_single_filer() {
        let mut taxpayer = Taxpayer::new();
        taxpayer.set_filing_status(FilingStatus::Single);
        salaried_monthly(&mut taxpayer, "Day job", dec!(5000.00));

        let summary = taxpayer.calculate();

        // Gross: 5000 × 12 = 60000; taxable: 60000 - 15000 = 45000
        assert_eq!(summary.gross_income, dec!(60000.00));
        assert_eq!(summary.taxable_income, dec!(45000.00));
        // FICA: 60000 × (0.062 + 0.0145) = 4590
        assert_eq!(summary.fica_tax, dec!(4590.00));
        assert_eq!(summary.income_tax, dec!(5161.50));
        assert_eq!(summary.refundable_credits, dec!(0.00));
        assert_eq!(summary.total_tax, dec!(9751.50));
    }

    #[test]
    fn calculate_empty_session_owes_nothing() {
        let taxpayer = Taxpayer::new();

        let summary = taxpayer.calculate();

        assert_eq!(summary.gross_income, dec!(0.00));
        assert_eq!(summary.taxable_income, dec!(0.00));
        assert_eq!(summary.fica_tax, dec!(0.00));
        assert_eq!(summary.income_tax, dec!(0.00));
        assert_eq!(summary.total_tax, dec!(0.00));
    }

    #[test]
    fn calculate_hourly_job() {
        let mut taxpayer = Taxpayer::new();
        taxpayer.set_filing_status(FilingStatus::Single);
        taxpayer.add_job(
            "Shop",
            CompensationKind::Hourly,
            dec!(25.00),
            PayPeriod::Weekly,
            dec!(40.00),
        );

        let summary = taxpayer.calculate();

        // Gross: 25 × 40 × 52 = 52000; taxable: 37000
        assert_eq!(summary.gross_income, dec!(52000.00));
        assert_eq!(summary.taxable_income, dec!(37000.00));
        // FICA: 52000 × 0.062 + 52000 × 0.0145 = 3224 + 754 = 3978
        assert_eq!(summary.fica_tax, dec!(3978.00));
        // Tax: 1192.50 + (37000 - 11925) × 0.12 = 4201.50
        assert_eq!(summary.income_tax, dec!(4201.50));
        assert_eq!(summary.total_tax, dec!(8179.50));
    }

    #[test]
    fn calculate_without_status_uses_single_defaults() {
        let mut taxpayer = Taxpayer::new();
        salaried_monthly(&mut taxpayer, "Day job", dec!(5000.00));

        let summary = taxpayer.calculate();

        // Same deduction and FICA defaults as Single, but no bracket
        // schedule applies while the status is unset.
        assert_eq!(summary.taxable_income, dec!(45000.00));
        assert_eq!(summary.fica_tax, dec!(4590.00));
        assert_eq!(summary.income_tax, dec!(0.00));
        assert_eq!(summary.total_tax, dec!(4590.00));
    }

    #[test]
    fn calculate_sums_multiple_jobs() {
        let mut taxpayer = Taxpayer::new();
        taxpayer.set_filing_status(FilingStatus::Single);
        salaried_monthly(&mut taxpayer, "Day job", dec!(5000.00));
        taxpayer.add_job(
            "Shop",
            CompensationKind::Hourly,
            dec!(25.00),
            PayPeriod::Weekly,
            dec!(40.00),
        );

        let summary = taxpayer.calculate();

        // Gross: 60000 + 52000 = 112000; taxable: 97000
        assert_eq!(summary.gross_income, dec!(112000.00));
        assert_eq!(summary.taxable_income, dec!(97000.00));
        // Tax: 5578.50 + (97000 - 48475) × 0.22 = 16254
        assert_eq!(summary.income_tax, dec!(16254.00));
        // FICA: 112000 × 0.062 + 112000 × 0.0145 = 6944 + 1624 = 8568
        assert_eq!(summary.fica_tax, dec!(8568.00));
        assert_eq!(summary.total_tax, dec!(24822.00));
    }

    #[test]
    fn calculate_deductions_reduce_taxable_income() {
        let mut taxpayer = Taxpayer::new();
        taxpayer.set_filing_status(FilingStatus::Single);
        salaried_monthly(&mut taxpayer, "Day job", dec!(5000.00));
        taxpayer.add_deduction("Charity", dec!(5000.00));

        let summary = taxpayer.calculate();

        // Taxable: 60000 - 15000 - 5000 = 40000
        assert_eq!(summary.taxable_income, dec!(40000.00));
        // Tax: 1192.50 + (40000 - 11925) × 0.12 = 4561.50
        assert_eq!(summary.income_tax, dec!(4561.50));
        assert_eq!(summary.total_tax, dec!(9151.50));
    }

    #[test]
    fn calculate_floors_taxable_income_at_zero() {
        let mut taxpayer = Taxpayer::new();
        taxpayer.set_filing_status(FilingStatus::Single);
        taxpayer.add_job(
            "Odd jobs",
            CompensationKind::Salaried,
            dec!(10000.00),
            PayPeriod::Annual,
            Job::default_hours(),
        );

        let summary = taxpayer.calculate();

        // 10000 of gross is under the 15000 standard deduction, but
        // FICA still applies: 620 + 145 = 765.
        assert_eq!(summary.taxable_income, dec!(0.00));
        assert_eq!(summary.income_tax, dec!(0.00));
        assert_eq!(summary.fica_tax, dec!(765.00));
        assert_eq!(summary.total_tax, dec!(765.00));
    }

    #[test]
    fn calculate_non_refundable_credits_subtract_in_order() {
        let mut taxpayer = Taxpayer::new();
        taxpayer.set_filing_status(FilingStatus::Single);
        salaried_monthly(&mut taxpayer, "Day job", dec!(5000.00));
        taxpayer.add_non_refundable_credit("Child care", dec!(1000.00));
        taxpayer.add_non_refundable_credit("Education", dec!(500.00));

        let summary = taxpayer.calculate();

        // 5161.50 - 1000 - 500
        assert_eq!(summary.income_tax, dec!(3661.50));
        assert_eq!(summary.total_tax, dec!(8251.50));
    }

    #[test]
    fn calculate_oversized_credit_floors_income_tax_at_zero() {
        let mut taxpayer = Taxpayer::new();
        taxpayer.set_filing_status(FilingStatus::Single);
        salaried_monthly(&mut taxpayer, "Day job", dec!(5000.00));
        taxpayer.add_non_refundable_credit("Big credit", dec!(6000.00));
        taxpayer.add_non_refundable_credit("Small credit", dec!(100.00));

        let summary = taxpayer.calculate();

        // The floor applies after every subtraction, so the second
        // credit subtracts from zero and stays there.
        assert_eq!(summary.income_tax, dec!(0.00));
        assert_eq!(summary.total_tax, dec!(4590.00));
    }

    #[test]
    fn calculate_refundable_credits_reduce_the_total() {
        let mut taxpayer = Taxpayer::new();
        taxpayer.set_filing_status(FilingStatus::Single);
        salaried_monthly(&mut taxpayer, "Day job", dec!(5000.00));
        taxpayer.add_refundable_credit("EITC", dec!(2000.00));

        let summary = taxpayer.calculate();

        assert_eq!(summary.refundable_credits, dec!(2000.00));
        assert_eq!(summary.total_tax, dec!(7751.50));
    }

    #[test]
    fn calculate_refundable_credits_can_drive_the_total_negative() {
        let mut taxpayer = Taxpayer::new();
        taxpayer.set_filing_status(FilingStatus::Single);
        taxpayer.add_refundable_credit("EITC", dec!(1000.00));

        let summary = taxpayer.calculate();

        assert_eq!(summary.total_tax, dec!(-1000.00));
    }
}
