use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;
use crate::models::PayPeriod;

/// How a job's pay is quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompensationKind {
    Salaried,
    Hourly,
}

/// One income source. Jobs have no identity beyond their list position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub description: String,
    pub kind: CompensationKind,
    /// Pay-period amount for salaried jobs, hourly rate for hourly jobs.
    pub amount: Decimal,
    pub periods_per_year: u32,
    /// Stored for every job, but only hourly income depends on it.
    pub hours_per_period: Decimal,
}

impl Job {
    pub fn new(
        description: impl Into<String>,
        kind: CompensationKind,
        amount: Decimal,
        period: PayPeriod,
        hours_per_period: Decimal,
    ) -> Self {
        Self {
            description: description.into(),
            kind,
            amount,
            periods_per_year: period.per_year(),
            hours_per_period,
        }
    }

    /// Hours assumed per pay period when none are given.
    pub fn default_hours() -> Decimal {
        Decimal::from(40)
    }

    /// Annualized gross income for this job.
    pub fn annual_income(&self) -> Decimal {
        let periods = Decimal::from(self.periods_per_year);
        let income = match self.kind {
            CompensationKind::Salaried => self.amount * periods,
            CompensationKind::Hourly => self.amount * self.hours_per_period * periods,
        };
        round_half_up(income)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn new_resolves_periods_from_the_pay_period() {
        let job = Job::new(
            "Day job",
            CompensationKind::Salaried,
            dec!(5000.00),
            PayPeriod::Monthly,
            Job::default_hours(),
        );

        assert_eq!(job.periods_per_year, 12);
    }

    #[test]
    fn annual_income_multiplies_salaried_amount_by_periods() {
        let job = Job::new(
            "Day job",
            CompensationKind::Salaried,
            dec!(5000.00),
            PayPeriod::Monthly,
            Job::default_hours(),
        );

        assert_eq!(job.annual_income(), dec!(60000.00));
    }

    #[test]
    fn annual_income_multiplies_hourly_rate_by_hours_and_periods() {
        let job = Job::new(
            "Barista",
            CompensationKind::Hourly,
            dec!(25.00),
            PayPeriod::Weekly,
            dec!(40),
        );

        // 25 × 40 × 52
        assert_eq!(job.annual_income(), dec!(52000.00));
    }

    #[test]
    fn annual_income_ignores_hours_for_salaried_jobs() {
        let job = Job::new(
            "Day job",
            CompensationKind::Salaried,
            dec!(1000.00),
            PayPeriod::Annual,
            dec!(12.5),
        );

        assert_eq!(job.annual_income(), dec!(1000.00));
    }

    #[test]
    fn annual_income_rounds_sub_cent_results() {
        let job = Job::new(
            "Tutor",
            CompensationKind::Hourly,
            dec!(10.101),
            PayPeriod::Weekly,
            dec!(7.7),
        );

        // 10.101 × 7.7 × 52 = 4044.4404
        assert_eq!(job.annual_income(), dec!(4044.44));
    }

    #[test]
    fn annual_income_rounds_half_up() {
        let job = Job::new(
            "Tutor",
            CompensationKind::Hourly,
            dec!(10.005),
            PayPeriod::Annual,
            dec!(1.5),
        );

        // 10.005 × 1.5 × 1 = 15.0075
        assert_eq!(job.annual_income(), dec!(15.01));
    }
}
