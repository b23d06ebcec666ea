//! FICA payroll tax on gross wage income.
//!
//! Employee-side FICA has three components, each computed from gross
//! income independently of deductions and credits:
//!
//! | Component | Formula |
//! |-----------|---------|
//! | Social security | min(gross, wage cap) × 6.2% |
//! | Medicare | gross × 1.45% |
//! | Additional Medicare | max(0, gross − surtax threshold) × 0.9% |
//!
//! The wage cap is the same for every filer; the surtax threshold
//! depends on filing status (see [`crate::tables`]).
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use fedtax_core::calculations::FicaCalculator;
//! use fedtax_core::models::FilingStatus;
//!
//! let calculator = FicaCalculator::for_status(Some(FilingStatus::Single));
//! let fica = calculator.calculate(dec!(300000.00));
//!
//! assert_eq!(fica.social_security_tax, dec!(10918.20));
//! assert_eq!(fica.medicare_tax, dec!(4350.00));
//! assert_eq!(fica.additional_medicare_tax, dec!(900.00));
//! assert_eq!(fica.total(), dec!(16168.20));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::calculations::common::{max, round_half_up};
use crate::models::FilingStatus;
use crate::tables;

/// Errors for FICA configurations that fail validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FicaError {
    /// The social security tax rate must be between 0 and 1.
    #[error("social security tax rate must be between 0 and 1, got {0}")]
    InvalidSocialSecurityRate(Decimal),

    /// The Medicare tax rate must be between 0 and 1.
    #[error("medicare tax rate must be between 0 and 1, got {0}")]
    InvalidMedicareRate(Decimal),

    /// The additional Medicare rate must be between 0 and 1.
    #[error("additional medicare rate must be between 0 and 1, got {0}")]
    InvalidAdditionalMedicareRate(Decimal),

    /// The social security wage maximum must be positive.
    #[error("social security wage maximum must be positive, got {0}")]
    InvalidSsWageMax(Decimal),

    /// The surtax threshold must be non-negative.
    #[error("surtax threshold must be non-negative, got {0}")]
    InvalidSurtaxThreshold(Decimal),
}

/// Rates and limits for one FICA calculation.
///
/// [`FicaConfig::for_status`] carries the compiled-in 2025 values; the
/// struct is public so tests and callers with other parameters can build
/// their own, validated through [`FicaCalculator::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FicaConfig {
    /// Maximum earnings subject to social security tax.
    pub ss_wage_max: Decimal,

    /// Employee-side social security rate, typically 6.2%.
    pub ss_tax_rate: Decimal,

    /// Employee-side Medicare rate, typically 1.45%. Applies to all
    /// gross income with no cap.
    pub medicare_tax_rate: Decimal,

    /// Additional Medicare rate on income above the surtax threshold,
    /// typically 0.9%.
    pub additional_medicare_rate: Decimal,

    /// Income level where the additional Medicare tax starts.
    pub surtax_threshold: Decimal,
}

impl FicaConfig {
    /// The 2025 parameters, with the surtax threshold resolved from the
    /// filing status (unset behaves like Single).
    pub fn for_status(status: Option<FilingStatus>) -> Self {
        Self {
            ss_wage_max: tables::ss_wage_max(),
            ss_tax_rate: tables::ss_tax_rate(),
            medicare_tax_rate: tables::medicare_tax_rate(),
            additional_medicare_rate: tables::additional_medicare_rate(),
            surtax_threshold: tables::surtax_threshold(status),
        }
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`FicaError`] if any rate is outside [0, 1], the wage
    /// maximum is not positive, or the surtax threshold is negative.
    pub fn validate(&self) -> Result<(), FicaError> {
        if self.ss_tax_rate < Decimal::ZERO || self.ss_tax_rate > Decimal::ONE {
            return Err(FicaError::InvalidSocialSecurityRate(self.ss_tax_rate));
        }
        if self.medicare_tax_rate < Decimal::ZERO || self.medicare_tax_rate > Decimal::ONE {
            return Err(FicaError::InvalidMedicareRate(self.medicare_tax_rate));
        }
        if self.additional_medicare_rate < Decimal::ZERO
            || self.additional_medicare_rate > Decimal::ONE
        {
            return Err(FicaError::InvalidAdditionalMedicareRate(
                self.additional_medicare_rate,
            ));
        }
        if self.ss_wage_max <= Decimal::ZERO {
            return Err(FicaError::InvalidSsWageMax(self.ss_wage_max));
        }
        if self.surtax_threshold < Decimal::ZERO {
            return Err(FicaError::InvalidSurtaxThreshold(self.surtax_threshold));
        }
        Ok(())
    }
}

/// The three FICA components, each rounded to whole cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FicaBreakdown {
    /// Social security tax on capped gross income.
    pub social_security_tax: Decimal,

    /// Base Medicare tax on all gross income.
    pub medicare_tax: Decimal,

    /// Surtax on gross income above the threshold; zero at or below it.
    pub additional_medicare_tax: Decimal,
}

impl FicaBreakdown {
    /// Combined FICA liability.
    pub fn total(&self) -> Decimal {
        round_half_up(self.social_security_tax + self.medicare_tax + self.additional_medicare_tax)
    }
}

/// Calculator for employee-side FICA tax.
#[derive(Debug, Clone)]
pub struct FicaCalculator {
    config: FicaConfig,
}

impl FicaCalculator {
    /// Calculator over a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FicaError`] when the configuration fails
    /// [`FicaConfig::validate`].
    pub fn new(config: FicaConfig) -> Result<Self, FicaError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Calculator with the compiled-in 2025 parameters for `status`.
    ///
    /// Infallible: the table values are known-valid.
    pub fn for_status(status: Option<FilingStatus>) -> Self {
        Self {
            config: FicaConfig::for_status(status),
        }
    }

    /// Computes all three FICA components on `gross_income`.
    ///
    /// Negative gross income is not rejected; the components are
    /// computed from the formulas as-is (and come out negative, except
    /// the surtax, which floors at zero).
    pub fn calculate(&self, gross_income: Decimal) -> FicaBreakdown {
        if gross_income < Decimal::ZERO {
            warn!(
                gross_income = %gross_income,
                "gross income is negative; FICA components will be too"
            );
        }

        FicaBreakdown {
            social_security_tax: self.social_security_tax(gross_income),
            medicare_tax: self.medicare_tax(gross_income),
            additional_medicare_tax: self.additional_medicare_tax(gross_income),
        }
    }

    /// Social security component: gross income capped at the wage
    /// maximum, times the rate.
    fn social_security_tax(&self, gross_income: Decimal) -> Decimal {
        let capped = gross_income.min(self.config.ss_wage_max);
        round_half_up(capped * self.config.ss_tax_rate)
    }

    /// Base Medicare component: all gross income times the rate, no cap.
    fn medicare_tax(&self, gross_income: Decimal) -> Decimal {
        round_half_up(gross_income * self.config.medicare_tax_rate)
    }

    /// Additional Medicare component: the excess over the surtax
    /// threshold times the rate, zero when there is no excess.
    fn additional_medicare_tax(&self, gross_income: Decimal) -> Decimal {
        let excess = max(gross_income - self.config.surtax_threshold, Decimal::ZERO);
        round_half_up(excess * self.config.additional_medicare_rate)
    }
}
