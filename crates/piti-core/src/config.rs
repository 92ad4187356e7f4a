//! Static pricing tables, injected into the engine.
//!
//! Note rates, the property-tax escrow rate, the hazard insurance
//! estimate, and the FHA MIP tiers live here rather than inside the
//! formula logic, so a regional tax rate or a repriced loan programme is
//! a config change only.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{LoanType, Money, Rate};

/// Annual FHA mortgage insurance premium tiers, keyed by loan term and
/// loan-to-value.
///
/// Threshold comparisons are strict: an LTV exactly at a threshold
/// prices in the tier below it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MipSchedule {
    /// Terms at or below this many years use the short-term tiers.
    pub short_term_cutoff_years: u32,
    /// LTV above this prices at the high tier.
    pub high_ltv_threshold: Rate,
    /// LTV above this (short terms only) prices at the mid tier.
    pub mid_ltv_threshold: Rate,
    pub short_term_high_rate: Rate,
    pub short_term_mid_rate: Rate,
    pub short_term_low_rate: Rate,
    pub long_term_high_rate: Rate,
    pub long_term_low_rate: Rate,
}

impl Default for MipSchedule {
    fn default() -> Self {
        Self {
            short_term_cutoff_years: 15,
            high_ltv_threshold: dec!(0.90),
            mid_ltv_threshold: dec!(0.78),
            short_term_high_rate: dec!(0.007),
            short_term_mid_rate: dec!(0.0035),
            short_term_low_rate: dec!(0.0015),
            long_term_high_rate: dec!(0.0055),
            long_term_low_rate: dec!(0.0050),
        }
    }
}

impl MipSchedule {
    /// Annual MIP rate for a given loan-to-value and term.
    pub fn rate_for(&self, ltv: Rate, term_years: u32) -> Rate {
        if term_years <= self.short_term_cutoff_years {
            if ltv > self.high_ltv_threshold {
                self.short_term_high_rate
            } else if ltv > self.mid_ltv_threshold {
                self.short_term_mid_rate
            } else {
                self.short_term_low_rate
            }
        } else if ltv > self.high_ltv_threshold {
            self.long_term_high_rate
        } else {
            self.long_term_low_rate
        }
    }
}

/// Pricing assumptions for a payment quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteConfig {
    /// Annual note rate for FHA loans.
    pub fha_rate_annual: Rate,
    /// Annual note rate for conventional loans.
    pub conventional_rate_annual: Rate,
    /// Annual property tax as a fraction of purchase price.
    pub property_tax_rate_annual: Rate,
    /// Flat monthly hazard insurance estimate.
    pub hazard_insurance_monthly: Money,
    /// FHA mortgage insurance tiers.
    pub mip: MipSchedule,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            fha_rate_annual: dec!(0.065),
            conventional_rate_annual: dec!(0.0725),
            property_tax_rate_annual: dec!(0.0075),
            hazard_insurance_monthly: dec!(150),
            mip: MipSchedule::default(),
        }
    }
}

impl QuoteConfig {
    /// Annual note rate for a loan programme.
    pub fn rate_for(&self, loan_type: LoanType) -> Rate {
        match loan_type {
            LoanType::Fha => self.fha_rate_annual,
            LoanType::Conventional => self.conventional_rate_annual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_mip_short_term_tiers() {
        let mip = MipSchedule::default();
        assert_eq!(mip.rate_for(dec!(0.95), 15), dec!(0.007));
        assert_eq!(mip.rate_for(dec!(0.85), 15), dec!(0.0035));
        assert_eq!(mip.rate_for(dec!(0.70), 15), dec!(0.0015));
    }

    #[test]
    fn test_mip_long_term_tiers() {
        let mip = MipSchedule::default();
        assert_eq!(mip.rate_for(dec!(0.95), 30), dec!(0.0055));
        assert_eq!(mip.rate_for(dec!(0.85), 30), dec!(0.0050));
    }

    #[test]
    fn test_mip_thresholds_are_strict() {
        // Exactly at a threshold falls into the lower tier
        let mip = MipSchedule::default();
        assert_eq!(mip.rate_for(dec!(0.90), 15), dec!(0.0035));
        assert_eq!(mip.rate_for(dec!(0.78), 15), dec!(0.0015));
        assert_eq!(mip.rate_for(dec!(0.90), 30), dec!(0.0050));
    }

    #[test]
    fn test_rate_lookup_by_loan_type() {
        let config = QuoteConfig::default();
        assert_eq!(config.rate_for(LoanType::Fha), dec!(0.065));
        assert_eq!(config.rate_for(LoanType::Conventional), dec!(0.0725));
    }
}
