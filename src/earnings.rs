//! Gross, tax and net earnings from worked hours.

use klakie_domain::EarningsResult;

use crate::duration::DurationCalculator;

/// Tax fraction applied when the caller does not supply one (2%).
pub const DEFAULT_TAX_DEDUCTION_PERCENT: f64 = 0.02;

/// Pure numeric transform; inputs are neither validated nor rounded.
pub struct EarningsCalculator;

impl EarningsCalculator {
    /// `tax_percent_decimal` is a fraction: pass `0.12` for 12%.
    pub fn calculate(hours: f64, hourly_rate: f64, tax_percent_decimal: f64) -> EarningsResult {
        let gross_earnings = hours * hourly_rate;
        let tax_withheld = gross_earnings * tax_percent_decimal;
        EarningsResult {
            gross_earnings,
            tax_withheld,
            net_earnings: gross_earnings - tax_withheld,
        }
    }

    pub fn calculate_with_default_tax(hours: f64, hourly_rate: f64) -> EarningsResult {
        Self::calculate(hours, hourly_rate, DEFAULT_TAX_DEDUCTION_PERCENT)
    }

    pub fn calculate_from_seconds(
        seconds: f64,
        hourly_rate: f64,
        tax_percent_decimal: f64,
    ) -> EarningsResult {
        Self::calculate(
            DurationCalculator::seconds_to_hours(seconds),
            hourly_rate,
            tax_percent_decimal,
        )
    }

    /// Converts a whole-number percentage (`12.0`) into its fraction (`0.12`).
    pub fn percent_to_decimal(whole_percent: f64) -> f64 {
        whole_percent / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculate_splits_gross_into_tax_and_net() {
        let result = EarningsCalculator::calculate(10.0, 500.0, 0.02);
        assert_eq!(
            result,
            EarningsResult {
                gross_earnings: 5000.0,
                tax_withheld: 100.0,
                net_earnings: 4900.0,
            }
        );
    }

    #[test]
    fn default_tax_is_two_percent() {
        let result = EarningsCalculator::calculate_with_default_tax(10.0, 500.0);
        assert_eq!(result.tax_withheld, 100.0);
    }

    #[test]
    fn seconds_are_converted_before_rating() {
        let result = EarningsCalculator::calculate_from_seconds(36_000.0, 500.0, 0.0);
        assert_eq!(result.gross_earnings, 5000.0);
        assert_eq!(result.net_earnings, 5000.0);
    }

    #[test]
    fn negative_inputs_propagate_unchanged() {
        let result = EarningsCalculator::calculate(-2.0, 100.0, 0.5);
        assert_eq!(result.gross_earnings, -200.0);
        assert_eq!(result.tax_withheld, -100.0);
        assert_eq!(result.net_earnings, -100.0);
    }

    #[test]
    fn whole_percent_becomes_fraction() {
        assert_eq!(EarningsCalculator::percent_to_decimal(12.0), 0.12);
        assert_eq!(EarningsCalculator::percent_to_decimal(0.0), 0.0);
    }
}
