// Compound interest with a one-shot late-payment penalty surcharge.
use shared::models::InterestResult;

#[derive(Debug, Clone, Copy)]
pub struct InterestInput {
    pub principal: f64,
    /// Monthly rate as a decimal fraction (already divided by 100).
    pub monthly_rate: f64,
    /// Penalty as a decimal fraction, applied once on the principal.
    pub penalty_rate: f64,
    /// Term in months. NaN means the field was left blank and defaults to 0;
    /// otherwise floored and clamped to >= 0.
    pub months: f64,
}

pub fn calculate(input: InterestInput) -> Option<InterestResult> {
    if !input.principal.is_finite()
        || !input.monthly_rate.is_finite()
        || !input.penalty_rate.is_finite()
    {
        return None;
    }

    let months = if input.months.is_finite() {
        input.months.floor().max(0.0) as u32
    } else {
        0
    };

    // Penalty is a multiplicative surcharge applied once, then the monthly
    // rate compounds over the term.
    let principal_with_penalty = input.principal * (1.0 + input.penalty_rate);
    let total_owed = principal_with_penalty * (1.0 + input.monthly_rate).powf(months as f64);

    Some(InterestResult {
        principal: input.principal,
        months,
        monthly_rate: input.monthly_rate,
        penalty_rate: input.penalty_rate,
        principal_with_penalty,
        total_owed,
        total_interest: total_owed - input.principal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(principal: f64, monthly_rate: f64, penalty_rate: f64, months: f64) -> InterestInput {
        InterestInput {
            principal,
            monthly_rate,
            penalty_rate,
            months,
        }
    }

    #[test]
    fn test_worked_example() {
        // 1000 at 2% a.m. with 5% penalty over 3 months.
        let result = calculate(input(1000.0, 0.02, 0.05, 3.0)).unwrap();
        assert_eq!(result.principal_with_penalty, 1050.0);
        let expected = 1050.0 * 1.02f64.powi(3);
        assert!((result.total_owed - expected).abs() < 1e-9);
        assert!((result.total_owed - 1114.2684).abs() < 1e-4);
        assert!((result.total_interest - (expected - 1000.0)).abs() < 1e-9);
    }

    #[test]
    fn test_zero_months_is_penalty_only() {
        let result = calculate(input(1000.0, 0.02, 0.05, 0.0)).unwrap();
        assert_eq!(result.total_owed, 1050.0);
        assert_eq!(result.total_interest, 50.0);
    }

    #[test]
    fn test_blank_term_defaults_to_zero() {
        let result = calculate(input(1000.0, 0.02, 0.05, f64::NAN)).unwrap();
        assert_eq!(result.months, 0);
        assert_eq!(result.total_owed, 1050.0);
    }

    #[test]
    fn test_negative_term_clamped_to_zero() {
        let result = calculate(input(1000.0, 0.02, 0.0, -4.0)).unwrap();
        assert_eq!(result.months, 0);
        assert_eq!(result.total_owed, 1000.0);
    }

    #[test]
    fn test_fractional_term_is_floored() {
        let result = calculate(input(1000.0, 0.02, 0.0, 3.9)).unwrap();
        assert_eq!(result.months, 3);
    }

    #[test]
    fn test_unparsable_required_field_not_computable() {
        assert!(calculate(input(f64::NAN, 0.02, 0.05, 3.0)).is_none());
        assert!(calculate(input(1000.0, f64::NAN, 0.05, 3.0)).is_none());
        assert!(calculate(input(1000.0, 0.02, f64::NAN, 3.0)).is_none());
    }

    #[test]
    fn test_huge_term_never_shrinks_the_debt() {
        // A term too large for an i32 exponent must not wrap into a negative
        // power; with a positive rate the debt only grows (here to infinity,
        // which the display layer renders as a placeholder).
        let result = calculate(input(1000.0, 0.02, 0.0, 9_999_999_999.0)).unwrap();
        assert!(result.total_owed >= result.principal_with_penalty);
        assert!(result.total_owed.is_infinite());
    }

    #[test]
    fn test_idempotent() {
        let a = calculate(input(1500.0, 0.013, 0.02, 7.0)).unwrap();
        let b = calculate(input(1500.0, 0.013, 0.02, 7.0)).unwrap();
        assert_eq!(a.total_owed.to_bits(), b.total_owed.to_bits());
    }
}
