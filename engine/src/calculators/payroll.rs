// Payroll withholding: INSS social security and IRRF income tax.
//
// The two schedules are deliberately different algorithms and must stay that
// way: INSS accumulates marginal slices tier by tier, while IRRF looks up the
// single tier the base falls under and applies its rate minus a fixed
// deduction. They share only the ordered-tier table shape.
use shared::models::PayrollResult;

/// INSS tiers for 2024: (ceiling, marginal rate), ascending.
pub const INSS_TIERS: [(f64, f64); 4] = [
    (1412.00, 0.075),
    (2666.68, 0.09),
    (4000.03, 0.12),
    (7786.02, 0.14),
];

/// IRRF table for 2024: (ceiling, rate, fixed deduction), ascending. The top
/// tier is unbounded.
pub const IRRF_TIERS: [(f64, f64, f64); 5] = [
    (2259.20, 0.0, 0.0),
    (2826.65, 0.075, 169.44),
    (3751.05, 0.15, 381.44),
    (4664.68, 0.225, 662.77),
    (f64::INFINITY, 0.275, 896.00),
];

/// Monthly IRRF deduction per declared dependent, 2024.
pub const DEPENDENT_DEDUCTION: f64 = 189.59;

#[derive(Debug, Clone, Copy)]
pub struct PayrollInput {
    pub gross_pay: f64,
    /// Number of dependents. NaN (blank field) defaults to 0; floored,
    /// clamped to >= 0.
    pub dependents: f64,
}

/// Cumulative marginal contribution over the INSS tiers.
///
/// There is no explicit ceiling branch: once the base is exhausted, every
/// later slice is zero or negative and adds nothing, so the contribution for
/// any gross above the top ceiling equals the full marginal total on that
/// ceiling. The original implementation capped only by this construction;
/// reproduced as-is rather than adding a separate cap step.
pub fn social_security(gross_pay: f64) -> f64 {
    let mut total = 0.0;
    let mut previous_ceiling = 0.0;
    for &(ceiling, rate) in INSS_TIERS.iter() {
        let slice = gross_pay.min(ceiling) - previous_ceiling;
        if slice > 0.0 {
            total += slice * rate;
        }
        previous_ceiling = ceiling;
    }
    total
}

/// Single-tier IRRF lookup: the first tier whose ceiling covers the base
/// taxes the entire base at its rate, minus the tier's fixed deduction.
pub fn income_tax(tax_base: f64) -> f64 {
    for &(ceiling, rate, deduction) in IRRF_TIERS.iter() {
        if tax_base <= ceiling {
            return (tax_base * rate - deduction).max(0.0);
        }
    }
    // Unreachable: the top tier ceiling is infinite.
    0.0
}

pub fn calculate(input: PayrollInput) -> Option<PayrollResult> {
    if !input.gross_pay.is_finite() || input.gross_pay < 0.0 {
        return None;
    }

    let dependents = if input.dependents.is_finite() {
        input.dependents.floor().max(0.0) as u32
    } else {
        0
    };

    let social_security = social_security(input.gross_pay);
    // Dependents only reduce the IRRF base, never the INSS one.
    let tax_base = (input.gross_pay - social_security - dependents as f64 * DEPENDENT_DEDUCTION)
        .max(0.0);
    let income_tax = income_tax(tax_base);

    Some(PayrollResult {
        gross_pay: input.gross_pay,
        dependents,
        social_security,
        tax_base,
        income_tax,
        net_pay: input.gross_pay - social_security - income_tax,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_inss_first_tier_only() {
        assert!((social_security(1000.0) - 75.0).abs() < EPS);
    }

    #[test]
    fn test_inss_exact_at_tier_ceilings() {
        // At a ceiling the withholding is exactly the sum of completed slices.
        let first = 1412.00 * 0.075;
        assert!((social_security(1412.00) - first).abs() < EPS);

        let second = first + (2666.68 - 1412.00) * 0.09;
        assert!((social_security(2666.68) - second).abs() < EPS);

        let third = second + (4000.03 - 2666.68) * 0.12;
        assert!((social_security(4000.03) - third).abs() < EPS);

        let fourth = third + (7786.02 - 4000.03) * 0.14;
        assert!((social_security(7786.02) - fourth).abs() < EPS);
    }

    #[test]
    fn test_inss_capped_above_top_ceiling() {
        let at_ceiling = social_security(7786.02);
        assert_eq!(social_security(20000.0), at_ceiling);
        assert_eq!(social_security(1_000_000.0), at_ceiling);
    }

    #[test]
    fn test_irrf_exempt_band() {
        assert_eq!(income_tax(2000.0), 0.0);
        assert_eq!(income_tax(2259.20), 0.0);
    }

    #[test]
    fn test_irrf_is_lookup_not_marginal() {
        // The whole base is taxed at the found tier's rate minus its
        // deduction; no slicing across tiers.
        let base = 3000.0;
        assert!((income_tax(base) - (base * 0.15 - 381.44)).abs() < EPS);
    }

    #[test]
    fn test_irrf_continuous_at_exempt_boundary() {
        // The tier deductions are built so the tax is continuous: exactly at
        // the exempt ceiling the second tier's rate minus its deduction is
        // zero, and just above it the tax is barely positive (the max(0, _)
        // clamp keeps rounding from ever pushing it negative).
        assert_eq!(income_tax(2259.20), 0.0);
        let just_above = income_tax(2259.21);
        assert!(just_above >= 0.0 && just_above < 0.01);
    }

    #[test]
    fn test_irrf_top_tier_unbounded() {
        let base = 50_000.0;
        assert!((income_tax(base) - (base * 0.275 - 896.00)).abs() < EPS);
    }

    #[test]
    fn test_payroll_net_pay() {
        let result = calculate(PayrollInput {
            gross_pay: 5000.0,
            dependents: 2.0,
        })
        .unwrap();
        let inss = social_security(5000.0);
        let base = 5000.0 - inss - 2.0 * DEPENDENT_DEDUCTION;
        assert!((result.tax_base - base).abs() < EPS);
        assert!((result.income_tax - income_tax(base)).abs() < EPS);
        assert!((result.net_pay - (5000.0 - inss - result.income_tax)).abs() < EPS);
    }

    #[test]
    fn test_dependents_blank_or_negative_clamped() {
        let blank = calculate(PayrollInput {
            gross_pay: 3000.0,
            dependents: f64::NAN,
        })
        .unwrap();
        assert_eq!(blank.dependents, 0);

        let negative = calculate(PayrollInput {
            gross_pay: 3000.0,
            dependents: -2.0,
        })
        .unwrap();
        assert_eq!(negative.dependents, 0);
        assert_eq!(blank.tax_base, negative.tax_base);
    }

    #[test]
    fn test_tax_base_clamped_at_zero() {
        // Low gross with many dependents cannot drive the base negative.
        let result = calculate(PayrollInput {
            gross_pay: 1000.0,
            dependents: 10.0,
        })
        .unwrap();
        assert_eq!(result.tax_base, 0.0);
        assert_eq!(result.income_tax, 0.0);
    }

    #[test]
    fn test_negative_or_unparsable_gross_not_computable() {
        assert!(calculate(PayrollInput {
            gross_pay: -100.0,
            dependents: 0.0
        })
        .is_none());
        assert!(calculate(PayrollInput {
            gross_pay: f64::NAN,
            dependents: 0.0
        })
        .is_none());
    }
}
