// Fixed-installment loan (annuity formula) with a down payment.
use shared::models::LoanResult;

#[derive(Debug, Clone, Copy)]
pub struct LoanInput {
    /// Sticker price of the financed good.
    pub principal: f64,
    pub down_payment: f64,
    /// Monthly rate as a decimal fraction.
    pub monthly_rate: f64,
    /// Term in months; floored, clamped to >= 1 (a zero term would divide by
    /// zero in the zero-rate branch).
    pub months: f64,
}

pub fn calculate(input: LoanInput) -> Option<LoanResult> {
    if !input.principal.is_finite()
        || !input.down_payment.is_finite()
        || !input.monthly_rate.is_finite()
    {
        return None;
    }

    let months = if input.months.is_finite() {
        input.months.floor().max(1.0) as u32
    } else {
        1
    };
    let n = months as f64;

    let financed = (input.principal - input.down_payment).max(0.0);
    let i = input.monthly_rate;

    // The annuity formula is 0/0 at i = 0, so that case is pure division.
    let installment = if i == 0.0 {
        financed / n
    } else {
        let factor = (1.0 + i).powf(n);
        financed * i * factor / (factor - 1.0)
    };

    let total_paid = installment * n + input.down_payment;
    Some(LoanResult {
        principal: input.principal,
        down_payment: input.down_payment,
        months,
        monthly_rate: i,
        installment,
        total_paid,
        // Interest is measured against the sticker price, not the financed
        // amount, so the down payment cancels out of total_paid.
        total_interest: total_paid - input.principal,
    })
}
