use serde::{Deserialize, Serialize};

// Result records produced by the calculators. All of them are immutable value
// structs built fresh per request; "not computable" is expressed by the
// calculator returning None, never by a partially filled record.

/// Live-weight pricing unit: 1 arroba = 15 kg. Fixed domain constant.
pub const KG_PER_ARROBA: f64 = 15.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestResult {
    pub principal: f64,
    pub months: u32,
    /// Monthly rate as a decimal fraction (0.02 = 2% a.m.).
    pub monthly_rate: f64,
    /// One-shot penalty surcharge as a decimal fraction.
    pub penalty_rate: f64,
    pub principal_with_penalty: f64,
    pub total_owed: f64,
    pub total_interest: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LivestockResult {
    pub head_count: u32,
    /// Entry live weight per head, in kg.
    pub entry_weight: f64,
    /// Exit live weight per head, in kg.
    pub exit_weight: f64,
    pub buy_price_per_arroba: f64,
    pub sell_price_per_arroba: f64,
    pub per_head_cost: f64,
    pub per_head_revenue: f64,
    pub per_head_profit: f64,
    pub total_cost: f64,
    pub total_revenue: f64,
    pub total_profit: f64,
}

/// Extended feedlot analysis: the basic margin plus holding costs, weight gain
/// and the break-even sell price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedlotResult {
    pub head_count: u32,
    pub entry_weight: f64,
    pub exit_weight: f64,
    pub buy_price_per_arroba: f64,
    pub sell_price_per_arroba: f64,
    pub days_on_feed: u32,
    pub daily_cost: f64,
    pub weight_gain_kg: f64,
    pub weight_gain_arrobas: f64,
    /// Sell price per arroba at which profit is zero. Non-finite when the exit
    /// weight is zero (division by zero is a genuinely undefined result and is
    /// carried as-is, not defaulted).
    pub break_even_price: f64,
    pub per_head_cost: f64,
    pub per_head_revenue: f64,
    pub per_head_profit: f64,
    pub total_cost: f64,
    pub total_revenue: f64,
    pub total_profit: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanResult {
    pub principal: f64,
    pub down_payment: f64,
    pub months: u32,
    pub monthly_rate: f64,
    pub installment: f64,
    pub total_paid: f64,
    /// Cost over the sticker price (total_paid - principal), not over the
    /// financed amount.
    pub total_interest: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollResult {
    pub gross_pay: f64,
    pub dependents: u32,
    /// INSS contribution (cumulative marginal tiers).
    pub social_security: f64,
    /// Base for the IRRF lookup, after INSS and dependent deductions.
    pub tax_base: f64,
    /// IRRF withholding (single-tier lookup, minus the tier deduction).
    pub income_tax: f64,
    pub net_pay: f64,
}
