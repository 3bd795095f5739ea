// Cattle feedlot margin analysis, basic and extended variants.
//
// Live weight is priced per arroba (15 kg), so weights divide by
// KG_PER_ARROBA before meeting a price. The flat per-head cost (basic) and the
// daily holding cost (extended) are optional fields: unparsable input there
// means "absent" and defaults to zero, unlike the required fields below.
use shared::models::{FeedlotResult, LivestockResult, KG_PER_ARROBA};

#[derive(Debug, Clone, Copy)]
pub struct LivestockInput {
    /// Heads in the lot; floored, clamped to >= 1.
    pub head_count: f64,
    /// Entry live weight per head, kg.
    pub entry_weight: f64,
    /// Exit live weight per head, kg.
    pub exit_weight: f64,
    pub buy_price_per_arroba: f64,
    pub sell_price_per_arroba: f64,
    /// Optional flat cost per head (freight, vaccines...). NaN defaults to 0.
    pub flat_cost_per_head: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct FeedlotInput {
    pub livestock: LivestockInput,
    /// Days in the feedlot; floored, clamped to >= 0. NaN defaults to 0.
    pub days_on_feed: f64,
    /// Optional holding cost per head per day. NaN defaults to 0.
    pub daily_cost: f64,
}

fn required_fields_finite(input: &LivestockInput) -> bool {
    input.head_count.is_finite()
        && input.entry_weight.is_finite()
        && input.exit_weight.is_finite()
        && input.buy_price_per_arroba.is_finite()
        && input.sell_price_per_arroba.is_finite()
}

fn optional(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

pub fn calculate(input: LivestockInput) -> Option<LivestockResult> {
    if !required_fields_finite(&input) {
        return None;
    }

    let head_count = input.head_count.floor().max(1.0) as u32;
    let entry_arrobas = input.entry_weight / KG_PER_ARROBA;
    let exit_arrobas = input.exit_weight / KG_PER_ARROBA;

    let per_head_cost =
        entry_arrobas * input.buy_price_per_arroba + optional(input.flat_cost_per_head);
    let per_head_revenue = exit_arrobas * input.sell_price_per_arroba;
    let per_head_profit = per_head_revenue - per_head_cost;

    let heads = head_count as f64;
    Some(LivestockResult {
        head_count,
        entry_weight: input.entry_weight,
        exit_weight: input.exit_weight,
        buy_price_per_arroba: input.buy_price_per_arroba,
        sell_price_per_arroba: input.sell_price_per_arroba,
        per_head_cost,
        per_head_revenue,
        per_head_profit,
        total_cost: per_head_cost * heads,
        total_revenue: per_head_revenue * heads,
        total_profit: per_head_profit * heads,
    })
}

pub fn calculate_feedlot(input: FeedlotInput) -> Option<FeedlotResult> {
    if !required_fields_finite(&input.livestock) {
        return None;
    }

    let base = input.livestock;
    let head_count = base.head_count.floor().max(1.0) as u32;
    let entry_arrobas = base.entry_weight / KG_PER_ARROBA;
    let exit_arrobas = base.exit_weight / KG_PER_ARROBA;

    let days_on_feed = if input.days_on_feed.is_finite() {
        input.days_on_feed.floor().max(0.0) as u32
    } else {
        0
    };
    let daily_cost = optional(input.daily_cost);

    let holding_cost = daily_cost * days_on_feed as f64;
    let per_head_cost = entry_arrobas * base.buy_price_per_arroba
        + optional(base.flat_cost_per_head)
        + holding_cost;
    let per_head_revenue = exit_arrobas * base.sell_price_per_arroba;
    let per_head_profit = per_head_revenue - per_head_cost;

    let weight_gain_kg = base.exit_weight - base.entry_weight;

    // Division by zero when the exit weight is 0 is a genuinely undefined
    // result, carried through as a non-finite value rather than defaulted.
    let break_even_price = per_head_cost / exit_arrobas;

    let heads = head_count as f64;
    Some(FeedlotResult {
        head_count,
        entry_weight: base.entry_weight,
        exit_weight: base.exit_weight,
        buy_price_per_arroba: base.buy_price_per_arroba,
        sell_price_per_arroba: base.sell_price_per_arroba,
        days_on_feed,
        daily_cost,
        weight_gain_kg,
        weight_gain_arrobas: weight_gain_kg / KG_PER_ARROBA,
        break_even_price,
        per_head_cost,
        per_head_revenue,
        per_head_profit,
        total_cost: per_head_cost * heads,
        total_revenue: per_head_revenue * heads,
        total_profit: per_head_profit * heads,
    })
}
