//! Pricing rules. Every function here is pure: same inputs, same outputs.
//!
//! Arithmetic saturates at `Decimal::MAX` / `Decimal::MIN` instead of
//! panicking, so every store state has a summary.

use crate::domain::model::{CostSummary, LaborLine, MaterialLine};
use rust_decimal::Decimal;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

pub fn material_line_total(unit_cost: Decimal, quantity: u32) -> Decimal {
    unit_cost.saturating_mul(Decimal::from(quantity))
}

pub fn labor_line_total(hours: Decimal, rate_per_hour: Decimal) -> Decimal {
    hours.saturating_mul(rate_per_hour)
}

/// `amount * rate / 100`. Rates are not clamped.
pub fn percent_of(amount: Decimal, rate: Decimal) -> Decimal {
    amount.saturating_mul(rate / HUNDRED)
}

/// Rolls line totals up into the seven summary values.
pub fn aggregate(
    materials: &[MaterialLine],
    labor: &[LaborLine],
    overhead_rate: Decimal,
    profit_margin: Decimal,
) -> CostSummary {
    let material_cost = sum(materials.iter().map(|m| m.total_cost));
    let labor_cost = sum(labor.iter().map(|l| l.total_cost));

    let subtotal = material_cost.saturating_add(labor_cost);
    let overhead_cost = percent_of(subtotal, overhead_rate);
    let total_cost = subtotal.saturating_add(overhead_cost);
    let profit = percent_of(total_cost, profit_margin);
    let final_price = total_cost.saturating_add(profit);

    CostSummary {
        material_cost,
        labor_cost,
        subtotal,
        overhead_cost,
        total_cost,
        profit,
        final_price,
    }
}

fn sum(values: impl Iterator<Item = Decimal>) -> Decimal {
    values.fold(Decimal::ZERO, Decimal::saturating_add)
}
