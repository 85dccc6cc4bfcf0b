use crate::domain::model::CostSummary;
use rust_decimal::{Decimal, RoundingStrategy};

const LABEL_WIDTH: usize = 22;

/// `$1234.50`. Presentation only; stored values keep full precision.
pub fn format_money(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${:.2}", rounded)
}

pub fn render_summary(
    summary: &CostSummary,
    overhead_rate: Decimal,
    profit_margin: Decimal,
) -> String {
    let rows = [
        ("Materials Cost:".to_string(), summary.material_cost),
        ("Labor Cost:".to_string(), summary.labor_cost),
        ("Subtotal:".to_string(), summary.subtotal),
        (
            format!("Overhead ({}%):", overhead_rate.normalize()),
            summary.overhead_cost,
        ),
        ("Total Cost:".to_string(), summary.total_cost),
        (
            format!("Profit ({}%):", profit_margin.normalize()),
            summary.profit,
        ),
    ];

    let mut out = String::new();
    for (label, value) in rows {
        out.push_str(&format!(
            "{:<width$}{:>14}\n",
            label,
            format_money(value),
            width = LABEL_WIDTH
        ));
    }
    out.push_str(&format!("{}\n", "-".repeat(LABEL_WIDTH + 14)));
    out.push_str(&format!(
        "{:<width$}{:>14}\n",
        "Final Price:",
        format_money(summary.final_price),
        width = LABEL_WIDTH
    ));
    out
}
