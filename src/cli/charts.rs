//! Text rendering of the derivation queries: per-category breakdown bars and
//! the fixed 12-month series.

use crate::ledger::{CategoryTotal, MonthlyPoint};

const BAR_WIDTH: usize = 30;

fn bar(value: f64, max: f64) -> String {
    if max <= 0.0 {
        return String::new();
    }
    let filled = ((value / max) * BAR_WIDTH as f64).round() as usize;
    "#".repeat(filled.min(BAR_WIDTH))
}

/// One line per category: name, bar scaled to the largest total, amount and
/// record count.
pub fn category_breakdown(totals: &[CategoryTotal]) -> Vec<String> {
    let max = totals.iter().map(|t| t.total).fold(0.0_f64, f64::max);
    totals
        .iter()
        .map(|t| {
            format!(
                "{:<12} {:<width$} {:>10.2} ({})",
                t.category,
                bar(t.total, max),
                t.total,
                t.count,
                width = BAR_WIDTH
            )
        })
        .collect()
}

/// One line per calendar month, always twelve lines.
pub fn monthly_chart(series: &[MonthlyPoint]) -> Vec<String> {
    let max = series.iter().map(|p| p.total).fold(0.0_f64, f64::max);
    series
        .iter()
        .map(|p| {
            format!(
                "{:<4} {:<width$} {:>10.2} ({})",
                p.month,
                bar(p.total, max),
                p.total,
                p.count,
                width = BAR_WIDTH
            )
        })
        .collect()
}
