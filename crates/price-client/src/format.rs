//! Reply formatting for price lookups.

use crate::client::QuoteTable;

pub const NO_PRICES_FOUND: &str = "No prices found.";

/// One `"<ID>: $<price> USD"` line per requested id present in `table`, in request order.
///
/// Ids missing from the table, or quoted without a `usd` value, are skipped.
/// Returns [`NO_PRICES_FOUND`] when no line was produced.
pub fn format_prices(ids: &[String], table: &QuoteTable) -> String {
    let lines: Vec<String> = ids
        .iter()
        .map(|id| id.to_lowercase())
        .filter_map(|id| {
            let price = table.get(&id)?.usd?;
            Some(format!("{}: ${:.2} USD", id.to_uppercase(), price))
        })
        .collect();

    if lines.is_empty() {
        NO_PRICES_FOUND.to_string()
    } else {
        lines.join("\n")
    }
}
