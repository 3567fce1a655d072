//! Console table rendering for market snapshots.

use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use owo_colors::OwoColorize;

use super::transforms::SortKey;
use super::types::MarketEntry;

/// Render entries as a table: icon URL, name, upper-cased symbol, price to
/// two decimals, grouped 24h volume. Market cap and 24h change are sort
/// keys only and are not shown.
pub fn display_markets(entries: &[MarketEntry], sort: Option<SortKey>) {
    match sort {
        Some(key) => println!(
            "{}",
            format!("Markets (sorted by {}, descending)", key.label()).bright_blue()
        ),
        None => println!("{}", "Markets (upstream order: market cap, descending)".bright_blue()),
    }

    if entries.is_empty() {
        println!("{}", "No matching entries.".yellow());
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Name", "Symbol", "Price", "24h Volume", "Icon"]);

    for (idx, entry) in entries.iter().enumerate() {
        table.add_row(vec![
            Cell::new(idx + 1),
            Cell::new(&entry.name),
            Cell::new(entry.symbol.to_uppercase()),
            Cell::new(format_price(entry.current_price)),
            Cell::new(format_grouped(entry.total_volume)),
            Cell::new(&entry.image),
        ]);
    }

    println!("{table}");
    println!(
        "{}",
        format!("{} entries", entries.len()).bright_black()
    );
}

/// Price to two decimal places with a dollar sign.
pub fn format_price(value: f64) -> String {
    format!("${:.2}", value)
}

/// Whole-number thousands grouping, e.g. 35294806882 -> "35,294,806,882".
pub fn format_grouped(value: f64) -> String {
    let negative = value < 0.0;
    let whole = value.abs().trunc() as u64;
    let digits = whole.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_two_decimals() {
        assert_eq!(format_price(64023.171), "$64023.17");
        assert_eq!(format_price(0.5), "$0.50");
        assert_eq!(format_price(0.0), "$0.00");
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(0.0), "0");
        assert_eq!(format_grouped(999.0), "999");
        assert_eq!(format_grouped(1000.0), "1,000");
        assert_eq!(format_grouped(35294806882.9), "35,294,806,882");
        assert_eq!(format_grouped(-1234567.0), "-1,234,567");
    }
}
