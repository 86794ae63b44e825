//! Regex-based text extraction, the fallback when no table is found.
//!
//! Two text layouts occur in quote PDFs:
//! - inline rows: code, description, quantity and price on one line,
//!   with optional continuation lines for wrapped descriptions;
//! - stacked rows: one field per line (code, description lines,
//!   quantity, unit, price, line total), the shape produced by
//!   column-wise text extraction.

use tracing::debug;

use super::patterns::{
    ANY_DIGIT, ITEM_CODE, ITEM_CODE_LINE, ITEM_ROW, LEADING_QUANTITY, NUMERIC_CELL, PRICE_JUNK,
    TABLE_END,
};
use crate::models::quote::LineItem;

/// Extract line items from raw text.
///
/// Inline rows are tried first; when none match, the stacked layout is
/// walked instead. Lines that match neither layout are ignored.
pub fn extract_text_items(text: &str) -> Vec<LineItem> {
    let items = extract_inline_rows(text);
    if !items.is_empty() {
        debug!("text extraction found {} inline rows", items.len());
        return items;
    }

    let items = extract_stacked_rows(text);
    debug!("text extraction found {} stacked rows", items.len());
    items
}

/// Scan for single-line item rows, appending continuation lines to the
/// previous item's description.
fn extract_inline_rows(text: &str) -> Vec<LineItem> {
    let mut items: Vec<LineItem> = Vec::new();
    // whether the previous line belonged to the most recent item
    let mut open = false;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            open = false;
            continue;
        }

        if let Some(caps) = ITEM_ROW.captures(line) {
            items.push(LineItem {
                item: caps[1].to_string(),
                description: caps[2].trim().to_string(),
                quantity: caps[3].to_string(),
                unit_price: caps[4].to_string(),
            });
            open = true;
            continue;
        }

        if TABLE_END.is_match(line) {
            open = false;
            continue;
        }

        // Wrapped description: no item code, not a stray numeric fragment
        if open && !ITEM_CODE.is_match(line) && !NUMERIC_CELL.is_match(line) {
            if let Some(last) = items.last_mut() {
                last.description.push(' ');
                last.description.push_str(line);
            }
            continue;
        }

        open = false;
    }

    items
}

/// Walk the stacked one-field-per-line layout.
///
/// The item region starts at the first standalone code line and ends at
/// the first summary marker. Within an item, description lines continue
/// while the raw line ends with a space; the first line without a
/// trailing space is the last description line and the next line is the
/// quantity. A standalone `O` line before a code marks an option row,
/// which is skipped.
fn extract_stacked_rows(text: &str) -> Vec<LineItem> {
    // keep the raw line alongside the trimmed one for the
    // trailing-space continuation rule
    let lines: Vec<(&str, &str)> = text
        .lines()
        .filter(|raw| !raw.trim().is_empty())
        .map(|raw| (raw.trim(), raw))
        .collect();

    let Some(start) = lines.iter().position(|(t, _)| ITEM_CODE_LINE.is_match(t)) else {
        return Vec::new();
    };

    let end = find_region_end(&lines, start);
    let mut items = Vec::new();
    let mut i = start;

    while i < end {
        let (line, _) = lines[i];
        if !ITEM_CODE_LINE.is_match(line) {
            i += 1;
            continue;
        }

        let is_option = i > 0 && lines[i - 1].0 == "O";
        let code = line.to_string();
        i += 1;
        if is_option {
            continue;
        }

        let mut description_lines: Vec<&str> = Vec::new();
        let mut quantity: Option<String> = None;

        while i < end {
            let (trimmed, raw) = lines[i];
            if ITEM_CODE_LINE.is_match(trimmed) {
                // next item; re-handled by the outer loop
                break;
            }

            description_lines.push(trimmed);
            i += 1;

            if !raw.ends_with(' ') {
                // last description line; the next line holds the quantity
                if i < end {
                    if let Some(caps) = LEADING_QUANTITY.captures(lines[i].0) {
                        quantity = Some(caps[1].to_string());
                        i += 1;
                    }
                }
                break;
            }
        }

        let Some(quantity) = quantity else { continue };
        if description_lines.is_empty() {
            continue;
        }
        let description = description_lines.join(" ");

        // unit column, when present
        if i < end && matches!(lines[i].0.to_lowercase().as_str(), "piece" | "pièce") {
            i += 1;
        }

        if i >= end {
            continue;
        }
        let unit_price = PRICE_JUNK.replace_all(lines[i].0, "").to_string();
        i += 1;

        // the line total repeats the price; skip it
        if i < end {
            i += 1;
        }

        if !ANY_DIGIT.is_match(&unit_price) {
            continue;
        }

        items.push(LineItem {
            item: code,
            description,
            quantity,
            unit_price,
        });
    }

    items
}

/// Find where the stacked item region ends.
///
/// Lines that look like item data (quantities, units, anything with a
/// number, long description text) keep the region open; a short line
/// carrying a summary marker closes it.
fn find_region_end(lines: &[(&str, &str)], start: usize) -> usize {
    for (i, (trimmed, _)) in lines.iter().enumerate().skip(start + 1) {
        if ITEM_CODE_LINE.is_match(trimmed)
            || LEADING_QUANTITY.is_match(trimmed)
            || trimmed.eq_ignore_ascii_case("piece")
            || trimmed.eq_ignore_ascii_case("pièce")
            || ANY_DIGIT.is_match(trimmed)
            || trimmed.len() > 10
        {
            continue;
        }
        if TABLE_END.is_match(trimmed) {
            debug!("stacked region ends at line {}: {}", i, trimmed);
            return i;
        }
    }
    lines.len()
}
