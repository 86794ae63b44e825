//! Table-layout extraction: header detection plus positional cells.
//!
//! The text stream carries no table geometry, so tabular regions are
//! reconstructed from line layout: a header row naming the expected
//! columns, then data rows whose cells are split on pipes, tabs, or
//! runs of spaces.

use tracing::debug;

use super::patterns::{CELL_SEPARATOR, NUMERIC_CELL, TABLE_END};
use crate::models::quote::LineItem;

/// Column positions resolved from a table header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnMap {
    item: usize,
    description: usize,
    quantity: usize,
    price: usize,
}

impl ColumnMap {
    /// Resolve column positions from header cells.
    ///
    /// A header is recognized when any cell mentions "item". Columns are
    /// then matched by case-insensitive substring; when the header is
    /// recognized but incomplete, the source column order
    /// (item, description, quantity, price) is assumed.
    fn from_header(cells: &[String]) -> Option<Self> {
        let lowered: Vec<String> = cells.iter().map(|c| c.to_lowercase()).collect();
        if !lowered.iter().any(|c| c.contains("item")) {
            return None;
        }

        let mut item = None;
        let mut description = None;
        let mut quantity = None;
        let mut price = None;

        for (col, header) in lowered.iter().enumerate() {
            if item.is_none() && (header.contains("item") || header.contains("product")) {
                item = Some(col);
            } else if description.is_none() && header.contains("description") {
                description = Some(col);
            } else if quantity.is_none() && (header.contains("quantity") || header.contains("qty"))
            {
                quantity = Some(col);
            } else if price.is_none() && (header.contains("price") || header.contains("unit")) {
                price = Some(col);
            }
        }

        match (item, description, quantity, price) {
            (Some(item), Some(description), Some(quantity), Some(price)) => Some(Self {
                item,
                description,
                quantity,
                price,
            }),
            _ if cells.len() >= 4 => Some(Self {
                item: 0,
                description: 1,
                quantity: 2,
                price: 3,
            }),
            _ => None,
        }
    }

    /// Map a data row's cells to a line item.
    ///
    /// Rows with an empty or non-numeric quantity or price are dropped;
    /// no partial items are produced.
    fn row_item(&self, cells: &[String]) -> Option<LineItem> {
        let cell = |col: usize| cells.get(col).map(String::as_str).unwrap_or("");

        let quantity = cell(self.quantity);
        let price = cell(self.price);
        if !NUMERIC_CELL.is_match(quantity) || !NUMERIC_CELL.is_match(price) {
            return None;
        }

        let item = cell(self.item);
        let description = cell(self.description);
        if item.is_empty() && description.is_empty() {
            return None;
        }

        Some(LineItem {
            item: item.to_string(),
            description: description.to_string(),
            quantity: quantity.to_string(),
            unit_price: price.to_string(),
        })
    }
}

fn split_cells(line: &str) -> Vec<String> {
    CELL_SEPARATOR
        .split(line)
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extract line items from a tabular region of the text.
///
/// Returns an empty vec (not an error) when no matching table header is
/// found; the caller decides whether to fall back to text extraction.
pub fn extract_table_items(text: &str) -> Vec<LineItem> {
    let mut items = Vec::new();
    let mut columns: Option<ColumnMap> = None;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match columns {
            None => {
                let cells = split_cells(line);
                if let Some(map) = ColumnMap::from_header(&cells) {
                    debug!("table header found: {:?}", map);
                    columns = Some(map);
                }
            }
            Some(map) => {
                if TABLE_END.is_match(line) {
                    debug!("table region ends at summary line: {}", line);
                    break;
                }
                let cells = split_cells(line);
                if let Some(item) = map.row_item(&cells) {
                    items.push(item);
                }
            }
        }
    }

    debug!("table extraction found {} items", items.len());
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const QUOTE_TABLE: &str = "\
Quotation Q-2024-118

Item      Description                        Qty    Unit Price
A103970   SAMSUNG QM85C 85-inch Display      1      1975,00
B200310   Wall mount kit                     2      149,50

Subtotal                                            2274,00
Total incl. VAT                                     2797,02
";

    #[test]
    fn test_extract_from_header_table() {
        let items = extract_table_items(QUOTE_TABLE);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].item, "A103970");
        assert_eq!(items[0].description, "SAMSUNG QM85C 85-inch Display");
        assert_eq!(items[0].quantity, "1");
        assert_eq!(items[0].unit_price, "1975,00");
        assert_eq!(items[1].item, "B200310");
    }

    #[test]
    fn test_no_header_yields_empty() {
        let text = "A103970 SAMSUNG QM85C 85-inch Display 1 1975,00";
        assert!(extract_table_items(text).is_empty());
    }

    #[test]
    fn test_summary_rows_end_the_table() {
        let text = "\
Item  Description  Qty  Unit Price
A103970  Display  1  1975,00
Subtotal  1975,00
B999999  Should not appear  1  10,00
";
        let items = extract_table_items(text);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].item, "A103970");
    }

    #[test]
    fn test_rows_with_non_numeric_fields_are_dropped() {
        let text = "\
Item  Description  Qty  Unit Price
A103970  Display  1  1975,00
B200310  Missing price  2
C300200  On request  -  call us
";
        let items = extract_table_items(text);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].item, "A103970");
    }

    #[test]
    fn test_pipe_separated_cells() {
        let text = "\
Item | Description | Quantity | Price
A103970 | SAMSUNG QM85C 85-inch Display | 1 | 1975,00
";
        let items = extract_table_items(text);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].description, "SAMSUNG QM85C 85-inch Display");
    }

    #[test]
    fn test_incomplete_header_falls_back_to_source_order() {
        let text = "\
Item no.  Name  Amount  Each
A103970  Display  1  1975,00
";
        let items = extract_table_items(text);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].description, "Display");
        assert_eq!(items[0].unit_price, "1975,00");
    }
}
