//! Compiled regex patterns for quote line-item extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Item codes in quote documents: a capital letter plus six digits
    pub static ref ITEM_CODE: Regex = Regex::new(
        r"\b[A-Z]\d{6}\b"
    ).unwrap();

    pub static ref ITEM_CODE_LINE: Regex = Regex::new(
        r"^[A-Z]\d{6}$"
    ).unwrap();

    /// Single-line item row: code, description, quantity, comma-decimal
    /// unit price. The description match is greedy, so the trailing
    /// numeric fields bind to the last numbers on the line.
    pub static ref ITEM_ROW: Regex = Regex::new(
        r"^([A-Z]\d{6})\s+(.+)\s+(\d+)\s+(\d{1,3}(?:[ .]?\d{3})*,\d{2})$"
    ).unwrap();

    /// A numeric table cell: integer or comma/dot decimal, optional
    /// thousand separators.
    pub static ref NUMERIC_CELL: Regex = Regex::new(
        r"^\d{1,3}(?:[ .]?\d{3})*(?:[.,]\d+)?$"
    ).unwrap();

    /// Leading integer of a quantity line ("1", "4 pièce", "2 pieces").
    pub static ref LEADING_QUANTITY: Regex = Regex::new(
        r"^(\d+)"
    ).unwrap();

    /// Summary markers that end the line-item region.
    pub static ref TABLE_END: Regex = Regex::new(
        r"(?i)\b(subtotal|total|delivery|vat|payment|terms)\b"
    ).unwrap();

    /// Table cell separators: pipes, tabs, or runs of 2+ spaces.
    pub static ref CELL_SEPARATOR: Regex = Regex::new(
        r"\||\t|\s{2,}"
    ).unwrap();

    /// Everything that is not part of a price (currency symbols,
    /// spaces, unit suffixes).
    pub static ref PRICE_JUNK: Regex = Regex::new(
        r"[^\d,.]"
    ).unwrap();

    /// Any digit, for validating cleaned prices.
    pub static ref ANY_DIGIT: Regex = Regex::new(
        r"\d"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_row_matches_inline_layout() {
        let caps = ITEM_ROW
            .captures("A103970 SAMSUNG QM85C 85-inch Display 1 1975,00")
            .unwrap();
        assert_eq!(&caps[1], "A103970");
        assert_eq!(&caps[2], "SAMSUNG QM85C 85-inch Display");
        assert_eq!(&caps[3], "1");
        assert_eq!(&caps[4], "1975,00");
    }

    #[test]
    fn test_item_row_greedy_description() {
        // Numbers inside the description go to the description; the
        // trailing quantity and price bind last.
        let caps = ITEM_ROW
            .captures("B200310 Mount kit 2x3m rail 2 149,50")
            .unwrap();
        assert_eq!(&caps[2], "Mount kit 2x3m rail");
        assert_eq!(&caps[3], "2");
        assert_eq!(&caps[4], "149,50");
    }

    #[test]
    fn test_item_row_rejects_missing_price() {
        assert!(!ITEM_ROW.is_match("A103970 SAMSUNG QM85C 85-inch Display 1"));
    }

    #[test]
    fn test_numeric_cell() {
        assert!(NUMERIC_CELL.is_match("1"));
        assert!(NUMERIC_CELL.is_match("1975,00"));
        assert!(NUMERIC_CELL.is_match("1 975,00"));
        assert!(NUMERIC_CELL.is_match("12.345,60"));
        assert!(!NUMERIC_CELL.is_match(""));
        assert!(!NUMERIC_CELL.is_match("piece"));
        assert!(!NUMERIC_CELL.is_match("1975,00 €"));
    }

    #[test]
    fn test_table_end_markers() {
        assert!(TABLE_END.is_match("Subtotal"));
        assert!(TABLE_END.is_match("Total incl. VAT"));
        assert!(TABLE_END.is_match("Payment terms: 30 days"));
        assert!(!TABLE_END.is_match("SAMSUNG QM85C 85-inch Display"));
    }
}
