//! Line-item models for extracted sales quotes.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// A single line item extracted from a quote.
///
/// Quantity and unit price stay as strings to preserve the source's
/// formatting (decimal commas, thousand separators) for downstream
/// systems that expect the original textual representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    /// Item code (SKU-like identifier).
    #[serde(rename = "Item")]
    pub item: String,

    /// Item description.
    #[serde(rename = "Description")]
    pub description: String,

    /// Quantity as it appeared in the document.
    #[serde(rename = "Quantity")]
    pub quantity: String,

    /// Unit price as it appeared in the document (comma-decimal).
    #[serde(rename = "UnitPrice")]
    pub unit_price: String,
}

/// Ordered collection of line items.
///
/// Serializes to a JSON object keyed `"Item1".."ItemN"` in extraction
/// order. Keys are re-indexed from 1; any ordinal present in the source
/// document is discarded. No deduplication.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemCollection {
    items: Vec<LineItem>,
}

impl ItemCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item; it gets the next sequential key on serialization.
    pub fn push(&mut self, item: LineItem) {
        self.items.push(item);
    }

    /// Number of items in the collection.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate items in extraction order.
    pub fn iter(&self) -> impl Iterator<Item = &LineItem> {
        self.items.iter()
    }
}

impl From<Vec<LineItem>> for ItemCollection {
    fn from(items: Vec<LineItem>) -> Self {
        Self { items }
    }
}

impl Serialize for ItemCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.items.len()))?;
        for (idx, item) in self.items.iter().enumerate() {
            map.serialize_entry(&format!("Item{}", idx + 1), item)?;
        }
        map.end()
    }
}
