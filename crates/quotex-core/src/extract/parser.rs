//! Extraction method selection.

use tracing::{debug, info};

use super::{extract_table_items, extract_text_items};
use crate::models::quote::ItemCollection;

/// Which extraction strategy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtractionMethod {
    /// Table extraction only; an empty result stays empty.
    Table,
    /// Regex text extraction only.
    Text,
    /// Table extraction, falling back to text when it yields nothing.
    #[default]
    Both,
}

/// Parses quote text into an ordered item collection.
pub struct QuoteParser {
    method: ExtractionMethod,
}

impl QuoteParser {
    /// Create a parser with the default method ([`ExtractionMethod::Both`]).
    pub fn new() -> Self {
        Self {
            method: ExtractionMethod::default(),
        }
    }

    /// Set the extraction method.
    pub fn with_method(mut self, method: ExtractionMethod) -> Self {
        self.method = method;
        self
    }

    /// Extract line items from quote text.
    ///
    /// A single linear pass; zero items is a valid result, not an
    /// error. Results from the two strategies are never merged.
    pub fn parse(&self, text: &str) -> ItemCollection {
        info!(
            "parsing {} characters of quote text with method {:?}",
            text.len(),
            self.method
        );

        let items = match self.method {
            ExtractionMethod::Table => extract_table_items(text),
            ExtractionMethod::Text => extract_text_items(text),
            ExtractionMethod::Both => {
                let items = extract_table_items(text);
                if items.is_empty() {
                    debug!("no table items, falling back to text extraction");
                    extract_text_items(text)
                } else {
                    items
                }
            }
        };

        debug!("extracted {} line items", items.len());
        ItemCollection::from(items)
    }
}

impl Default for QuoteParser {
    fn default() -> Self {
        Self::new()
    }
}
