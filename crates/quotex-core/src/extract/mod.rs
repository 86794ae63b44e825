//! Line-item extraction from quote text.
//!
//! Two extraction strategies over the extracted PDF text: table-layout
//! reconstruction (header detection + positional cells) and a line-wise
//! regex fallback. [`QuoteParser`] selects between them.

mod parser;
pub mod patterns;
mod table;
mod text;

pub use parser::{ExtractionMethod, QuoteParser};
pub use table::extract_table_items;
pub use text::extract_text_items;
