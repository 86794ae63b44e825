//! Core library for PDF sales-quote extraction.
//!
//! This crate provides:
//! - PDF loading and text extraction (lopdf + pdf-extract)
//! - Table-layout line-item extraction with header detection
//! - Regex-based text fallback extraction
//! - JSON-ready line-item models ("Item1".."ItemN" keying)

pub mod error;
pub mod extract;
pub mod models;
pub mod pdf;

pub use error::{QuotexError, Result};
pub use extract::{ExtractionMethod, QuoteParser};
pub use models::quote::{ItemCollection, LineItem};
pub use pdf::QuotePdf;
