//! PDF loading and text extraction.

mod document;

pub use document::QuotePdf;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;
