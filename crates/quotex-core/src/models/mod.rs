//! Data models for extracted quote data.

pub mod quote;

pub use quote::{ItemCollection, LineItem};
