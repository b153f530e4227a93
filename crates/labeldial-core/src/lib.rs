//! Core library for reading courier shipping labels.
//!
//! This crate provides:
//! - Italian mobile number extraction from recognized label text
//! - Recipient/sender classification from nearby keywords
//! - The none/single/multiple decision handed to a selector
//! - A label scanning pipeline over pluggable recognizer and selector traits
//! - Messaging and call link building for extracted numbers

pub mod error;
pub mod models;
pub mod extract;
pub mod decision;
pub mod scan;
pub mod links;

pub use error::{LabelDialError, Result};
pub use models::candidate::{Candidate, Role};
pub use models::config::LabelDialConfig;
pub use extract::{extract, NumberExtractor, RawMatch};
pub use decision::Decision;
pub use scan::{LabelScanner, ScanOutcome, Selector, TextRecognizer};
pub use links::{clipboard_number, format_number, quick_message, ActionLink, LinkKind, QUICK_MESSAGES};
