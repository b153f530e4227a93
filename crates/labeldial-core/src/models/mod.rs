//! Data models for label scanning.

pub mod candidate;
pub mod config;

pub use candidate::{Candidate, Role};
pub use config::{ClipboardConfig, ExtractionConfig, LabelDialConfig, LinksConfig};
