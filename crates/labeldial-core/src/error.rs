//! Error types for the labeldial-core library.

use thiserror::Error;

/// Main error type for the labeldial library.
#[derive(Error, Debug)]
pub enum LabelDialError {
    /// Text recognition error.
    #[error("recognition error: {0}")]
    Recognition(#[from] RecognitionError),

    /// Candidate selection error.
    #[error("selection error: {0}")]
    Selection(#[from] SelectionError),

    /// Action link error.
    #[error("link error: {0}")]
    Link(#[from] LinkError),

    /// Input that is not recognized text at all.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors reported by a text recognizer.
#[derive(Error, Debug)]
pub enum RecognitionError {
    /// The recognition engine failed or is unavailable.
    #[error("engine failed: {0}")]
    Engine(String),

    /// The engine ran but produced no text.
    #[error("no text recognized")]
    EmptyText,

    /// The image could not be read.
    #[error("unsupported image: {0}")]
    UnsupportedImage(String),
}

/// Errors reported by a candidate selector.
#[derive(Error, Debug)]
pub enum SelectionError {
    /// The selector returned a number that was not offered.
    #[error("selected number {0} was not among the candidates")]
    UnknownCandidate(String),

    /// The selector could not obtain a choice.
    #[error("selection aborted: {0}")]
    Aborted(String),
}

/// Errors related to building action links.
#[derive(Error, Debug)]
pub enum LinkError {
    /// The number is empty or too short to dial.
    #[error("invalid phone number: {0:?}")]
    InvalidNumber(String),

    /// No quick message exists at the requested index.
    #[error("no quick message at index {0}")]
    UnknownQuickMessage(usize),
}

/// Result type for the labeldial library.
pub type Result<T> = std::result::Result<T, LabelDialError>;
