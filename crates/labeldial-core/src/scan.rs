//! Label scanning: recognize, extract, decide, and select.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::decision::Decision;
use crate::error::{RecognitionError, Result, SelectionError};
use crate::extract::NumberExtractor;
use crate::models::candidate::Candidate;

/// Converts a label image into plain text.
pub trait TextRecognizer {
    /// Recognize the text in the image at `image`.
    fn recognize(&self, image: &Path) -> std::result::Result<String, RecognitionError>;
}

/// Lets a human pick one of several candidates.
pub trait Selector {
    /// Choose a candidate, or `None` to dismiss.
    fn select(&self, candidates: &[Candidate]) -> std::result::Result<Option<Candidate>, SelectionError>;
}

impl<T: TextRecognizer + ?Sized> TextRecognizer for &T {
    fn recognize(&self, image: &Path) -> std::result::Result<String, RecognitionError> {
        (**self).recognize(image)
    }
}

impl<T: Selector + ?Sized> Selector for &T {
    fn select(&self, candidates: &[Candidate]) -> std::result::Result<Option<Candidate>, SelectionError> {
        (**self).select(candidates)
    }
}

/// Result of scanning one label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "candidate", rename_all = "snake_case")]
pub enum ScanOutcome {
    /// No mobile number on the label.
    NotFound,
    /// The only number on the label, applied without asking.
    Detected(Candidate),
    /// Picked by the selector among several.
    Selected(Candidate),
    /// The selector dismissed the choice.
    Dismissed,
}

impl ScanOutcome {
    /// The number to use, if any.
    pub fn number(&self) -> Option<&str> {
        match self {
            ScanOutcome::Detected(c) | ScanOutcome::Selected(c) => Some(&c.number),
            ScanOutcome::NotFound | ScanOutcome::Dismissed => None,
        }
    }
}

/// Runs the full label pipeline over a recognizer and a selector.
pub struct LabelScanner<R, S> {
    recognizer: R,
    selector: S,
    extractor: NumberExtractor,
}

impl<R: TextRecognizer, S: Selector> LabelScanner<R, S> {
    pub fn new(recognizer: R, selector: S) -> Self {
        Self {
            recognizer,
            selector,
            extractor: NumberExtractor::new(),
        }
    }

    pub fn with_extractor(mut self, extractor: NumberExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    /// Recognize the label and decide without involving the selector.
    pub fn recognize(&self, image: &Path) -> Result<Decision> {
        let text = self.recognizer.recognize(image)?;
        if text.trim().is_empty() {
            return Err(RecognitionError::EmptyText.into());
        }
        debug!("Recognized {} characters from {}", text.len(), image.display());
        Ok(self.extractor.decide(&text))
    }

    /// Scan a label image end to end.
    pub fn scan(&self, image: &Path) -> Result<ScanOutcome> {
        let outcome = match self.recognize(image)? {
            Decision::NotFound => ScanOutcome::NotFound,
            Decision::Single(candidate) => {
                info!("Detected {}", candidate.number);
                ScanOutcome::Detected(candidate)
            }
            Decision::Multiple(candidates) => {
                info!("Found {} numbers, asking for a choice", candidates.len());
                self.choose(&candidates)?
            }
        };

        if outcome == ScanOutcome::NotFound {
            warn!("No mobile number found in {}", image.display());
        }
        Ok(outcome)
    }

    fn choose(&self, candidates: &[Candidate]) -> Result<ScanOutcome> {
        match self.selector.select(candidates)? {
            None => Ok(ScanOutcome::Dismissed),
            Some(choice) => {
                let offered = candidates
                    .iter()
                    .find(|c| c.number == choice.number)
                    .ok_or_else(|| SelectionError::UnknownCandidate(choice.number.clone()))?;
                Ok(ScanOutcome::Selected(offered.clone()))
            }
        }
    }
}
