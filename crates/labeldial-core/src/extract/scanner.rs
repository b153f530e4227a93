//! Non-overlapping scan of mobile-number-shaped substrings.

use regex::CaptureMatches;

use super::patterns::MOBILE_NUMBER;

/// A pattern match before validation and deduplication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMatch<'t> {
    /// Byte offset where the match starts.
    pub start: usize,
    /// Byte offset just past the match.
    pub end: usize,
    /// Matched source text, prefix and separators included.
    pub source: &'t str,
    /// The three digit groups concatenated.
    pub digits: String,
}

/// Lazy iterator over [`RawMatch`]es, left to right.
///
/// Each match consumes its span and the next search resumes right after it.
/// Call [`scan`] again to restart from the beginning.
pub struct Scanner<'t> {
    matches: CaptureMatches<'static, 't>,
}

/// Scan `text` for mobile-number-shaped substrings.
pub fn scan(text: &str) -> Scanner<'_> {
    Scanner {
        matches: MOBILE_NUMBER.captures_iter(text),
    }
}

impl<'t> Iterator for Scanner<'t> {
    type Item = RawMatch<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let caps = self.matches.next()?;
        let full = caps.get(0)?;
        Some(RawMatch {
            start: full.start(),
            end: full.end(),
            source: full.as_str(),
            digits: format!("{}{}{}", &caps[1], &caps[2], &caps[3]),
        })
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}
