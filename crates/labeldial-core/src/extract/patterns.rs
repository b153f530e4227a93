//! Regex patterns for label number extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Italian mobile: optional +39/0039/39 prefix, then 3xx xxx xxxx with
    // optional space/dot/hyphen separators between groups
    pub static ref MOBILE_NUMBER: Regex = Regex::new(
        r"(?:\+39|0039|39)?[\s.\-]?(3[0-9]{2})[\s.\-]?([0-9]{3})[\s.\-]?([0-9]{4})"
    ).unwrap();

    // Anything that is not an ASCII digit
    pub static ref NON_DIGIT: Regex = Regex::new(r"[^0-9]+").unwrap();
}
