//! Mobile number extraction from recognized label text.

mod context;
pub mod patterns;
mod scanner;

pub use context::{context_window, RoleClassifier, RoleRule};
pub use scanner::{scan, RawMatch, Scanner};

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::decision::Decision;
use crate::error::Result;
use crate::models::candidate::Candidate;
use crate::models::config::ExtractionConfig;

/// Extracts Italian mobile numbers and ranks them recipient-first.
#[derive(Debug, Clone, Default)]
pub struct NumberExtractor {
    classifier: RoleClassifier,
}

impl NumberExtractor {
    /// Create an extractor with the default keywords and a 60-character window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor from configuration.
    ///
    /// Fails when a role keyword is empty, since it would match every window.
    pub fn from_config(config: &ExtractionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            classifier: RoleClassifier::from_config(config),
        })
    }

    /// Extract every distinct mobile number, recipients first.
    ///
    /// Never fails: text without numbers yields an empty list.
    pub fn extract_all(&self, text: &str) -> Vec<Candidate> {
        let mut seen = HashSet::new();
        let mut candidates = Vec::new();

        for raw in scan(text) {
            if !Candidate::is_valid_number(&raw.digits) {
                trace!("Dropping non-mobile match {:?}", raw.source);
                continue;
            }
            if !seen.insert(raw.digits.clone()) {
                trace!("Skipping duplicate {}", raw.digits);
                continue;
            }

            let role = self.classifier.classify(text, raw.start);
            debug!("Found {} at {}..{} ({:?})", raw.digits, raw.start, raw.end, role);
            candidates.push(Candidate::new(raw.digits, role).with_span(raw.start, raw.end));
        }

        // Vec::sort_by_key is stable
        candidates.sort_by_key(|c| !c.role.is_recipient());
        candidates
    }

    /// Extract the best candidate, if any.
    pub fn extract(&self, text: &str) -> Option<Candidate> {
        self.extract_all(text).into_iter().next()
    }

    /// Extract and classify into a none/single/multiple decision.
    pub fn decide(&self, text: &str) -> Decision {
        Decision::from(self.extract_all(text))
    }
}

/// Extract candidates from text with the default extractor.
pub fn extract(text: &str) -> Vec<Candidate> {
    NumberExtractor::new().extract_all(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LabelDialError;
    use crate::models::candidate::Role;
    use pretty_assertions::assert_eq;

    fn pairs(candidates: &[Candidate]) -> Vec<(&str, Role)> {
        candidates.iter().map(|c| (c.number.as_str(), c.role)).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(extract("").is_empty());
    }

    #[test]
    fn test_no_digits() {
        assert!(extract("Ciao buongiorno").is_empty());
    }

    #[test]
    fn test_single_recipient() {
        let result = extract("Destinatario: 333 123 4567");
        assert_eq!(pairs(&result), vec![("3331234567", Role::Recipient)]);
    }

    #[test]
    fn test_recipient_sorted_first() {
        let result = extract("Mittente: 340 111 2222. Destinatario: 347 888 9999");
        assert_eq!(
            pairs(&result),
            vec![("3478889999", Role::Recipient), ("3401112222", Role::Sender)]
        );
    }

    #[test]
    fn test_deduplication_keeps_first_role() {
        let text = "Mitt. 333-123-4567 ... Destinatario 3331234567";
        let result = extract(text);
        assert_eq!(pairs(&result), vec![("3331234567", Role::Sender)]);
        assert_eq!(result[0].span.0, text.find(" 333").unwrap());
    }

    #[test]
    fn test_deduplication_plain() {
        assert_eq!(extract("333-123-4567 ... 3331234567").len(), 1);
    }

    #[test]
    fn test_prefix_normalization() {
        let expected = vec![("3331234567", Role::Unknown)];
        assert_eq!(pairs(&extract("+39 333 123 4567")), expected);
        assert_eq!(pairs(&extract("0039 3331234567")), expected);
        assert_eq!(pairs(&extract("3331234567")), expected);
        assert_eq!(pairs(&extract("39.333.123.4567")), expected);
    }

    #[test]
    fn test_landline_rejected() {
        assert!(extract("Ufficio: 02 8765 4321").is_empty());
        let result = extract("Tel. 06 1234 5678, cell. 320 555 0101");
        assert_eq!(pairs(&result), vec![("3205550101", Role::Unknown)]);
    }

    #[test]
    fn test_idempotent() {
        let text = "Da: Rossi 340 111 2222\nA: Bianchi 347 888 9999\n333 000 1111";
        let extractor = NumberExtractor::new();
        assert_eq!(extractor.extract_all(text), extractor.extract_all(text));
    }

    #[test]
    fn test_keyword_outside_window() {
        let text = format!("Destinatario:{} 3331234567", "x".repeat(70));
        assert_eq!(pairs(&extract(&text)), vec![("3331234567", Role::Unknown)]);
    }

    #[test]
    fn test_closer_sender_keyword_wins_when_recipient_out_of_window() {
        let text = format!("Destinatario:{} mittente 3331234567", "x".repeat(70));
        assert_eq!(pairs(&extract(&text)), vec![("3331234567", Role::Sender)]);
    }

    #[test]
    fn test_keyword_just_inside_window() {
        // the match starts at the separator space, so the window is the 60
        // characters ending at "x"
        let text = format!("destinatario{} 3331234567", "x".repeat(48));
        assert_eq!(pairs(&extract(&text)), vec![("3331234567", Role::Recipient)]);

        let text = format!("destinatario{} 3331234567", "x".repeat(49));
        assert_eq!(pairs(&extract(&text)), vec![("3331234567", Role::Unknown)]);
    }

    #[test]
    fn test_multiline_label() {
        let text = "BRT Corriere Espresso\n\
                    MITTENTE: Shop Srl\n\
                    Via Roma 1, Milano\n\
                    Tel: +39 02 1234567 / 345 678 9012\n\
                    DESTINATARIO: Mario Rossi\n\
                    Via Verdi 5, Torino\n\
                    Cell 338-765-4321";
        let result = extract(text);
        assert_eq!(
            pairs(&result),
            vec![("3387654321", Role::Recipient), ("3456789012", Role::Sender)]
        );
    }

    #[test]
    fn test_custom_window() {
        let config = ExtractionConfig {
            context_window: 5,
            ..ExtractionConfig::default()
        };
        let extractor = NumberExtractor::from_config(&config).unwrap();
        let result = extractor.extract_all("Destinatario: Mario 333 123 4567");
        assert_eq!(pairs(&result), vec![("3331234567", Role::Unknown)]);
    }

    #[test]
    fn test_empty_keyword_rejected() {
        let config = ExtractionConfig {
            recipient_keywords: vec![String::new()],
            ..ExtractionConfig::default()
        };
        assert!(matches!(
            NumberExtractor::from_config(&config),
            Err(LabelDialError::Config(_))
        ));
    }

    #[test]
    fn test_order_within_role_groups() {
        let fill = "x".repeat(70);
        let text = format!(
            "Destinatario 347 000 0001 {fill} mittente 340 000 0002 {fill} nota 320 000 0004 \
             {fill} dest. 351 000 0005"
        );
        let result = extract(&text);
        assert_eq!(
            pairs(&result),
            vec![
                ("3470000001", Role::Recipient),
                ("3510000005", Role::Recipient),
                ("3400000002", Role::Sender),
                ("3200000004", Role::Unknown),
            ]
        );
    }

    #[test]
    fn test_extract_best() {
        let extractor = NumberExtractor::new();
        let best = extractor.extract("333 000 1111 Dest. 347 888 9999").unwrap();
        assert_eq!(best.number, "3478889999");
        assert!(extractor.extract("nessun numero").is_none());
    }
}
