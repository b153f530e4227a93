//! Configuration structures for the label pipeline.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{LabelDialError, Result};

/// Keywords that mark a nearby number as the recipient's.
pub const DEFAULT_RECIPIENT_KEYWORDS: &[&str] = &["destinatario", "dest.", " rcv", " a:"];

/// Keywords that mark a nearby number as the sender's.
pub const DEFAULT_SENDER_KEYWORDS: &[&str] = &["mittente", "mitt.", " da:"];

/// Main configuration for labeldial.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelDialConfig {
    /// Number extraction configuration.
    pub extraction: ExtractionConfig,

    /// Messaging and call link configuration.
    pub links: LinksConfig,

    /// Clipboard detection configuration.
    pub clipboard: ClipboardConfig,
}

/// Number extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Characters before a match searched for role keywords.
    pub context_window: usize,

    /// Recipient keywords, checked first.
    pub recipient_keywords: Vec<String>,

    /// Sender keywords.
    pub sender_keywords: Vec<String>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            context_window: 60,
            recipient_keywords: DEFAULT_RECIPIENT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            sender_keywords: DEFAULT_SENDER_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Messaging and call link configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    /// Message used when none is given.
    pub default_message: String,

    /// Base URL of the WhatsApp click-to-chat service.
    pub whatsapp_base_url: String,

    /// Shortest dialable number accepted.
    pub min_number_length: usize,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            default_message: crate::links::QUICK_MESSAGES[0].to_string(),
            whatsapp_base_url: "https://wa.me/".to_string(),
            min_number_length: 8,
        }
    }
}

/// Clipboard number detection configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    /// Fewest digits treated as a phone number.
    pub min_digits: usize,

    /// Most digits treated as a phone number.
    pub max_digits: usize,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            min_digits: 9,
            max_digits: 13,
        }
    }
}

impl LabelDialConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| LabelDialError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| LabelDialError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check values that serde cannot.
    pub fn validate(&self) -> Result<()> {
        if self.clipboard.min_digits > self.clipboard.max_digits {
            return Err(LabelDialError::Config(format!(
                "clipboard.min_digits ({}) exceeds clipboard.max_digits ({})",
                self.clipboard.min_digits, self.clipboard.max_digits
            )));
        }
        self.extraction.validate()
    }
}

impl ExtractionConfig {
    /// Reject keywords that would match every window.
    pub fn validate(&self) -> Result<()> {
        let empty = |keywords: &[String]| keywords.iter().any(|k| k.trim().is_empty());
        if empty(&self.recipient_keywords[..]) || empty(&self.sender_keywords[..]) {
            return Err(LabelDialError::Config(
                "role keywords must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_keywords() {
        let config = ExtractionConfig::default();
        assert_eq!(config.context_window, 60);
        assert_eq!(config.recipient_keywords, vec!["destinatario", "dest.", " rcv", " a:"]);
        assert_eq!(config.sender_keywords, vec!["mittente", "mitt.", " da:"]);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"extraction": {"context_window": 40}}"#).unwrap();

        let config = LabelDialConfig::from_file(&path).unwrap();
        assert_eq!(config.extraction.context_window, 40);
        assert_eq!(config.extraction.sender_keywords.len(), 3);
        assert_eq!(config.links, LinksConfig::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = LabelDialConfig::default();
        config.links.min_number_length = 10;
        config.save(&path).unwrap();

        let loaded = LabelDialConfig::from_file(&path).unwrap();
        assert_eq!(loaded.links.min_number_length, 10);
    }

    #[test]
    fn test_invalid_clipboard_range() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"clipboard": {"min_digits": 14, "max_digits": 9}}"#).unwrap();

        let err = LabelDialConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, LabelDialError::Config(_)));
    }

    #[test]
    fn test_empty_keyword_rejected() {
        let config = ExtractionConfig {
            sender_keywords: vec!["mittente".to_string(), String::new()],
            ..ExtractionConfig::default()
        };
        assert!(matches!(config.validate(), Err(LabelDialError::Config(_))));
        assert!(ExtractionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            LabelDialConfig::from_file(&path),
            Err(LabelDialError::Config(_))
        ));
    }
}
