//! Role classification from the text preceding a match.

use crate::models::candidate::Role;
use crate::models::config::ExtractionConfig;

/// Keywords that assign a role when found in the context window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleRule {
    pub role: Role,
    /// Lowercased keywords.
    pub keywords: Vec<String>,
}

impl RoleRule {
    pub fn new<I, S>(role: Role, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            role,
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
        }
    }

    fn matches(&self, window: &str) -> bool {
        self.keywords.iter().any(|k| window.contains(k.as_str()))
    }
}

/// Ordered role rules evaluated against a fixed-width context window.
///
/// Rules are tried in order and the first one with a keyword in the window
/// wins, so recipient rules placed first bias ambiguous windows towards the
/// recipient.
#[derive(Debug, Clone)]
pub struct RoleClassifier {
    rules: Vec<RoleRule>,
    window: usize,
}

impl RoleClassifier {
    pub fn new(rules: Vec<RoleRule>, window: usize) -> Self {
        Self { rules, window }
    }

    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new(
            vec![
                RoleRule::new(Role::Recipient, &config.recipient_keywords),
                RoleRule::new(Role::Sender, &config.sender_keywords),
            ],
            config.context_window,
        )
    }

    /// Classify the match starting at byte offset `start` of `text`.
    pub fn classify(&self, text: &str, start: usize) -> Role {
        let window = context_window(text, start, self.window);
        self.rules
            .iter()
            .find(|rule| rule.matches(&window))
            .map(|rule| rule.role)
            .unwrap_or(Role::Unknown)
    }
}

impl Default for RoleClassifier {
    fn default() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }
}

/// Lowercased text of up to `width` characters ending at byte offset `end`.
///
/// `width` counts Unicode scalar values, not UTF-16 code units, so a
/// character outside the BMP (an emoji, say) takes one slot, not two.
/// `end` must lie on a char boundary; match offsets always do.
pub fn context_window(text: &str, end: usize, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let head = text.get(..end).unwrap_or(text);
    let begin = head
        .char_indices()
        .rev()
        .nth(width - 1)
        .map(|(i, _)| i)
        .unwrap_or(0);
    head[begin..].to_lowercase()
}
