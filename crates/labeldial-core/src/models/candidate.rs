//! Candidate phone numbers found on a label.

use serde::{Deserialize, Serialize};

/// Who a number on the label most likely belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The parcel recipient (destinatario).
    Recipient,

    /// The parcel sender (mittente).
    Sender,

    /// No role keyword near the number.
    Unknown,
}

impl Role {
    /// Label shown to the courier.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Recipient => "Destinatario",
            Role::Sender => "Mittente",
            Role::Unknown => "Sconosciuto",
        }
    }

    /// Serialized name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Recipient => "recipient",
            Role::Sender => "sender",
            Role::Unknown => "unknown",
        }
    }

    pub fn is_recipient(&self) -> bool {
        matches!(self, Role::Recipient)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated mobile number with its inferred role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Ten ASCII digits, starting with `3`.
    pub number: String,

    /// Inferred role.
    pub role: Role,

    /// Byte span of the match in the source text.
    #[serde(skip)]
    pub span: (usize, usize),
}

impl Candidate {
    pub fn new(number: impl Into<String>, role: Role) -> Self {
        Self {
            number: number.into(),
            role,
            span: (0, 0),
        }
    }

    pub fn with_span(mut self, start: usize, end: usize) -> Self {
        self.span = (start, end);
        self
    }

    /// Whether `number` is a well-formed Italian mobile number.
    pub fn is_valid_number(number: &str) -> bool {
        number.len() == 10
            && number.starts_with('3')
            && number.bytes().all(|b| b.is_ascii_digit())
    }

    /// Format as `333 123 4567`.
    pub fn display_number(&self) -> String {
        if !Self::is_valid_number(&self.number) {
            return self.number.clone();
        }
        format!(
            "{} {} {}",
            &self.number[0..3],
            &self.number[3..6],
            &self.number[6..10]
        )
    }
}
