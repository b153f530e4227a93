//! None/single/multiple decision over extracted candidates.

use serde::Serialize;

use crate::models::candidate::Candidate;

/// What the caller should do with an extraction result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "data", rename_all = "snake_case")]
pub enum Decision {
    /// No mobile number on the label.
    NotFound,

    /// Exactly one number, safe to apply without confirmation.
    Single(Candidate),

    /// Several numbers, ordered recipient-first, for a human to choose from.
    Multiple(Vec<Candidate>),
}

impl Decision {
    /// Candidates carried by this decision, in ranked order.
    pub fn candidates(&self) -> &[Candidate] {
        match self {
            Decision::NotFound => &[],
            Decision::Single(candidate) => std::slice::from_ref(candidate),
            Decision::Multiple(candidates) => candidates,
        }
    }

    pub fn is_found(&self) -> bool {
        !matches!(self, Decision::NotFound)
    }

    pub fn needs_selection(&self) -> bool {
        matches!(self, Decision::Multiple(_))
    }
}

impl From<Vec<Candidate>> for Decision {
    fn from(mut candidates: Vec<Candidate>) -> Self {
        match candidates.len() {
            0 => Decision::NotFound,
            1 => Decision::Single(candidates.remove(0)),
            _ => Decision::Multiple(candidates),
        }
    }
}
