//! Causes, effects and things to avoid for a parameter.

use serde::Serialize;

/// Kind of a parameter-details row, from its `type` column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailKind {
    Cause,
    Effect,
    Avoid,
}

impl DetailKind {
    /// Exact match on the catalog's lower-case labels; anything else is ignored
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "cause" => Some(Self::Cause),
            "effect" => Some(Self::Effect),
            "avoid" => Some(Self::Avoid),
            _ => None,
        }
    }
}

/// Narrative details about one parameter, in source order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParameterDetails {
    pub causes: Vec<String>,
    pub effects: Vec<String>,
    pub avoids: Vec<String>,
}

impl ParameterDetails {
    pub fn push(&mut self, kind: DetailKind, text: String) {
        match kind {
            DetailKind::Cause => self.causes.push(text),
            DetailKind::Effect => self.effects.push(text),
            DetailKind::Avoid => self.avoids.push(text),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.causes.is_empty() && self.effects.is_empty() && self.avoids.is_empty()
    }
}
