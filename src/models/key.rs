//! Expected-key data structures.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label content of one expected key.
///
/// A label is either a literal string (the glyph the key produces) or a
/// named placeholder slot whose rendered value is supplied by an external
/// locale layer. Slots carry structure, not glyphs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyLabel {
    /// Literal character or string produced by the key (e.g., "q").
    Literal(String),
    /// Named placeholder slot resolved elsewhere (e.g., "ROW1_11").
    Slot(String),
}

impl KeyLabel {
    /// Returns true if this label is a placeholder slot.
    #[must_use]
    pub const fn is_slot(&self) -> bool {
        matches!(self, Self::Slot(_))
    }

    /// Returns the slot identifier, if this label is a slot.
    #[must_use]
    pub fn slot_id(&self) -> Option<&str> {
        match self {
            Self::Slot(id) => Some(id),
            Self::Literal(_) => None,
        }
    }

    /// Returns the underlying text of the label (literal value or slot id).
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Literal(s) | Self::Slot(s) => s,
        }
    }
}

impl fmt::Display for KeyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(s) => write!(f, "{s}"),
            Self::Slot(id) => write!(f, "<{id}>"),
        }
    }
}

/// One key position's expected content: primary label plus optional
/// long-press alternates ("more keys").
///
/// # Validation
///
/// - Literal labels must be non-empty (checked by `FixtureValidator`)
/// - More-keys order is significant and preserved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedKey {
    /// Primary label shown/produced by the key
    pub label: KeyLabel,
    /// Ordered long-press alternates, empty by default
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub more_keys: Vec<String>,
}

impl ExpectedKey {
    /// Creates an expected key with a literal label and no alternates.
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: KeyLabel::Literal(label.into()),
            more_keys: Vec::new(),
        }
    }

    /// Creates an expected key occupying a named placeholder slot.
    pub fn slot(id: impl Into<String>) -> Self {
        Self {
            label: KeyLabel::Slot(id.into()),
            more_keys: Vec::new(),
        }
    }

    /// Adds one long-press alternate, preserving order.
    #[must_use]
    pub fn with_more_key(mut self, more_key: impl Into<String>) -> Self {
        self.more_keys.push(more_key.into());
        self
    }

    /// Replaces the alternates with the given ordered sequence.
    #[must_use]
    pub fn with_more_keys<I, S>(mut self, more_keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.more_keys = more_keys.into_iter().map(Into::into).collect();
        self
    }

    /// Returns true if the key has at least one long-press alternate.
    #[must_use]
    pub fn has_more_keys(&self) -> bool {
        !self.more_keys.is_empty()
    }
}
