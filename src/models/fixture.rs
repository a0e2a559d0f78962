//! Layout fixture value type and its collaborator seams.

use crate::models::table::KeyTable;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference to a companion layout by stable name.
///
/// Companion symbol layouts are supplied by the surrounding test framework;
/// this crate only records which ones a fixture pairs with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayoutId(String);

impl LayoutId {
    /// Creates a layout reference from a stable name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The referenced layout's name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LayoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// External collaborator supplying locale/variant-specific behavior.
///
/// The fixture stores its customizer but never interprets it; resolution of
/// placeholder slots and locale-dependent glyphs happens in the consuming
/// harness.
pub trait LayoutCustomizer {
    /// Locale tag this customizer represents (e.g., "de_CH").
    fn locale(&self) -> &str;
}

/// Customizer with no locale-specific behavior, for tests and the CLI.
#[derive(Debug, Clone, Default)]
pub struct DefaultCustomizer;

impl LayoutCustomizer for DefaultCustomizer {
    fn locale(&self) -> &str {
        ""
    }
}

/// Expected-key fixture for one keyboard layout variant.
///
/// Holds the variant's stable name, its alphabetic key table, and references
/// to the unshifted and shifted companion symbol layouts. Constructed once at
/// fixture-definition time and read-only afterwards.
#[derive(Serialize)]
pub struct LayoutFixture {
    name: String,
    alphabet: KeyTable,
    symbols: LayoutId,
    symbols_shifted: LayoutId,
    #[serde(skip)]
    customizer: Box<dyn LayoutCustomizer>,
}

impl LayoutFixture {
    /// Assembles a fixture from its row data and companion references.
    pub fn new(
        name: impl Into<String>,
        customizer: Box<dyn LayoutCustomizer>,
        alphabet: KeyTable,
        symbols: LayoutId,
        symbols_shifted: LayoutId,
    ) -> Self {
        Self {
            name: name.into(),
            alphabet,
            symbols,
            symbols_shifted,
            customizer,
        }
    }

    /// Stable identifier for this layout variant.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Alphabetic key table shared across form factors.
    ///
    /// The form-factor parameter is accepted for variants that diverge
    /// between phone and tablet; the built-in variants return the same
    /// table for either value.
    #[must_use]
    pub fn common_alphabet_layout(&self, _is_phone: bool) -> &KeyTable {
        &self.alphabet
    }

    /// Companion layout supplying the unshifted symbol keys.
    #[must_use]
    pub fn symbols_layout(&self) -> &LayoutId {
        &self.symbols
    }

    /// Companion layout supplying the shifted symbol keys.
    #[must_use]
    pub fn symbols_shifted_layout(&self) -> &LayoutId {
        &self.symbols_shifted
    }

    /// The customizer this fixture was built with.
    #[must_use]
    pub fn customizer(&self) -> &dyn LayoutCustomizer {
        self.customizer.as_ref()
    }
}

impl fmt::Debug for LayoutFixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutFixture")
            .field("name", &self.name)
            .field("alphabet", &self.alphabet)
            .field("symbols", &self.symbols)
            .field("symbols_shifted", &self.symbols_shifted)
            .field("locale", &self.customizer.locale())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::KeyTableBuilder;
    use crate::models::table::RowGeometry;

    fn tiny_table() -> KeyTable {
        KeyTableBuilder::new(RowGeometry::new(vec![1]))
            .set_labels_of_row(1, ["a"])
            .build()
            .unwrap()
    }

    #[test]
    fn test_accessors() {
        let fixture = LayoutFixture::new(
            "tiny",
            Box::new(DefaultCustomizer),
            tiny_table(),
            LayoutId::new("symbols"),
            LayoutId::new("symbols_shifted"),
        );
        assert_eq!(fixture.name(), "tiny");
        assert_eq!(fixture.symbols_layout().as_str(), "symbols");
        assert_eq!(fixture.symbols_shifted_layout().as_str(), "symbols_shifted");
        assert_eq!(fixture.customizer().locale(), "");
    }

    #[test]
    fn test_form_factor_parameter_is_ignored() {
        let fixture = LayoutFixture::new(
            "tiny",
            Box::new(DefaultCustomizer),
            tiny_table(),
            LayoutId::new("symbols"),
            LayoutId::new("symbols_shifted"),
        );
        assert_eq!(
            fixture.common_alphabet_layout(true),
            fixture.common_alphabet_layout(false)
        );
    }
}
