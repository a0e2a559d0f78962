//! Built-in layout fixtures and name lookup.
//!
//! Each variant module exposes a `build` function taking the customizer the
//! surrounding framework supplies; this module provides the registry the CLI
//! and the test harness look fixtures up through.

pub mod qwerty;
pub mod swiss;

use crate::models::{DefaultCustomizer, LayoutCustomizer, LayoutFixture};
use anyhow::{Context, Result};

/// Name of the companion layout supplying unshifted symbol keys.
pub const SYMBOLS: &str = "symbols";
/// Name of the companion layout supplying shifted symbol keys.
pub const SYMBOLS_SHIFTED: &str = "symbols_shifted";

/// Names of all built-in layout variants, in registry order.
pub const LAYOUT_NAMES: &[&str] = &[qwerty::LAYOUT_NAME, swiss::LAYOUT_NAME];

/// Builds every built-in fixture with a default customizer.
pub fn all() -> Result<Vec<LayoutFixture>> {
    LAYOUT_NAMES
        .iter()
        .map(|name| by_name(name, Box::new(DefaultCustomizer)))
        .collect()
}

/// Builds the named fixture, if the name is a built-in variant.
pub fn by_name(name: &str, customizer: Box<dyn LayoutCustomizer>) -> Result<LayoutFixture> {
    let fixture = match name {
        qwerty::LAYOUT_NAME => qwerty::build(customizer),
        swiss::LAYOUT_NAME => swiss::build(customizer),
        _ => anyhow::bail!(
            "Unknown layout '{}' (available: {})",
            name,
            LAYOUT_NAMES.join(", ")
        ),
    };
    fixture.with_context(|| format!("Failed to build layout '{name}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_builds_every_variant() {
        let fixtures = all().unwrap();
        let names: Vec<&str> = fixtures.iter().map(LayoutFixture::name).collect();
        assert_eq!(names, LAYOUT_NAMES);
    }

    #[test]
    fn test_by_name_unknown_layout() {
        let err = by_name("azerty", Box::new(DefaultCustomizer)).unwrap_err();
        assert!(err.to_string().contains("azerty"));
        assert!(err.to_string().contains("swiss"));
    }
}
