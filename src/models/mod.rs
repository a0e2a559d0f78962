//! Data models for expected-key layout fixtures.
//!
//! Models are plain immutable values, independent of the CLI and the
//! consuming test harness.

pub mod fixture;
pub mod key;
pub mod table;

// Re-export all model types
pub use fixture::{DefaultCustomizer, LayoutCustomizer, LayoutFixture, LayoutId};
pub use key::{ExpectedKey, KeyLabel};
pub use table::{KeyTable, Row, RowGeometry};
