//! Row and key-table data structures.

use crate::models::key::ExpectedKey;
use serde::{Deserialize, Serialize};

/// Declared physical widths of each row, in keys.
///
/// Row numbering is 1-based and fixed by keyboard geometry; index 0 of the
/// widths vector describes row 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowGeometry {
    widths: Vec<usize>,
}

impl RowGeometry {
    /// Creates a geometry from the physical key count of each row, top row first.
    #[must_use]
    pub fn new(widths: impl Into<Vec<usize>>) -> Self {
        Self {
            widths: widths.into(),
        }
    }

    /// Number of rows in this geometry.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.widths.len()
    }

    /// Expected key count of the given 1-based row, if the row exists.
    #[must_use]
    pub fn width_of_row(&self, row: usize) -> Option<usize> {
        row.checked_sub(1).and_then(|i| self.widths.get(i)).copied()
    }
}

/// Ordered fixed-length sequence of expected keys for one physical row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    keys: Vec<ExpectedKey>,
}

impl Row {
    pub(crate) fn new(keys: Vec<ExpectedKey>) -> Self {
        Self { keys }
    }

    /// Keys of this row in position order.
    #[must_use]
    pub fn keys(&self) -> &[ExpectedKey] {
        &self.keys
    }

    /// Number of keys in this row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if the row holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Immutable rows-by-keys table of expected key content.
///
/// Built once through `KeyTableBuilder`; never mutated afterwards. Safe to
/// share across any number of concurrent readers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyTable {
    rows: Vec<Row>,
    geometry: RowGeometry,
}

impl KeyTable {
    pub(crate) fn new(rows: Vec<Row>, geometry: RowGeometry) -> Self {
        Self { rows, geometry }
    }

    /// All rows, top row first.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The given 1-based row, if it exists.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&Row> {
        row.checked_sub(1).and_then(|i| self.rows.get(i))
    }

    /// Number of rows in the table.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The declared geometry the table was validated against.
    #[must_use]
    pub fn geometry(&self) -> &RowGeometry {
        &self.geometry
    }
}
