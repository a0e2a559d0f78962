//! Fail-fast assembly of expected-key tables.
//!
//! Fixtures declare their rows through `KeyTableBuilder`; the consuming
//! `build()` validates every row against the declared geometry so authoring
//! mistakes surface at construction time, not in the middle of a harness run.

use crate::models::key::ExpectedKey;
use crate::models::table::{KeyTable, Row, RowGeometry};
use anyhow::Result;

/// Shorthand for an expected key with a literal label and ordered alternates.
pub fn key<I, S>(label: impl Into<String>, more_keys: I) -> ExpectedKey
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ExpectedKey::labeled(label).with_more_keys(more_keys)
}

/// Shorthand for an expected key with a literal label and no alternates.
pub fn label_key(label: impl Into<String>) -> ExpectedKey {
    ExpectedKey::labeled(label)
}

/// Shorthand for an expected key occupying a named placeholder slot.
pub fn slot(id: impl Into<String>) -> ExpectedKey {
    ExpectedKey::slot(id)
}

/// Builder for an immutable `KeyTable`.
///
/// Rows are assigned by 1-based index and may be declared in any order.
/// `build()` consumes the builder, so reuse after finalization is impossible;
/// assigning the same row twice is rejected immediately.
#[derive(Debug)]
pub struct KeyTableBuilder {
    geometry: RowGeometry,
    rows: Vec<Option<Vec<ExpectedKey>>>,
    error: Option<anyhow::Error>,
}

impl KeyTableBuilder {
    /// Creates a builder for a table with the given row geometry.
    #[must_use]
    pub fn new(geometry: RowGeometry) -> Self {
        let rows = vec![None; geometry.row_count()];
        Self {
            geometry,
            rows,
            error: None,
        }
    }

    /// Assigns the ordered key sequence of the given 1-based row.
    #[must_use]
    pub fn set_keys_of_row<I>(mut self, row: usize, keys: I) -> Self
    where
        I: IntoIterator<Item = ExpectedKey>,
    {
        if self.error.is_some() {
            return self;
        }

        let Some(index) = row.checked_sub(1).filter(|i| *i < self.rows.len()) else {
            self.error = Some(anyhow::anyhow!(
                "Row {} is outside the declared geometry of {} rows",
                row,
                self.geometry.row_count()
            ));
            return self;
        };

        if self.rows[index].is_some() {
            self.error = Some(anyhow::anyhow!("Row {row} was assigned twice"));
            return self;
        }

        self.rows[index] = Some(keys.into_iter().collect());
        self
    }

    /// Assigns a row from bare labels, equivalent to keys with no alternates.
    #[must_use]
    pub fn set_labels_of_row<I, S>(self, row: usize, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_keys_of_row(row, labels.into_iter().map(label_key))
    }

    /// Finalizes the table, validating each row's width against the geometry.
    pub fn build(self) -> Result<KeyTable> {
        if let Some(error) = self.error {
            return Err(error);
        }

        let mut rows = Vec::with_capacity(self.rows.len());
        for (index, keys) in self.rows.into_iter().enumerate() {
            let row = index + 1;
            let expected = self
                .geometry
                .width_of_row(row)
                .unwrap_or_default();

            let Some(keys) = keys else {
                anyhow::bail!("Row {row} was never assigned (expected {expected} keys)");
            };

            if keys.len() != expected {
                anyhow::bail!(
                    "Row {} has {} keys but the geometry declares {}",
                    row,
                    keys.len(),
                    expected
                );
            }

            rows.push(Row::new(keys));
        }

        Ok(KeyTable::new(rows, self.geometry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_valid_table() {
        let table = KeyTableBuilder::new(RowGeometry::new(vec![2, 3]))
            .set_keys_of_row(1, [key("a", ["1"]), label_key("b")])
            .set_labels_of_row(2, ["c", "d", "e"])
            .build()
            .unwrap();

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.row(1).unwrap().keys()[0].more_keys, vec!["1"]);
        assert!(!table.row(2).unwrap().keys()[0].has_more_keys());
    }

    #[test]
    fn test_rows_may_be_declared_out_of_order() {
        let table = KeyTableBuilder::new(RowGeometry::new(vec![1, 1]))
            .set_labels_of_row(2, ["b"])
            .set_labels_of_row(1, ["a"])
            .build()
            .unwrap();
        assert_eq!(table.row(1).unwrap().keys()[0], label_key("a"));
    }

    #[test]
    fn test_width_mismatch_is_rejected() {
        let err = KeyTableBuilder::new(RowGeometry::new(vec![3]))
            .set_labels_of_row(1, ["a", "b"])
            .build()
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Row 1"), "message: {message}");
        assert!(message.contains('2'), "message: {message}");
        assert!(message.contains('3'), "message: {message}");
    }

    #[test]
    fn test_missing_row_is_rejected() {
        let err = KeyTableBuilder::new(RowGeometry::new(vec![1, 1]))
            .set_labels_of_row(1, ["a"])
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("Row 2"));
    }

    #[test]
    fn test_duplicate_row_assignment_is_rejected() {
        let err = KeyTableBuilder::new(RowGeometry::new(vec![1]))
            .set_labels_of_row(1, ["a"])
            .set_labels_of_row(1, ["b"])
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("assigned twice"));
    }

    #[test]
    fn test_out_of_range_row_is_rejected() {
        let err = KeyTableBuilder::new(RowGeometry::new(vec![1]))
            .set_labels_of_row(4, ["a"])
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("Row 4"));
    }
}
