//! Fixture validation for harness use.
//!
//! The builder already rejects malformed row widths at construction; this
//! module re-checks finished fixtures and reports authoring problems the
//! builder cannot see, such as duplicate placeholder slots across rows.

use crate::models::{KeyLabel, LayoutFixture};
use std::collections::HashSet;

/// Validation result with specific errors and warnings.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// Critical errors that make the fixture unusable
    pub errors: Vec<ValidationError>,
    /// Non-critical warnings
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    /// Creates a new empty validation report.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Returns true if there are no errors (warnings are allowed).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Adds an error to the report.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Adds a warning to the report.
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Formats the report as a user-friendly message.
    #[must_use]
    pub fn format_message(&self) -> String {
        let mut message = String::new();

        if !self.errors.is_empty() {
            message.push_str(&format!("{} validation errors:\n", self.errors.len()));
            for (idx, error) in self.errors.iter().enumerate() {
                message.push_str(&format!("  {}. {}\n", idx + 1, error));
            }
        }

        if !self.warnings.is_empty() {
            message.push_str(&format!("{} warnings:\n", self.warnings.len()));
            for (idx, warning) in self.warnings.iter().enumerate() {
                message.push_str(&format!("  {}. {}\n", idx + 1, warning));
            }
        }

        message
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validation error with row/column context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Type of validation error
    pub kind: ValidationErrorKind,
    /// 1-based row where the error occurred
    pub row: Option<usize>,
    /// 1-based key position within the row
    pub col: Option<usize>,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            row: None,
            col: None,
            message: message.into(),
        }
    }

    /// Sets the 1-based row and key position context.
    #[must_use]
    pub const fn with_position(mut self, row: usize, col: usize) -> Self {
        self.row = Some(row);
        self.col = Some(col);
        self
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let (Some(row), Some(col)) = (self.row, self.col) {
            write!(f, "[Row {} key {}] {}: {}", row, col, self.kind, self.message)
        } else {
            write!(f, "{}: {}", self.kind, self.message)
        }
    }
}

/// Types of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Row key count doesn't match the declared geometry
    MismatchedRowWidth,
    /// Placeholder slot identifier used more than once in the layout
    DuplicateSlot,
    /// Literal key label is empty
    EmptyLabel,
}

impl std::fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MismatchedRowWidth => write!(f, "Mismatched Row Width"),
            Self::DuplicateSlot => write!(f, "Duplicate Slot"),
            Self::EmptyLabel => write!(f, "Empty Label"),
        }
    }
}

/// Validation warning (non-blocking).
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// Warning message
    pub message: String,
}

impl ValidationWarning {
    /// Creates a new validation warning.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Fixture validator.
pub struct FixtureValidator<'a> {
    fixture: &'a LayoutFixture,
}

impl<'a> FixtureValidator<'a> {
    /// Creates a new fixture validator.
    #[must_use]
    pub const fn new(fixture: &'a LayoutFixture) -> Self {
        Self { fixture }
    }

    /// Runs all checks and returns the collected report.
    #[must_use]
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();

        self.check_row_widths(&mut report);
        self.check_keys(&mut report);

        report
    }

    fn check_row_widths(&self, report: &mut ValidationReport) {
        let table = self.fixture.common_alphabet_layout(false);
        for (index, row) in table.rows().iter().enumerate() {
            let row_number = index + 1;
            let expected = table.geometry().width_of_row(row_number);
            if expected != Some(row.len()) {
                report.add_error(ValidationError::new(
                    ValidationErrorKind::MismatchedRowWidth,
                    format!(
                        "Row {} has {} keys but the geometry declares {}",
                        row_number,
                        row.len(),
                        expected.unwrap_or_default()
                    ),
                ));
            }
        }
    }

    fn check_keys(&self, report: &mut ValidationReport) {
        let table = self.fixture.common_alphabet_layout(false);
        let mut seen_slots: HashSet<&str> = HashSet::new();

        for (row_index, row) in table.rows().iter().enumerate() {
            for (col_index, key) in row.keys().iter().enumerate() {
                let row_number = row_index + 1;
                let key_number = col_index + 1;
                match &key.label {
                    KeyLabel::Slot(id) => {
                        if !seen_slots.insert(id) {
                            report.add_error(
                                ValidationError::new(
                                    ValidationErrorKind::DuplicateSlot,
                                    format!("Slot '{id}' is used more than once"),
                                )
                                .with_position(row_number, key_number),
                            );
                        }
                    }
                    KeyLabel::Literal(label) => {
                        if label.is_empty() {
                            report.add_error(
                                ValidationError::new(
                                    ValidationErrorKind::EmptyLabel,
                                    "Literal key label is empty",
                                )
                                .with_position(row_number, key_number),
                            );
                        }
                    }
                }

                let mut seen_more_keys: HashSet<&str> = HashSet::new();
                for more_key in &key.more_keys {
                    if !seen_more_keys.insert(more_key) {
                        report.add_warning(ValidationWarning::new(format!(
                            "Row {} key {}: duplicate more-key '{}'",
                            row_number, key_number, more_key
                        )));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts;

    #[test]
    fn test_built_in_fixtures_are_valid() {
        for fixture in layouts::all().unwrap() {
            let report = FixtureValidator::new(&fixture).validate();
            assert!(
                report.is_valid(),
                "{}: {}",
                fixture.name(),
                report.format_message()
            );
            assert!(report.warnings.is_empty());
        }
    }

    #[test]
    fn test_report_formatting() {
        let mut report = ValidationReport::new();
        report.add_error(
            ValidationError::new(ValidationErrorKind::DuplicateSlot, "Slot 'X' is used more than once")
                .with_position(2, 9),
        );
        report.add_warning(ValidationWarning::new("something minor"));

        assert!(!report.is_valid());
        let message = report.format_message();
        assert!(message.contains("1 validation errors"));
        assert!(message.contains("[Row 2 key 9]"));
        assert!(message.contains("1 warnings"));
    }
}
