//! Integration tests for the Swiss layout fixture.

use kbd_fixtures::layouts::swiss::{self, ROW1_11, ROW2_10, ROW2_11};
use kbd_fixtures::models::{DefaultCustomizer, KeyLabel};

#[test]
fn test_name_is_stable() {
    let fixture = swiss::build(Box::new(DefaultCustomizer)).unwrap();
    assert_eq!(fixture.name(), "swiss");
}

#[test]
fn test_row1_digit_more_keys() {
    let fixture = swiss::build(Box::new(DefaultCustomizer)).unwrap();
    let table = fixture.common_alphabet_layout(false);
    let row1 = table.row(1).unwrap();

    assert_eq!(row1.len(), 11);

    let expected_labels = ["q", "w", "e", "r", "t", "z", "u", "i", "o", "p"];
    let expected_digits = ["1", "2", "3", "4", "5", "6", "7", "8", "9", "0"];

    for (col, (label, digit)) in expected_labels.iter().zip(expected_digits).enumerate() {
        let key = &row1.keys()[col];
        assert_eq!(key.label, KeyLabel::Literal((*label).to_string()));
        assert_eq!(key.more_keys, vec![digit.to_string()], "key '{label}'");
    }

    let eleventh = &row1.keys()[10];
    assert_eq!(eleventh.label.slot_id(), Some(ROW1_11));
    assert!(!eleventh.has_more_keys());
}

#[test]
fn test_row2_labels_and_slots() {
    let fixture = swiss::build(Box::new(DefaultCustomizer)).unwrap();
    let table = fixture.common_alphabet_layout(false);
    let row2 = table.row(2).unwrap();

    assert_eq!(row2.len(), 11);

    let expected_labels = ["a", "s", "d", "f", "g", "h", "j", "k", "l"];
    for (col, label) in expected_labels.iter().enumerate() {
        let key = &row2.keys()[col];
        assert_eq!(key.label, KeyLabel::Literal((*label).to_string()));
        assert!(!key.has_more_keys(), "key '{label}' should have no alternates");
    }

    assert_eq!(row2.keys()[9].label.slot_id(), Some(ROW2_10));
    assert_eq!(row2.keys()[10].label.slot_id(), Some(ROW2_11));
}

#[test]
fn test_row3_labels() {
    let fixture = swiss::build(Box::new(DefaultCustomizer)).unwrap();
    let table = fixture.common_alphabet_layout(false);
    let row3 = table.row(3).unwrap();

    assert_eq!(row3.len(), 7);

    let expected_labels = ["y", "x", "c", "v", "b", "n", "m"];
    for (col, label) in expected_labels.iter().enumerate() {
        let key = &row3.keys()[col];
        assert_eq!(key.label, KeyLabel::Literal((*label).to_string()));
        assert!(!key.has_more_keys());
    }
}

#[test]
fn test_form_factors_resolve_to_same_table() {
    let fixture = swiss::build(Box::new(DefaultCustomizer)).unwrap();
    assert_eq!(
        fixture.common_alphabet_layout(true),
        fixture.common_alphabet_layout(false)
    );
}

#[test]
fn test_companion_layout_references() {
    let fixture = swiss::build(Box::new(DefaultCustomizer)).unwrap();
    assert_eq!(fixture.symbols_layout().as_str(), "symbols");
    assert_eq!(fixture.symbols_shifted_layout().as_str(), "symbols_shifted");
}

#[test]
fn test_construction_is_deterministic() {
    let a = swiss::build(Box::new(DefaultCustomizer)).unwrap();
    let b = swiss::build(Box::new(DefaultCustomizer)).unwrap();
    assert_eq!(
        a.common_alphabet_layout(false),
        b.common_alphabet_layout(false)
    );
    assert_eq!(a.name(), b.name());
}

#[test]
fn test_slots_are_unique() {
    let fixture = swiss::build(Box::new(DefaultCustomizer)).unwrap();
    let table = fixture.common_alphabet_layout(false);

    let mut slots: Vec<&str> = table
        .rows()
        .iter()
        .flat_map(|row| row.keys())
        .filter_map(|key| key.label.slot_id())
        .collect();
    slots.sort_unstable();

    assert_eq!(slots, vec![ROW1_11, ROW2_10, ROW2_11]);
}
