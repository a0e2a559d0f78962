//! Swiss (QWERTZ) layout fixture.

use crate::builder::{key, label_key, slot, KeyTableBuilder};
use crate::models::{LayoutCustomizer, LayoutFixture, LayoutId, RowGeometry};
use anyhow::Result;

/// Stable name of this layout variant.
pub const LAYOUT_NAME: &str = "swiss";

/// Placeholder slot for the locale-dependent eleventh key of row 1.
pub const ROW1_11: &str = "ROW1_11";
/// Placeholder slot for the locale-dependent tenth key of row 2.
pub const ROW2_10: &str = "ROW2_10";
/// Placeholder slot for the locale-dependent eleventh key of row 2.
pub const ROW2_11: &str = "ROW2_11";

/// Builds the Swiss fixture: QWERTZ rows with digit long-press alternates on
/// row 1 and three placeholder slots resolved by the locale layer.
pub fn build(customizer: Box<dyn LayoutCustomizer>) -> Result<LayoutFixture> {
    let alphabet = KeyTableBuilder::new(RowGeometry::new(vec![11, 11, 7]))
        .set_keys_of_row(
            1,
            [
                key("q", ["1"]),
                key("w", ["2"]),
                key("e", ["3"]),
                key("r", ["4"]),
                key("t", ["5"]),
                key("z", ["6"]),
                key("u", ["7"]),
                key("i", ["8"]),
                key("o", ["9"]),
                key("p", ["0"]),
                slot(ROW1_11),
            ],
        )
        .set_keys_of_row(
            2,
            [
                label_key("a"),
                label_key("s"),
                label_key("d"),
                label_key("f"),
                label_key("g"),
                label_key("h"),
                label_key("j"),
                label_key("k"),
                label_key("l"),
                slot(ROW2_10),
                slot(ROW2_11),
            ],
        )
        .set_labels_of_row(3, ["y", "x", "c", "v", "b", "n", "m"])
        .build()?;

    Ok(LayoutFixture::new(
        LAYOUT_NAME,
        customizer,
        alphabet,
        LayoutId::new(super::SYMBOLS),
        LayoutId::new(super::SYMBOLS_SHIFTED),
    ))
}
