//! QWERTY baseline layout fixture.

use crate::builder::{key, KeyTableBuilder};
use crate::models::{LayoutCustomizer, LayoutFixture, LayoutId, RowGeometry};
use anyhow::Result;

/// Stable name of this layout variant.
pub const LAYOUT_NAME: &str = "qwerty";

/// Builds the QWERTY fixture: the common alphabet rows with digit long-press
/// alternates on row 1 and no placeholder slots.
pub fn build(customizer: Box<dyn LayoutCustomizer>) -> Result<LayoutFixture> {
    let alphabet = KeyTableBuilder::new(RowGeometry::new(vec![10, 9, 7]))
        .set_keys_of_row(
            1,
            [
                key("q", ["1"]),
                key("w", ["2"]),
                key("e", ["3"]),
                key("r", ["4"]),
                key("t", ["5"]),
                key("y", ["6"]),
                key("u", ["7"]),
                key("i", ["8"]),
                key("o", ["9"]),
                key("p", ["0"]),
            ],
        )
        .set_labels_of_row(2, ["a", "s", "d", "f", "g", "h", "j", "k", "l"])
        .set_labels_of_row(3, ["z", "x", "c", "v", "b", "n", "m"])
        .build()?;

    Ok(LayoutFixture::new(
        LAYOUT_NAME,
        customizer,
        alphabet,
        LayoutId::new(super::SYMBOLS),
        LayoutId::new(super::SYMBOLS_SHIFTED),
    ))
}
