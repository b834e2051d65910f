//! Canonical encoder: writes a table back out in a form the decoder reads
//! into the same table.

pub mod primitives;
pub mod writer;

use crate::options::{ArrayLayout, Options};
use crate::value::{ConfigTable, ConfigValue};
use crate::Result;

use primitives::{check_key, check_text};
use writer::LineWriter;

pub fn encode_table_to_string(table: &ConfigTable, options: &Options) -> Result<String> {
    let mut w = LineWriter::new();
    for (i, (key, value)) in table.iter().enumerate() {
        check_key(key)?;
        if i > 0 && options.blank_line_between_entries {
            w.blank();
        }
        match value {
            ConfigValue::Scalar(s) => {
                check_text(key, s)?;
                w.line_scalar(key, s);
            }
            ConfigValue::Array(items) => {
                for item in items {
                    check_text(key, item)?;
                }
                encode_array(&mut w, key, items, options);
            }
        }
    }
    Ok(w.into_string())
}

fn encode_array(w: &mut LineWriter, key: &str, items: &[String], options: &Options) {
    if items.is_empty() || options.array_layout == ArrayLayout::Inline {
        w.line_array_inline(key, items);
        return;
    }
    w.line_array_open(key);
    let last = items.len() - 1;
    for (i, item) in items.iter().enumerate() {
        w.line_element(options.indent, item, i == last);
    }
    w.line_array_close();
}
