#![doc = include_str!("../README.md")]

pub mod decode;
pub mod encode;
pub mod error;
pub mod options;
pub mod value;

pub use crate::decode::parser::{ParseStats, Parser};
pub use crate::error::{Error, Result};
pub use crate::options::{ArrayLayout, Options};
pub use crate::value::{ConfigTable, ConfigValue};

use std::io::{Read, Write};
use std::path::Path;

pub fn parse_str(s: &str) -> Result<ConfigTable> {
    crate::decode::parser::parse_to_table(s)
}

/// Like [`parse_str`], but hands back the entries read before a fatal error.
pub fn parse_partial(s: &str) -> (ConfigTable, Result<()>) {
    crate::decode::parser::parse_partial(s)
}

pub fn parse_reader<R: Read>(mut reader: R) -> Result<ConfigTable> {
    let mut s = String::new();
    reader.read_to_string(&mut s)?;
    parse_str(&s)
}

pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<ConfigTable> {
    let s = std::fs::read_to_string(path)?;
    parse_str(&s)
}

pub fn encode_to_string(table: &ConfigTable, options: &Options) -> Result<String> {
    crate::encode::encode_table_to_string(table, options)
}

pub fn encode_to_writer<W: Write>(mut writer: W, table: &ConfigTable, options: &Options) -> Result<()> {
    let s = encode_to_string(table, options)?;
    writer.write_all(s.as_bytes())?;
    Ok(())
}

#[cfg(feature = "json")]
pub fn to_json_value(table: &ConfigTable) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(table)?)
}
