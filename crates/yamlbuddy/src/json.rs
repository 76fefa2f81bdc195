//! JSON emission for normalized trees.

use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::{Options, Result, normalize::normalize, value::Value};

/// Normalize `value` and write it as indented JSON (no trailing newline).
pub fn to_writer_pretty<W: Write>(writer: W, value: &Value, options: &Options) -> Result<()> {
    let normalized = normalize(value)?;
    let indent = vec![b' '; options.indent];
    let mut ser = serde_json::Serializer::with_formatter(writer, PrettyFormatter::with_indent(&indent));
    normalized.serialize(&mut ser)?;
    Ok(())
}

pub fn to_string_pretty(value: &Value, options: &Options) -> Result<String> {
    let mut buf = Vec::with_capacity(128);
    to_writer_pretty(&mut buf, value, options)?;
    let s = String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(s)
}

/// Normalize `value` into a `serde_json::Value`, keeping mapping order.
pub fn to_value(value: &Value) -> Result<serde_json::Value> {
    let normalized = normalize(value)?;
    Ok(serde_json::to_value(&normalized)?)
}
