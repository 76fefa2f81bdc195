#![doc = include_str!("../README.md")]

pub mod error;
mod number;
pub mod normalize;
pub mod options;
pub mod parse;
pub mod value;

pub mod ser;
#[cfg(feature = "json")]
pub mod json;

pub use crate::error::{Error, NormalizeError, Result};
pub use crate::normalize::normalize;
pub use crate::options::Options;
pub use crate::value::{Number, Value};

/// Parse YAML and render it as indented JSON.
///
/// Zero-length input yields `Ok(None)`.
#[cfg(feature = "json")]
pub fn yaml_to_json_string(s: &str, options: &Options) -> Result<Option<String>> {
    if s.is_empty() {
        return Ok(None);
    }
    let value = crate::parse::from_str(s, options)?;
    crate::json::to_string_pretty(&value, options).map(Some)
}

/// Parse YAML from `reader` and write indented JSON plus a newline to `writer`.
///
/// Returns `false` without writing anything when the input is empty.
#[cfg(feature = "json")]
pub fn yaml_to_json_writer<R: std::io::Read, W: std::io::Write>(
    mut reader: R,
    mut writer: W,
    options: &Options,
) -> Result<bool> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    if buf.is_empty() {
        return Ok(false);
    }
    let value = crate::parse::from_slice(&buf, options)?;
    crate::json::to_writer_pretty(&mut writer, &value, options)?;
    writer.write_all(b"\n")?;
    Ok(true)
}
