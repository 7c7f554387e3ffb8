//! Shared helpers for command output

use serde::Serialize;
use waypath_core::error::Result;

/// Escape double quotes for records output
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Header line for records output
pub fn records_header(mode: &str, fields: &[(&str, String)]) -> String {
    let mut line = format!("H waypath=1 records=1 mode={}", mode);
    for (key, value) in fields {
        line.push_str(&format!(" {}=\"{}\"", key, escape_quotes(value)));
    }
    line
}
