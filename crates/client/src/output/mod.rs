//! Output formatting functions.

pub mod pretty;

use crate::cli::OutputFormat;

/// Render `value` as compact JSON, or through `pretty` for human output.
pub fn render<T>(value: &T, format: OutputFormat, pretty: fn(&T) -> String) -> String
where
    T: serde::Serialize + ?Sized,
{
    match format {
        OutputFormat::Json => serde_json::to_string(value).unwrap_or_default(),
        OutputFormat::Pretty => pretty(value),
    }
}
