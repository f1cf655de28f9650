//! Format trait definition
//!
//! This module defines the core Format trait that all output formats implement.
//! Formats stream their output into a sink so a failing write aborts rendering
//! at the first error.

use crate::ast::Document;
use crate::error::FormatError;
use std::collections::HashMap;
use std::io::Write;

/// Trait for output formats
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn write(&self, doc: &Document, ast_name: &str, sink: &mut dyn Write) -> Result<(), FormatError> {
///         writeln!(sink, "{ast_name}: {} calls", doc.calls.len())?;
///         Ok(())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "dot", "treeviz", "json")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format (e.g., ["dot", "gv"])
    ///
    /// Returns a slice of file extensions without the leading dot.
    /// Used for automatic format detection from output filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Stream a rendering of `doc` into `sink`.
    ///
    /// `ast_name` is the label of the document root, usually derived from the
    /// input filename.
    fn write(
        &self,
        doc: &Document,
        ast_name: &str,
        sink: &mut dyn Write,
    ) -> Result<(), FormatError>;

    /// Same as [`Format::write`], with format-specific parameters.
    ///
    /// The default implementation rejects any parameter. Formats that accept
    /// parameters override this method.
    fn write_with_options(
        &self,
        doc: &Document,
        ast_name: &str,
        options: &HashMap<String, String>,
        sink: &mut dyn Write,
    ) -> Result<(), FormatError> {
        if options.is_empty() {
            self.write(doc, ast_name, sink)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }

    /// Render into a string. Convenience for tests and stdout output.
    fn serialize(&self, doc: &Document, ast_name: &str) -> Result<String, FormatError> {
        let mut buf = Vec::new();
        self.write(doc, ast_name, &mut buf)?;
        String::from_utf8(buf).map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}

/// Read a boolean parameter; unset parameters use `default`.
pub fn bool_option(
    options: &HashMap<String, String>,
    key: &str,
    default: bool,
) -> Result<bool, FormatError> {
    match options.get(key) {
        None => Ok(default),
        Some(raw) => match raw.to_lowercase().as_str() {
            "true" | "1" | "yes" | "y" => Ok(true),
            "false" | "0" | "no" | "n" => Ok(false),
            other => Err(FormatError::NotSupported(format!(
                "Invalid boolean value '{other}' for '{key}'"
            ))),
        },
    }
}

/// Reject parameters outside `known`.
pub fn check_options(
    format: &str,
    options: &HashMap<String, String>,
    known: &[&str],
) -> Result<(), FormatError> {
    let mut unknown: Vec<_> = options
        .keys()
        .filter(|key| !known.contains(&key.as_str()))
        .cloned()
        .collect();
    if unknown.is_empty() {
        return Ok(());
    }
    unknown.sort();
    Err(FormatError::NotSupported(format!(
        "Format '{format}' does not support parameter(s): {}",
        unknown.join(", ")
    )))
}
