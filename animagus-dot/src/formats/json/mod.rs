//! JSON dump of the decoded document
//!
//! Useful to check what the loader made of an input file. Values serialize as
//! `{"kind": "...", "payload": ..., "children": [...]}`, with the payload left
//! out for structural kinds and rendered as text for `ERROR` and `BYTES`.

use crate::ast::Document;
use crate::error::FormatError;
use crate::format::{bool_option, check_options, Format};
use serde::Serialize;
use std::collections::HashMap;
use std::io::Write;

#[derive(Serialize)]
struct JsonDocument<'a> {
    name: &'a str,
    #[serde(flatten)]
    document: &'a Document,
}

pub fn write_json(
    doc: &Document,
    ast_name: &str,
    pretty: bool,
    sink: &mut dyn Write,
) -> Result<(), FormatError> {
    let wrapped = JsonDocument {
        name: ast_name,
        document: doc,
    };
    let result = if pretty {
        serde_json::to_writer_pretty(&mut *sink, &wrapped)
    } else {
        serde_json::to_writer(&mut *sink, &wrapped)
    };
    result.map_err(|e| {
        if e.is_io() {
            FormatError::Write(e.to_string())
        } else {
            FormatError::SerializationError(e.to_string())
        }
    })?;
    writeln!(sink)?;
    Ok(())
}

/// Format implementation for JSON output
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Decoded document as JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn write(
        &self,
        doc: &Document,
        ast_name: &str,
        sink: &mut dyn Write,
    ) -> Result<(), FormatError> {
        write_json(doc, ast_name, true, sink)
    }

    fn write_with_options(
        &self,
        doc: &Document,
        ast_name: &str,
        options: &HashMap<String, String>,
        sink: &mut dyn Write,
    ) -> Result<(), FormatError> {
        check_options(self.name(), options, &["pretty"])?;
        let pretty = bool_option(options, "pretty", true)?;
        write_json(doc, ast_name, pretty, sink)
    }
}
