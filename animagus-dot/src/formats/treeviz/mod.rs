//! Treeviz formatter for AST documents
//!
//! Treeviz is a terminal-friendly view of the same tree the DOT format draws.
//! It encodes nesting with box-drawing connectors, two columns per level:
//!
//! <prefix><connector> <icon> <label>
//!
//! Example:
//!
//! ⧉ balance (1 calls, 1 streams)
//! ├─ ƒ calls
//! │ └─ ▭ add
//! │   └─ ○ ADD
//! │     ├─ @ ARG(0)
//! │     └─ ◦ UINT64(7)
//! └─ ≋ streams
//!   └─ ⇶ cells
//!     └─ ○ NIL
//!
//! Value labels are identical to the DOT labels. With `show-ids` each line
//! also carries the DOT identifier of its node, which helps matching a
//! rendered graph back to the tree.

use super::icons::{get_icon, value_node_type};
use crate::ast::{Document, Value};
use crate::error::FormatError;
use crate::format::{bool_option, check_options, Format};
use std::collections::HashMap;
use std::io::Write;

struct TreeWriter<'a> {
    sink: &'a mut dyn Write,
    show_ids: bool,
}

impl TreeWriter<'_> {
    fn entry(
        &mut self,
        prefix: &str,
        is_last: bool,
        icon: &str,
        label: &str,
        id: Option<&str>,
    ) -> Result<(), FormatError> {
        let connector = if is_last { "└─" } else { "├─" };
        write!(self.sink, "{prefix}{connector} {icon} {label}")?;
        if let (true, Some(id)) = (self.show_ids, id) {
            write!(self.sink, " [{id}]")?;
        }
        writeln!(self.sink)?;
        Ok(())
    }

    fn value(
        &mut self,
        value: &Value,
        id: &str,
        prefix: &str,
        is_last: bool,
    ) -> Result<(), FormatError> {
        let icon = get_icon(value_node_type(&value.kind));
        self.entry(prefix, is_last, icon, &value.kind.label(), Some(id))?;

        let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
        let count = value.children.len();
        for (j, child) in value.children.iter().enumerate() {
            self.value(child, &format!("{id}c{j}"), &child_prefix, j == count - 1)?;
        }
        Ok(())
    }

    /// One section ("calls" or "streams") with its named entries.
    fn section<'d>(
        &mut self,
        name: &str,
        icon: &str,
        entries: impl ExactSizeIterator<Item = (&'d str, &'d Value)>,
        id_prefix: char,
        is_last: bool,
    ) -> Result<(), FormatError> {
        self.entry("", is_last, get_icon(name), &name.to_lowercase(), None)?;

        let prefix = if is_last { "  " } else { "│ " };
        let count = entries.len();
        for (i, (entry_name, value)) in entries.enumerate() {
            let id = format!("{id_prefix}{i}");
            let last_entry = i == count - 1;
            self.entry(prefix, last_entry, icon, entry_name, Some(&id))?;
            let value_prefix = format!("{}{}", prefix, if last_entry { "  " } else { "│ " });
            self.value(value, &format!("{id}v0"), &value_prefix, true)?;
        }
        Ok(())
    }
}

/// Write the tree view of `doc`.
pub fn write_treeviz(
    doc: &Document,
    ast_name: &str,
    show_ids: bool,
    sink: &mut dyn Write,
) -> Result<(), FormatError> {
    writeln!(
        sink,
        "{} {} ({} calls, {} streams)",
        get_icon("Document"),
        ast_name,
        doc.calls.len(),
        doc.streams.len()
    )?;

    let mut tree = TreeWriter { sink, show_ids };
    tree.section(
        "Calls",
        get_icon("Call"),
        doc.calls.iter().map(|c| (c.name.as_str(), &c.result)),
        'c',
        false,
    )?;
    tree.section(
        "Streams",
        get_icon("Stream"),
        doc.streams.iter().map(|s| (s.name.as_str(), &s.filter)),
        's',
        true,
    )
}

pub fn to_treeviz_str(doc: &Document, ast_name: &str) -> Result<String, FormatError> {
    TreevizFormat.serialize(doc, ast_name)
}

/// Format implementation for treeviz format
pub struct TreevizFormat;

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Visual tree representation with indentation and Unicode icons"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tree", "treeviz"]
    }

    fn write(
        &self,
        doc: &Document,
        ast_name: &str,
        sink: &mut dyn Write,
    ) -> Result<(), FormatError> {
        write_treeviz(doc, ast_name, false, sink)
    }

    /// # Parameters
    ///
    /// - `"show-ids"`: When set to `"true"`, appends the DOT identifier of
    ///   every call, stream and value.
    fn write_with_options(
        &self,
        doc: &Document,
        ast_name: &str,
        options: &HashMap<String, String>,
        sink: &mut dyn Write,
    ) -> Result<(), FormatError> {
        check_options(self.name(), options, &["show-ids"])?;
        let show_ids = bool_option(options, "show-ids", false)?;
        write_treeviz(doc, ast_name, show_ids, sink)
    }
}
