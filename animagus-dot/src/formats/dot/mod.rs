//! Graphviz DOT rendering of AST documents
//!
//! The output is line oriented. For a document with one call `add` returning
//! `UINT64(7)` and a root label `t`:
//!
//! ```text
//! digraph G {
//! newrank="true"
//! t -> { streams  calls }
//!
//! calls -> c0
//! subgraph cluster_c0 {
//! c0 [label ="add", shape="box"]
//! c0 -> c0v0
//! c0v0 [label="UINT64(7)"]
//! }
//! }
//! ```
//!
//! Identifiers encode the path from the root: `c{i}` / `s{i}` for the i-th
//! call or stream, `{id}v0` for its value tree, and `{id}c{j}` for the j-th
//! child of a value. Two distinct tree positions never share an identifier.
//!
//! Calls are wrapped in `cluster_` subgraphs; `newrank` lets rank constraints
//! apply across those clusters. Streams are not clustered.
//!
//! Labels are written verbatim. An `ERROR` payload holding quotes or newlines
//! therefore yields malformed DOT unless `escape-labels` is enabled, which
//! changes the output bytes.

use crate::ast::{Call, Document, Stream, Value};
use crate::error::FormatError;
use crate::format::{bool_option, check_options, Format};
use std::borrow::Cow;
use std::collections::HashMap;
use std::io::Write;
use tracing::debug;

/// Escape characters that are special inside a quoted DOT string.
pub fn escape_label(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// Options for [`emit_with_options`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DotOptions {
    pub escape_labels: bool,
}

struct DotWriter<'a> {
    sink: &'a mut dyn Write,
    options: DotOptions,
}

impl DotWriter<'_> {
    fn line(&mut self, line: &str) -> Result<(), FormatError> {
        self.sink.write_all(line.as_bytes())?;
        self.sink.write_all(b"\n")?;
        Ok(())
    }

    fn label<'s>(&self, text: &'s str) -> Cow<'s, str> {
        if self.options.escape_labels {
            Cow::Owned(escape_label(text))
        } else {
            Cow::Borrowed(text)
        }
    }

    fn value(&mut self, id: &str, value: &Value) -> Result<(), FormatError> {
        let label = value.kind.label();
        self.line(&format!("{id} [label=\"{}\"]", self.label(&label)))?;
        for (j, child) in value.children.iter().enumerate() {
            let child_id = format!("{id}c{j}");
            self.line(&format!("{id} -> {child_id}"))?;
            self.value(&child_id, child)?;
        }
        Ok(())
    }

    fn call(&mut self, i: usize, call: &Call) -> Result<(), FormatError> {
        let id = format!("c{i}");
        self.line(&format!("subgraph cluster_{id} {{"))?;
        self.line(&format!(
            "{id} [label =\"{}\", shape=\"box\"]",
            self.label(&call.name)
        ))?;
        let child_id = format!("{id}v0");
        self.line(&format!("{id} -> {child_id}"))?;
        self.value(&child_id, &call.result)?;
        self.line("}")
    }

    fn stream(&mut self, i: usize, stream: &Stream) -> Result<(), FormatError> {
        let id = format!("s{i}");
        self.line(&format!(
            "{id} [label=\"{}\", shape=\"box\"]",
            self.label(&stream.name)
        ))?;
        let child_id = format!("{id}v0");
        self.line(&format!("{id} -> {child_id}"))?;
        self.value(&child_id, &stream.filter)
    }

    fn document(&mut self, doc: &Document, ast_name: &str) -> Result<(), FormatError> {
        self.line("digraph G {")?;
        self.line("newrank=\"true\"")?;
        self.line(&format!("{ast_name} -> {{ streams  calls }}\n"))?;
        for (i, call) in doc.calls.iter().enumerate() {
            self.line(&format!("calls -> c{i}"))?;
            self.call(i, call)?;
        }
        for (i, stream) in doc.streams.iter().enumerate() {
            self.line(&format!("streams -> s{i}"))?;
            self.stream(i, stream)?;
        }
        self.line("}")
    }
}

/// Write `doc` as a DOT digraph rooted at `ast_name`.
///
/// Stops at the first failing write; whatever reached the sink before the
/// failure stays there.
pub fn emit(doc: &Document, ast_name: &str, sink: &mut dyn Write) -> Result<(), FormatError> {
    emit_with_options(doc, ast_name, DotOptions::default(), sink)
}

pub fn emit_with_options(
    doc: &Document,
    ast_name: &str,
    options: DotOptions,
    sink: &mut dyn Write,
) -> Result<(), FormatError> {
    debug!(
        ast_name,
        calls = doc.calls.len(),
        streams = doc.streams.len(),
        "emitting dot graph"
    );
    DotWriter { sink, options }.document(doc, ast_name)
}

pub fn to_dot_str(doc: &Document, ast_name: &str) -> Result<String, FormatError> {
    DotFormat.serialize(doc, ast_name)
}

/// Format implementation for Graphviz DOT output
pub struct DotFormat;

impl Format for DotFormat {
    fn name(&self) -> &str {
        "dot"
    }

    fn description(&self) -> &str {
        "Graphviz digraph of calls, streams and their value trees"
    }

    fn file_extensions(&self) -> &[&str] {
        &["dot", "gv"]
    }

    fn write(
        &self,
        doc: &Document,
        ast_name: &str,
        sink: &mut dyn Write,
    ) -> Result<(), FormatError> {
        emit(doc, ast_name, sink)
    }

    fn write_with_options(
        &self,
        doc: &Document,
        ast_name: &str,
        options: &HashMap<String, String>,
        sink: &mut dyn Write,
    ) -> Result<(), FormatError> {
        check_options(self.name(), options, &["escape-labels"])?;
        let options = DotOptions {
            escape_labels: bool_option(options, "escape-labels", false)?,
        };
        emit_with_options(doc, ast_name, options, sink)
    }
}
