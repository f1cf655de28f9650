//! Document loading
//!
//! Decoding is the only place malformed input is detected. No semantic
//! validation happens here: an `ARG` index that points nowhere is still loaded.

use crate::ast::Document;
use crate::error::FormatError;
use crate::proto;
use prost::Message;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Decode a serialized `Root` message into a [`Document`].
pub fn load(bytes: &[u8]) -> Result<Document, FormatError> {
    let root = proto::Root::decode(bytes)?;
    let doc = Document::from(root);
    debug!(
        bytes = bytes.len(),
        calls = doc.calls.len(),
        streams = doc.streams.len(),
        values = doc.value_count(),
        "decoded AST document"
    );
    Ok(doc)
}

/// Read a file fully and decode it.
pub fn load_path(path: impl AsRef<Path>) -> Result<Document, FormatError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| FormatError::InputRead {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    load(&bytes)
}

/// Graph root label for an input path: the base name with its final
/// extension removed.
///
/// A name that is only an extension (`.bin`) yields an empty label, and a name
/// without a dot is returned unchanged.
pub fn ast_name(path: impl AsRef<Path>) -> String {
    let base = path
        .as_ref()
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    match base.rfind('.') {
        Some(idx) => base[..idx].to_string(),
        None => base,
    }
}
