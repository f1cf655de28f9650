//! Icon mapping for the tree visualization format

use crate::ast::Kind;

/// Get the Unicode icon for a given node type
///
/// Returns a single Unicode character that visually represents the node type.
pub fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Document" => "⧉",
        "Calls" => "ƒ",
        "Streams" => "≋",
        "Call" => "▭",
        "Stream" => "⇶",
        "Literal" => "◦",
        "Reference" => "@",
        "Error" => "⚠",
        _ => "○",
    }
}

/// Node type name used to pick the icon of a value.
pub fn value_node_type(kind: &Kind) -> &'static str {
    match kind {
        Kind::Uint64(_) | Kind::Bool(_) | Kind::Bytes(_) => "Literal",
        Kind::Arg(_) | Kind::Param(_) => "Reference",
        Kind::Error(_) => "Error",
        Kind::Node(_) => "Node",
    }
}
