//! Rendering of animagus AST documents
//!
//!     animagus compiles queries into a protobuf AST: a `Root` holding named calls
//!     (operations producing one result value) and named streams (data streams
//!     gated by a filter value). Values form a tree of typed nodes. This crate
//!     decodes such a file and renders the tree for humans, first of all as a
//!     Graphviz digraph.
//!
//!     This is a pure lib: it powers the animagus-dot CLI but makes no
//!     assumption about a shell. Nothing here prints, reads env vars or exits.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── proto.rs                # Protobuf wire types (decoding surface only)
//!     ├── ast.rs                  # Typed tree, one variant per value kind
//!     ├── loader.rs               # bytes / path → Document, root label derivation
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     └── formats
//!         ├── dot                 # Graphviz output (the default)
//!         ├── treeviz             # Unicode tree for terminals
//!         └── json                # Decoded document, for debugging the loader
//!
//! Core Algorithm
//!
//!     Rendering is a single depth-first, pre-order walk. Each node identifier
//!     encodes the node's path from the root, so identifiers are unique without
//!     any bookkeeping, and output is a pure function of the document and the
//!     root label.
//!
//! Errors
//!
//!     Every failure is final. Decoding errors surface before any output is
//!     produced; a failing write stops rendering immediately and leaves whatever
//!     was already written in the sink.
//!
pub mod ast;
pub mod error;
pub mod format;
pub mod formats;
pub mod loader;
pub mod proto;
pub mod registry;

pub use ast::{Call, Document, Kind, Stream, Tag, Value};
pub use error::FormatError;
pub use format::Format;
pub use loader::{ast_name, load, load_path};
pub use registry::FormatRegistry;
