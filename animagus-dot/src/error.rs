//! Error types for loading and rendering operations

use std::fmt;

/// Errors that can occur while loading or rendering an AST document
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// Format does not support the requested operation or parameter
    NotSupported(String),
    /// Input file missing or unreadable
    InputRead { path: String, message: String },
    /// Input bytes do not decode into a document
    Deserialization(String),
    /// Output file cannot be created
    OutputCreate { path: String, message: String },
    /// A write to the output sink failed
    Write(String),
    /// Error while serializing through a third-party serializer
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::NotSupported(msg) => write!(f, "Operation not supported: {msg}"),
            FormatError::InputRead { path, message } => {
                write!(f, "Error reading file '{path}': {message}")
            }
            FormatError::Deserialization(msg) => write!(f, "Failed to decode AST: {msg}"),
            FormatError::OutputCreate { path, message } => {
                write!(f, "Error creating file '{path}': {message}")
            }
            FormatError::Write(msg) => write!(f, "Write error: {msg}"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

impl From<std::io::Error> for FormatError {
    fn from(err: std::io::Error) -> Self {
        FormatError::Write(err.to_string())
    }
}

impl From<prost::DecodeError> for FormatError {
    fn from(err: prost::DecodeError) -> Self {
        FormatError::Deserialization(err.to_string())
    }
}
