//! Format registry for format discovery and selection
//!
//! This module provides a centralized registry for all available formats.
//! Formats can be registered and retrieved by name.

use crate::ast::Document;
use crate::error::FormatError;
use crate::format::Format;
use std::collections::HashMap;
use std::io::Write;

/// Registry of output formats
///
/// # Examples
///
/// ```ignore
/// let mut registry = FormatRegistry::new();
/// registry.register(MyFormat);
///
/// let format = registry.get("my-format")?;
/// format.write(&doc, "ast", &mut std::io::stdout())?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Detect format from filename based on file extension
    ///
    /// Returns the format name if a matching extension is found, or None otherwise.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let registry = FormatRegistry::default();
    /// assert_eq!(registry.detect_format_from_filename("ast.dot"), Some("dot".to_string()));
    /// assert_eq!(registry.detect_format_from_filename("ast.json"), Some("json".to_string()));
    /// assert_eq!(registry.detect_format_from_filename("ast.png"), None);
    /// ```
    pub fn detect_format_from_filename(&self, filename: &str) -> Option<String> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;

        self.formats
            .values()
            .find(|format| format.file_extensions().contains(&extension))
            .map(|format| format.name().to_string())
    }

    /// Pick the format for an output file: an explicit name wins, then the
    /// file extension, then `fallback`.
    pub fn resolve(
        &self,
        explicit: Option<&str>,
        output: &str,
        fallback: &str,
    ) -> Result<String, FormatError> {
        let name = match explicit {
            Some(name) => name.to_string(),
            None => self
                .detect_format_from_filename(output)
                .unwrap_or_else(|| fallback.to_string()),
        };
        self.get(&name)?;
        Ok(name)
    }

    /// Write a document using the specified format
    pub fn write(
        &self,
        doc: &Document,
        ast_name: &str,
        format: &str,
        sink: &mut dyn Write,
    ) -> Result<(), FormatError> {
        self.get(format)?.write(doc, ast_name, sink)
    }

    /// Write a document using the specified format and options
    pub fn write_with_options(
        &self,
        doc: &Document,
        ast_name: &str,
        format: &str,
        options: &HashMap<String, String>,
        sink: &mut dyn Write,
    ) -> Result<(), FormatError> {
        self.get(format)?
            .write_with_options(doc, ast_name, options, sink)
    }

    /// Create a registry with default formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::dot::DotFormat);
        registry.register(crate::formats::treeviz::TreevizFormat);
        registry.register(crate::formats::json::JsonFormat);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
