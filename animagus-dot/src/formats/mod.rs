//! Format implementations
//!
//! This module contains all output formats that render an AST document.

pub mod dot;
pub mod icons;
pub mod json;
pub mod treeviz;

pub use dot::DotFormat;
pub use json::JsonFormat;
pub use treeviz::TreevizFormat;
