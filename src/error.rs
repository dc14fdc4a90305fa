//! Error types for the Nodal circuit analyzer.
//!
//! This module provides a unified error type [`NodalError`] that covers
//! all error conditions that can occur during netlist parsing, component
//! construction, matrix assembly, and solving.

use thiserror::Error;

/// Result type alias using [`NodalError`].
pub type Result<T> = std::result::Result<T, NodalError>;

/// Unified error type for all Nodal operations.
#[derive(Error, Debug)]
pub enum NodalError {
    // ============ Netlist Parsing Errors ============
    /// Malformed netlist line (missing fields, bad node token)
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// Device tag does not start with R, V or I
    #[error("Unknown component type '{token}' at line {line}")]
    UnknownComponentType { token: String, line: usize },

    /// Numeric literal could not be decoded
    #[error("Invalid value '{text}' at line {line}")]
    ValueParse { text: String, line: usize },

    // ============ Component Errors ============
    /// Component parameter outside its valid domain
    #[error("Invalid component '{name}': {message}")]
    InvalidComponent { name: String, message: String },

    // ============ Assembly Errors ============
    /// A netlist entry references a node the topology does not account for
    #[error("Node {node} is outside the network topology (highest node is {max_node})")]
    TopologyMismatch { node: usize, max_node: usize },

    // ============ Solver Errors ============
    /// Matrix is singular (or numerically degenerate) and cannot be solved
    #[error("Singular matrix - network may have a floating node or a voltage source loop")]
    SingularMatrix,

    /// Matrix and vector shapes disagree
    #[error("Invalid system dimensions: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    // ============ I/O Errors ============
    /// Error reading a netlist file
    #[error("Failed to read netlist file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ============ WASM Errors ============
    /// WASM-specific error
    #[cfg(feature = "wasm")]
    #[error("WASM error: {message}")]
    WasmError { message: String },
}

impl NodalError {
    /// Create a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create an invalid component error
    pub fn invalid_component(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidComponent {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a topology mismatch error
    pub fn topology_mismatch(node: usize, max_node: usize) -> Self {
        Self::TopologyMismatch { node, max_node }
    }
}
