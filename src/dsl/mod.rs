//! Text netlist format.
//!
//! The format is line-oriented: each device line names one two-terminal
//! component and the integer nodes it connects, node 0 being ground.
//!
//! # Grammar Overview
//!
//! ```text
//! netlist     = { line } [ end_line { any_line } ]
//! end_line    = ".end"                (the whole line, no surrounding whitespace)
//! line        = comment | device | empty
//! comment     = '#' { any_char }
//! device      = tag node node value
//!
//! tag         = ("R" | "V" | "I") { non_space }
//! node        = digit+ | "GND"
//! value       = number [suffix]
//! suffix      = t | g | x | k | m | u | n | p | f    (case-insensitive)
//! ```
//!
//! | Suffix | Multiplier |
//! |--------|------------|
//! | t | 1e12 |
//! | g | 1e9 |
//! | x | 1e6 |
//! | k | 1e3 |
//! | m | 1e-3 |
//! | u | 1e-6 |
//! | n | 1e-9 |
//! | p | 1e-12 |
//! | f | 1e-15 |
//!
//! # Example
//!
//! ```text
//! # Resistive divider
//! V1 1 0 10
//! R1 1 2 1k
//! R2 2 0 1k
//! .end
//! ```

mod ast;
mod lexer;
mod parser;

pub use ast::*;
pub use lexer::{parse_value, split_lines, Line};
pub use parser::Parser;

use crate::circuit::Netlist;
use crate::error::Result;

/// Parse netlist text.
pub fn parse(input: &str) -> Result<Netlist> {
    Parser::new(input).parse()
}

/// Parse a netlist file.
pub fn parse_file(path: &std::path::Path) -> Result<Netlist> {
    let content = std::fs::read_to_string(path).map_err(|e| crate::error::NodalError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    parse(&content)
}
