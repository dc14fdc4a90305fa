//! Parser for the netlist format.

use super::ast::{ComponentDef, ComponentType};
use super::lexer::{parse_value, split_lines, Line};
use crate::circuit::Netlist;
use crate::error::{NodalError, Result};

/// Parser for netlist text.
pub struct Parser<'a> {
    lines: Vec<Line<'a>>,
}

impl<'a> Parser<'a> {
    /// Create a new parser over the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            lines: split_lines(input),
        }
    }

    /// Parse every device line into a definition, in file order.
    pub fn parse_defs(&self) -> Result<Vec<ComponentDef>> {
        self.lines.iter().map(parse_component).collect()
    }

    /// Parse the entire netlist.
    pub fn parse(&self) -> Result<Netlist> {
        self.parse_defs()?
            .into_iter()
            .map(ComponentDef::into_entry)
            .collect()
    }
}

fn parse_component(line: &Line<'_>) -> Result<ComponentDef> {
    let tag = line.tokens[0];
    let component_type =
        ComponentType::from_tag(tag).ok_or_else(|| NodalError::UnknownComponentType {
            token: tag.to_string(),
            line: line.number,
        })?;

    if line.tokens.len() < 4 {
        return Err(NodalError::parse(
            line.number,
            format!("'{}' needs <n+> <n-> <value>", tag),
        ));
    }
    if line.tokens.len() > 4 {
        return Err(NodalError::parse(
            line.number,
            format!("unexpected token '{}' after value", line.tokens[4]),
        ));
    }

    let pos = parse_node(line.tokens[1], line.number)?;
    let neg = parse_node(line.tokens[2], line.number)?;
    let value = parse_value(line.tokens[3]).ok_or_else(|| NodalError::ValueParse {
        text: line.tokens[3].to_string(),
        line: line.number,
    })?;

    Ok(ComponentDef {
        component_type,
        name: tag.to_string(),
        pos,
        neg,
        value,
        line: line.number,
    })
}

fn parse_node(text: &str, line: usize) -> Result<usize> {
    if text.eq_ignore_ascii_case("GND") {
        return Ok(0);
    }
    text.parse::<usize>()
        .map_err(|_| NodalError::parse(line, format!("invalid node '{}'", text)))
}
