//! Syntax tree types for the netlist format.

use crate::circuit::NetlistEntry;
use crate::components::Component;
use crate::error::{NodalError, Result};

/// Component types supported by the netlist format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentType {
    /// Resistor
    Resistor,
    /// Voltage Source
    VoltageSource,
    /// Current Source
    CurrentSource,
}

impl ComponentType {
    /// Classify a device tag by its leading letter (case-sensitive).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.chars().next()? {
            'R' => Some(ComponentType::Resistor),
            'V' => Some(ComponentType::VoltageSource),
            'I' => Some(ComponentType::CurrentSource),
            _ => None,
        }
    }
}

/// A component definition from one netlist line.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentDef {
    /// Component type
    pub component_type: ComponentType,
    /// Device name (the tag token, e.g. "R1")
    pub name: String,
    /// Positive node index
    pub pos: usize,
    /// Negative node index
    pub neg: usize,
    /// Decoded value (ohms, volts or amperes)
    pub value: f64,
    /// Source line number for error reporting
    pub line: usize,
}

impl ComponentDef {
    /// Build the netlist entry for this definition.
    pub fn into_entry(self) -> Result<NetlistEntry> {
        let component = match self.component_type {
            ComponentType::Resistor => Component::resistor(self.value),
            ComponentType::VoltageSource => Component::voltage_source(self.value),
            ComponentType::CurrentSource => Component::current_source(self.value),
        }
        .map_err(|e| match e {
            NodalError::InvalidComponent { message, .. } => NodalError::invalid_component(
                format!("{} (line {})", self.name, self.line),
                message,
            ),
            other => other,
        })?;

        Ok(NetlistEntry::new(component, self.pos, self.neg).with_name(self.name))
    }
}
