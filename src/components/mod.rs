//! Component models for network analysis.
//!
//! This module provides models for the supported circuit elements:
//! - Passive: Resistor
//! - Sources: Voltage Source, Current Source
//!
//! The set is closed. The assembler dispatches on [`Component`] with an
//! exhaustive `match`, so adding a variant forces every stamp site to handle it.

mod linear;
mod sources;

pub use linear::Resistor;
pub use sources::{CurrentSource, VoltageSource};

use crate::error::Result;

/// A circuit component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Component {
    Resistor(Resistor),
    VoltageSource(VoltageSource),
    CurrentSource(CurrentSource),
}

impl Component {
    /// Create a resistor component. Rejects non-positive resistance.
    pub fn resistor(resistance: f64) -> Result<Self> {
        Resistor::new(resistance).map(Component::Resistor)
    }

    /// Create an independent voltage source component.
    pub fn voltage_source(voltage: f64) -> Result<Self> {
        VoltageSource::new(voltage).map(Component::VoltageSource)
    }

    /// Create an independent current source component.
    pub fn current_source(current: f64) -> Result<Self> {
        CurrentSource::new(current).map(Component::CurrentSource)
    }

    /// Check if this component introduces a branch-current unknown.
    pub fn is_voltage_source(&self) -> bool {
        matches!(self, Component::VoltageSource(_))
    }

    /// Short human-readable name of the component kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Component::Resistor(_) => "resistor",
            Component::VoltageSource(_) => "voltage source",
            Component::CurrentSource(_) => "current source",
        }
    }

    /// The primary electrical parameter (ohms, volts or amperes).
    pub fn value(&self) -> f64 {
        match self {
            Component::Resistor(r) => r.resistance(),
            Component::VoltageSource(v) => v.voltage(),
            Component::CurrentSource(i) => i.current(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_dispatch() {
        let r = Component::resistor(2.0).unwrap();
        let v = Component::voltage_source(32.0).unwrap();
        let i = Component::current_source(0.25).unwrap();

        assert!(!r.is_voltage_source());
        assert!(v.is_voltage_source());
        assert!(!i.is_voltage_source());

        assert_eq!(r.kind_name(), "resistor");
        assert_eq!(v.value(), 32.0);
        assert_eq!(i.value(), 0.25);
    }

    #[test]
    fn test_component_rejects_invalid_resistor() {
        assert!(Component::resistor(0.0).is_err());
        assert!(Component::resistor(-4.0).is_err());
    }
}
