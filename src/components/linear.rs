//! Linear passive components.

use crate::error::{NodalError, Result};

/// A resistor component.
///
/// Resistance is strictly positive and finite, so the conductance `1/R`
/// used by the assembler is always defined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resistor {
    resistance: f64,
}

impl Resistor {
    /// Create a new resistor.
    pub fn new(resistance: f64) -> Result<Self> {
        if !resistance.is_finite() {
            return Err(NodalError::invalid_component(
                "resistor",
                format!("resistance must be finite, got {}", resistance),
            ));
        }
        if resistance <= 0.0 {
            return Err(NodalError::invalid_component(
                "resistor",
                format!("resistance must be positive, got {}", resistance),
            ));
        }
        Ok(Self { resistance })
    }

    /// Get the resistance in ohms.
    pub fn resistance(&self) -> f64 {
        self.resistance
    }

    /// Get the conductance (1/R) in siemens.
    pub fn conductance(&self) -> f64 {
        1.0 / self.resistance
    }
}
