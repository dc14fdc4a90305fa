//! Voltage and current sources.

use crate::error::{NodalError, Result};

fn check_finite(kind: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(NodalError::invalid_component(
            kind,
            format!("value must be finite, got {}", value),
        ))
    }
}

/// An independent voltage source.
///
/// Voltage sources require an extra row/column in the MNA matrix for the
/// branch current. The source enforces: V+ - V- = V_source
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoltageSource {
    voltage: f64,
}

impl VoltageSource {
    /// Create a new voltage source.
    pub fn new(voltage: f64) -> Result<Self> {
        Ok(Self {
            voltage: check_finite("voltage source", voltage)?,
        })
    }

    /// Get the source voltage.
    pub fn voltage(&self) -> f64 {
        self.voltage
    }
}

/// An independent current source.
///
/// Current sources add directly to the RHS vector of the MNA equations:
/// the value is injected into the positive node and drawn from the negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrentSource {
    current: f64,
}

impl CurrentSource {
    /// Create a new current source.
    pub fn new(current: f64) -> Result<Self> {
        Ok(Self {
            current: check_finite("current source", current)?,
        })
    }

    /// Get the source current.
    pub fn current(&self) -> f64 {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sources_accept_zero_and_negative() {
        assert_eq!(VoltageSource::new(0.0).unwrap().voltage(), 0.0);
        assert_eq!(VoltageSource::new(-5.0).unwrap().voltage(), -5.0);
        assert_eq!(CurrentSource::new(-0.25).unwrap().current(), -0.25);
    }

    #[test]
    fn test_sources_reject_non_finite() {
        assert!(VoltageSource::new(f64::NAN).is_err());
        assert!(CurrentSource::new(f64::NEG_INFINITY).is_err());
    }
}
