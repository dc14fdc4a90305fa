//! Interpretation of the MNA solution vector.

use nalgebra::DVector;

use crate::circuit::{BranchId, NodeId, VarIndex};

/// Solution of an MNA system.
///
/// `x[0..n)` holds node voltages (index i is node i+1, relative to ground);
/// `x[n..n+m)` holds the branch current of each voltage source in netlist
/// order. A positive branch current flows into the source's positive
/// terminal from the external network.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    num_nodes: usize,
    num_voltage_sources: usize,
    x: DVector<f64>,
}

impl Solution {
    /// Wrap a solution vector of length `num_nodes + num_voltage_sources`.
    pub(crate) fn new(num_nodes: usize, num_voltage_sources: usize, x: DVector<f64>) -> Self {
        debug_assert_eq!(x.len(), num_nodes + num_voltage_sources);
        Self {
            num_nodes,
            num_voltage_sources,
            x,
        }
    }

    /// Number of non-ground nodes.
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Number of voltage sources.
    pub fn num_voltage_sources(&self) -> usize {
        self.num_voltage_sources
    }

    /// Node voltages, node 1 first.
    pub fn node_voltages(&self) -> &[f64] {
        &self.x.as_slice()[..self.num_nodes]
    }

    /// Voltage source branch currents, in netlist order.
    pub fn source_currents(&self) -> &[f64] {
        &self.x.as_slice()[self.num_nodes..]
    }

    /// The raw solution vector.
    pub fn as_slice(&self) -> &[f64] {
        self.x.as_slice()
    }

    /// Get the voltage at a node. Ground is 0.0; unknown nodes are None.
    pub fn voltage(&self, node: NodeId) -> Option<f64> {
        match node.matrix_index() {
            None => Some(0.0),
            Some(i) => self.node_voltages().get(i).copied(),
        }
    }

    /// Voltage of `a` measured against `b`.
    pub fn voltage_between(&self, a: NodeId, b: NodeId) -> Option<f64> {
        Some(self.voltage(a)? - self.voltage(b)?)
    }

    /// Get the current through the given voltage source branch.
    pub fn source_current(&self, branch: BranchId) -> Option<f64> {
        self.source_currents().get(branch.0).copied()
    }

    /// Look up any unknown by variable index.
    pub fn get(&self, var: VarIndex) -> Option<f64> {
        match var {
            VarIndex::Voltage(node) => self.voltage(node),
            VarIndex::Current(branch) => self.source_current(branch),
        }
    }
}
