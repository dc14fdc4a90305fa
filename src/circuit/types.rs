//! Core types for network representation.

use std::fmt;

/// A node index in the network.
/// Node 0 is always ground and never receives a matrix row/column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The ground node (always index 0).
    pub const GROUND: NodeId = NodeId(0);

    /// Check if this is the ground node.
    pub fn is_ground(&self) -> bool {
        self.0 == 0
    }

    /// Row/column of this node's voltage in the MNA system.
    /// Returns None for ground.
    pub fn matrix_index(&self) -> Option<usize> {
        self.0.checked_sub(1)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ground() {
            write!(f, "GND")
        } else {
            write!(f, "N{}", self.0)
        }
    }
}

/// Ordinal of a voltage source among all voltage sources, in netlist order.
///
/// Branch `k` owns the auxiliary unknown at `n + k` in the MNA system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BranchId(pub usize);

impl fmt::Display for BranchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "I{}", self.0)
    }
}

/// Variable index in the MNA solution vector.
/// Can be either a node voltage or a branch current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VarIndex {
    /// Node voltage variable
    Voltage(NodeId),
    /// Branch current variable (voltage sources)
    Current(BranchId),
}

impl VarIndex {
    /// Get the raw index into the solution vector for a system with
    /// `num_nodes` non-ground nodes. Node voltages come first, then branch
    /// currents. Ground has no index.
    pub fn to_index(&self, num_nodes: usize) -> Option<usize> {
        match self {
            VarIndex::Voltage(node) => node.matrix_index(),
            VarIndex::Current(BranchId(b)) => Some(num_nodes + b),
        }
    }
}
