//! Topology accounting: how many unknowns a netlist produces and where
//! each one lives in the MNA system.

use std::collections::BTreeSet;

use super::netlist::Netlist;
use super::types::{BranchId, NodeId};
use crate::error::{NodalError, Result};

/// Number of non-ground node voltages `n`.
///
/// This is the highest node index referenced, or 0 for an empty netlist.
pub fn count_num_voltages(netlist: &Netlist) -> usize {
    netlist.iter().map(|e| e.max_node()).max().unwrap_or(0)
}

/// Number of voltage sources `m`, i.e. branch-current unknowns.
pub fn count_num_voltage_sources(netlist: &Netlist) -> usize {
    netlist
        .iter()
        .filter(|e| e.component.is_voltage_source())
        .count()
}

/// Non-ground nodes in `1..=n` that no entry references.
///
/// Each one leaves an all-zero row in the system, so the solve will be singular.
pub fn unused_nodes(netlist: &Netlist) -> Vec<NodeId> {
    let n = count_num_voltages(netlist);
    let used: BTreeSet<usize> = netlist.iter().flat_map(|e| [e.pos.0, e.neg.0]).collect();
    (1..=n).filter(|k| !used.contains(k)).map(NodeId).collect()
}

/// Derived dimensions of the MNA system for one netlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topology {
    /// Number of non-ground nodes
    pub num_nodes: usize,
    /// Number of voltage sources
    pub num_voltage_sources: usize,
}

impl Topology {
    /// Analyze a netlist.
    pub fn of(netlist: &Netlist) -> Self {
        Self {
            num_nodes: count_num_voltages(netlist),
            num_voltage_sources: count_num_voltage_sources(netlist),
        }
    }

    /// Total number of unknowns, `n + m`.
    pub fn size(&self) -> usize {
        self.num_nodes + self.num_voltage_sources
    }

    /// Get the matrix index for a node voltage.
    /// Returns None for ground, and fails for nodes beyond `n`.
    pub fn node_index(&self, node: NodeId) -> Result<Option<usize>> {
        if node.0 > self.num_nodes {
            return Err(NodalError::topology_mismatch(node.0, self.num_nodes));
        }
        Ok(node.matrix_index())
    }

    /// Get the matrix index for a branch current.
    pub fn branch_index(&self, branch: BranchId) -> usize {
        self.num_nodes + branch.0
    }
}
