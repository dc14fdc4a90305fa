//! MNA matrix assembly.

use log::{debug, trace};
use nalgebra::{DMatrix, DVector};

use super::stamp::{stamp_conductance, stamp_current_source, stamp_voltage_source};
use crate::circuit::{BranchId, Netlist, Topology};
use crate::components::Component;
use crate::error::Result;

/// An assembled MNA system Ax = b.
///
/// Built once per netlist by [`generate_mna`] and never modified afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct MnaSystem {
    topology: Topology,
    a: DMatrix<f64>,
    b: DVector<f64>,
}

impl MnaSystem {
    /// Number of non-ground nodes `n`.
    pub fn num_nodes(&self) -> usize {
        self.topology.num_nodes
    }

    /// Number of voltage sources `m`.
    pub fn num_voltage_sources(&self) -> usize {
        self.topology.num_voltage_sources
    }

    /// Matrix dimension `n + m`.
    pub fn size(&self) -> usize {
        self.topology.size()
    }

    /// The topology the system was built from.
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Coefficient matrix A.
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.a
    }

    /// Right-hand side vector b.
    pub fn rhs(&self) -> &DVector<f64> {
        &self.b
    }

    /// Take ownership of A and b.
    pub fn into_parts(self) -> (DMatrix<f64>, DVector<f64>) {
        (self.a, self.b)
    }
}

/// Assemble the MNA system for a netlist.
///
/// Entries are stamped in netlist order. The k-th voltage source owns
/// row/column `n + k`; this is the same traversal order used by
/// [`count_num_voltage_sources`](crate::circuit::count_num_voltage_sources).
pub fn generate_mna(netlist: &Netlist) -> Result<MnaSystem> {
    let topology = Topology::of(netlist);
    let size = topology.size();
    debug!(
        "assembling MNA system: n={} m={} size={}",
        topology.num_nodes, topology.num_voltage_sources, size
    );

    let mut a = DMatrix::zeros(size, size);
    let mut b = DVector::zeros(size);
    let mut mi = 0usize;

    for entry in netlist {
        let n_pos = topology.node_index(entry.pos)?;
        let n_neg = topology.node_index(entry.neg)?;

        match entry.component {
            Component::Resistor(r) => {
                let g = r.conductance();
                trace!("stamp G={} between {} and {}", g, entry.pos, entry.neg);
                stamp_conductance(&mut a, n_pos, n_neg, g);
            }

            Component::VoltageSource(v) => {
                let br = topology.branch_index(BranchId(mi));
                trace!(
                    "stamp V={} between {} and {} on row {}",
                    v.voltage(),
                    entry.pos,
                    entry.neg,
                    br
                );
                stamp_voltage_source(&mut a, &mut b, n_pos, n_neg, br, v.voltage());
                mi += 1;
            }

            Component::CurrentSource(i) => {
                trace!("stamp I={} into {} from {}", i.current(), entry.pos, entry.neg);
                stamp_current_source(&mut b, n_pos, n_neg, i.current());
            }
        }
    }

    debug_assert_eq!(mi, topology.num_voltage_sources);

    Ok(MnaSystem { topology, a, b })
}
