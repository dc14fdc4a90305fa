//! Network representation and topology accounting.
//!
//! A [`Netlist`] is an ordered list of components wired between integer
//! nodes, with node 0 as ground. The [`topology`] functions derive the
//! dimensions of the MNA system from it.

mod netlist;
pub mod topology;
mod types;

pub use netlist::{Netlist, NetlistEntry};
pub use topology::{count_num_voltage_sources, count_num_voltages, unused_nodes, Topology};
pub use types::*;
