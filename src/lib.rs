//! # Nodal Core
//!
//! Steady-state analysis of linear resistive networks.
//!
//! This library provides:
//! - A closed component model (resistor, voltage source, current source)
//! - Ordered netlists over integer nodes with node 0 as ground
//! - Modified Nodal Analysis (MNA) assembly of the system matrix A and vector b
//! - A dense LU solve that reports singular networks instead of guessing
//! - A plain-text netlist format with SI magnitude suffixes
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`components`] - Component models
//! - [`circuit`] - Netlists and topology accounting
//! - [`solver`] - MNA stamping, assembly, solving and result interpretation
//! - [`dsl`] - Parser for the netlist text format
//! - [`symbolic`] - Variable naming and expression trees
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! RUST_LOG=debug nodal bridge.net --matrix
//! ```
//!
//! ### Library
//!
//! ```
//! use nodal_core::{analyze, Component, Netlist};
//!
//! let mut netlist = Netlist::new();
//! netlist
//!     .add(Component::voltage_source(10.0)?, 1, 0)
//!     .add(Component::resistor(1000.0)?, 1, 2)
//!     .add(Component::resistor(1000.0)?, 2, 0);
//!
//! let solution = analyze(&netlist)?;
//! assert!((solution.node_voltages()[1] - 5.0).abs() < 1e-12);
//! # Ok::<(), nodal_core::NodalError>(())
//! ```
//!
//! ## Analysis Method
//!
//! For a netlist with `n` non-ground nodes and `m` voltage sources:
//!
//! 1. Count `n` (highest node index) and `m` (voltage sources, in order)
//! 2. Stamp every component into an (n+m)×(n+m) matrix A and vector b
//! 3. Solve Ax = b
//! 4. Read node voltages from x[0..n) and source currents from x[n..n+m)

pub mod circuit;
pub mod components;
pub mod dsl;
pub mod error;
pub mod solver;
pub mod symbolic;

// Re-export main types for convenience
pub use circuit::{Netlist, NetlistEntry, NodeId};
pub use components::Component;
pub use error::{NodalError, Result};
pub use solver::{analyze, generate_mna, DcAnalysis, MnaSystem, Solution};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmDcSolver;
