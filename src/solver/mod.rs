//! MNA (Modified Nodal Analysis) solver.
//!
//! This module provides the numerical engine for network analysis.
//!
//! ## Modified Nodal Analysis
//!
//! MNA assembles a system of equations Ax = b where:
//! - x contains node voltages and branch currents
//! - A is the conductance/coefficient matrix
//! - b is the source vector
//!
//! The matrix structure is:
//! ```text
//! [ G   B ] [ v ]   [ i ]
//! [ C   D ] [ j ] = [ e ]
//! ```
//!
//! where:
//! - G is the conductance matrix (node equations)
//! - B, C connect voltage sources to nodes (C = Bᵀ)
//! - D is 0 for ideal voltage sources
//! - v is the vector of node voltages
//! - j is the vector of voltage source currents
//! - i is the sum of current sources into each node
//! - e is the vector of voltage source values

mod analysis;
mod linear;
mod mna;
mod solution;
pub mod stamp;

pub use analysis::{analyze, AnalysisConfig, DcAnalysis};
pub use linear::solve_dense;
pub use mna::{generate_mna, MnaSystem};
pub use solution::Solution;

/// Default relative pivot tolerance for singularity detection.
pub const DEFAULT_PIVOT_TOLERANCE: f64 = 1e-12;
