//! DC operating point analysis of a netlist.

use log::{debug, warn};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::circuit::{unused_nodes, Netlist};
use crate::error::Result;

use super::linear::solve_dense;
use super::mna::{generate_mna, MnaSystem};
use super::solution::Solution;
use super::DEFAULT_PIVOT_TOLERANCE;

/// Configuration for the analysis.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Relative pivot magnitude below which the system is treated as singular.
    pub pivot_tolerance: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            pivot_tolerance: DEFAULT_PIVOT_TOLERANCE,
        }
    }
}

impl AnalysisConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the relative pivot tolerance.
    ///
    /// Pivots smaller than `tolerance * max|A_ij|` are rejected.
    /// - 1e-12 (default): rejects only numerically degenerate systems
    /// - 0.0: rejects only exact zero pivots
    pub fn with_pivot_tolerance(mut self, tolerance: f64) -> Self {
        self.pivot_tolerance = tolerance;
        self
    }
}

/// Steady-state analysis of linear resistive networks.
///
/// Holds no per-netlist state, so one instance can analyze any number of
/// netlists, including concurrently.
#[derive(Debug, Clone, Default)]
pub struct DcAnalysis {
    config: AnalysisConfig,
}

impl DcAnalysis {
    /// Create an analysis with the given configuration.
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Assemble the MNA system without solving it.
    pub fn assemble(&self, netlist: &Netlist) -> Result<MnaSystem> {
        let floating = unused_nodes(netlist);
        if !floating.is_empty() {
            warn!(
                "nodes {:?} are not connected to any component; the system will be singular",
                floating
            );
        }
        generate_mna(netlist)
    }

    /// Solve an already assembled system.
    pub fn solve(&self, system: &MnaSystem) -> Result<Solution> {
        let x = solve_dense(system.matrix(), system.rhs(), self.config.pivot_tolerance)?;
        Ok(Solution::new(
            system.num_nodes(),
            system.num_voltage_sources(),
            x,
        ))
    }

    /// Assemble and solve a netlist.
    pub fn run(&self, netlist: &Netlist) -> Result<Solution> {
        debug!("running DC analysis on {} entries", netlist.len());
        let system = self.assemble(netlist)?;
        self.solve(&system)
    }

    /// Analyze independent netlists in parallel, one netlist per task.
    ///
    /// Results are returned in input order; a failure in one netlist does
    /// not affect the others. Requires the `parallel` feature.
    #[cfg(feature = "parallel")]
    pub fn run_batch(&self, netlists: &[Netlist]) -> Vec<Result<Solution>> {
        debug!("running batch DC analysis on {} netlists", netlists.len());
        netlists.par_iter().map(|n| self.run(n)).collect()
    }
}

/// Analyze a netlist with the default configuration.
pub fn analyze(netlist: &Netlist) -> Result<Solution> {
    DcAnalysis::default().run(netlist)
}
