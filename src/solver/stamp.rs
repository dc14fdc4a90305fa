//! Element stamps.
//!
//! Each stamp writes the local contribution of one component into a
//! caller-owned matrix/vector pair and touches nothing else. Indices are
//! already mapped to matrix rows: `None` means the terminal is grounded
//! and its row/column is omitted.

use nalgebra::{DMatrix, DVector};

/// Stamp a conductance between two nodes.
/// For a conductance G between nodes n1 and n2:
///   A[n1,n1] += G
///   A[n2,n2] += G
///   A[n1,n2] -= G
///   A[n2,n1] -= G
pub fn stamp_conductance(a: &mut DMatrix<f64>, n1: Option<usize>, n2: Option<usize>, g: f64) {
    if let Some(i) = n1 {
        a[(i, i)] += g;
    }
    if let Some(j) = n2 {
        a[(j, j)] += g;
    }
    if let (Some(i), Some(j)) = (n1, n2) {
        a[(i, j)] -= g;
        a[(j, i)] -= g;
    }
}

/// Stamp a voltage source between two nodes with branch current at index `br`.
/// V[n+] - V[n-] = E
///
/// The coupling entries are assigned, not accumulated; `br` is owned by
/// exactly one source.
pub fn stamp_voltage_source(
    a: &mut DMatrix<f64>,
    b: &mut DVector<f64>,
    n_pos: Option<usize>,
    n_neg: Option<usize>,
    br: usize,
    voltage: f64,
) {
    if let Some(i) = n_pos {
        a[(i, br)] = 1.0;
        a[(br, i)] = 1.0;
    }
    if let Some(j) = n_neg {
        a[(j, br)] = -1.0;
        a[(br, j)] = -1.0;
    }
    b[br] = voltage;
}

/// Stamp a current source between two nodes.
/// The current is injected into n+ and drawn from n-.
pub fn stamp_current_source(
    b: &mut DVector<f64>,
    n_pos: Option<usize>,
    n_neg: Option<usize>,
    current: f64,
) {
    if let Some(i) = n_pos {
        b[i] += current;
    }
    if let Some(j) = n_neg {
        b[j] -= current;
    }
}
