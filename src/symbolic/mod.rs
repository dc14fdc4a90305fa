//! Symbolic variables and expressions.
//!
//! Variable names are handed out by an explicit [`VariableAllocator`], so
//! independent sessions each own their naming state and never collide
//! with one another.

use std::collections::HashSet;
use std::fmt;

/// Default base name for variables.
pub const DEFAULT_VARIABLE_NAME: &str = "v";

/// A named symbolic unknown.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variable {
    name: String,
}

impl Variable {
    /// The variable's unique name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Hands out unique variable names.
///
/// A request for `base` yields `base` itself when free; otherwise
/// `base{k}` where `k` is drawn from a counter shared by all bases of
/// this allocator.
#[derive(Debug, Clone, Default)]
pub struct VariableAllocator {
    next_id: usize,
    taken: HashSet<String>,
}

impl VariableAllocator {
    /// Create an allocator with no names taken.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a variable with the default base name.
    pub fn fresh(&mut self) -> Variable {
        self.fresh_named(DEFAULT_VARIABLE_NAME)
    }

    /// Allocate a variable, preferring `base` as its name.
    pub fn fresh_named(&mut self, base: &str) -> Variable {
        let mut name = base.to_string();
        while self.taken.contains(&name) {
            name = format!("{}{}", base, self.next_id);
            self.next_id += 1;
        }
        self.taken.insert(name.clone());
        Variable { name }
    }

    /// Check if a name has been handed out.
    pub fn is_taken(&self, name: &str) -> bool {
        self.taken.contains(name)
    }

    /// Number of names handed out.
    pub fn len(&self) -> usize {
        self.taken.len()
    }

    /// Check if no names have been handed out.
    pub fn is_empty(&self) -> bool {
        self.taken.is_empty()
    }
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Plus,
    Minus,
    Times,
    Divide,
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            BinOp::Plus => "+",
            BinOp::Minus => "-",
            BinOp::Times => "*",
            BinOp::Divide => "/",
        };
        f.write_str(symbol)
    }
}

/// A symbolic expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// The constant zero
    Zero,
    /// A variable reference
    Var(Variable),
    /// A binary operation
    Binary {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    /// Build a binary expression.
    pub fn binary(op: BinOp, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }
}

impl From<Variable> for Expr {
    fn from(v: Variable) -> Self {
        Expr::Var(v)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Zero => write!(f, "0"),
            Expr::Var(v) => write!(f, "{}", v),
            Expr::Binary { op, lhs, rhs } => write!(f, "({} {} {})", lhs, op, rhs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_names() {
        let mut alloc = VariableAllocator::new();
        let x = alloc.fresh();
        let y = alloc.fresh();
        let z = alloc.fresh();
        assert_eq!(format!("{} {} {}", x, y, z), "v v0 v1");
        assert_eq!(x, x.clone());
        assert_ne!(x, y);
        assert_eq!(alloc.len(), 3);
    }

    #[test]
    fn test_counter_shared_across_bases() {
        let mut alloc = VariableAllocator::new();
        assert_eq!(alloc.fresh_named("i").name(), "i");
        assert_eq!(alloc.fresh_named("i").name(), "i0");
        assert_eq!(alloc.fresh_named("v").name(), "v");
        assert_eq!(alloc.fresh_named("v").name(), "v1");
        assert!(alloc.is_taken("i0"));
        assert!(!alloc.is_taken("v0"));
    }

    #[test]
    fn test_skips_names_already_taken() {
        let mut alloc = VariableAllocator::new();
        alloc.fresh_named("v0");
        let a = alloc.fresh();
        let b = alloc.fresh();
        assert_eq!(a.name(), "v");
        assert_eq!(b.name(), "v1");
    }

    #[test]
    fn test_allocators_are_independent() {
        let mut first = VariableAllocator::new();
        let mut second = VariableAllocator::new();
        assert_eq!(first.fresh().name(), "v");
        assert_eq!(second.fresh().name(), "v");
        assert_eq!(first.fresh().name(), "v0");
        assert!(second.is_taken("v"));
        assert!(!second.is_taken("v0"));
    }

    #[test]
    fn test_expr_display() {
        let mut alloc = VariableAllocator::new();
        let x = alloc.fresh();
        let y = alloc.fresh();
        let sum = Expr::binary(BinOp::Plus, x.clone().into(), y.into());
        let ratio = Expr::binary(BinOp::Divide, sum, x.into());
        assert_eq!(ratio.to_string(), "((v + v0) / v)");
        assert_eq!(Expr::Zero.to_string(), "0");
        assert_eq!(BinOp::Minus.to_string(), "-");
        assert_eq!(BinOp::Times.to_string(), "*");
    }
}
