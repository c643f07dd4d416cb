//! Polyhedral data structures.
//!
//! This module provides the exact-arithmetic side of the bridge:
//! - Linear expressions over `BigInt` coefficients
//! - Constraints of the five relation kinds and constraint systems
//! - Constraint-backed convex polyhedra
//! - Lexicographic ordering of expressions

pub mod expr;
pub mod constraint;
pub mod polyhedron;
pub mod lexico;

pub use expr::{Coefficient, LinearExpression};
pub use constraint::{Constraint, ConstraintSystem, ConstraintType};
pub use polyhedron::Polyhedron;
pub use lexico::{compare as lexico_compare, LexicoKey};
