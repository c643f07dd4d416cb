//! Linear constraints for polyhedral representation.
//!
//! A constraint relates a linear expression to zero:
//! - Equality: expr = 0
//! - Non-strict inequalities: expr >= 0, expr <= 0
//! - Strict inequalities: expr > 0, expr < 0

use crate::polyhedral::expr::{Coefficient, LinearExpression};
use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use serde::{Serialize, Deserialize};
use std::fmt;

/// Relation between a constraint's expression and zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConstraintType {
    /// expr = 0
    Equal,
    /// expr < 0
    LessThan,
    /// expr <= 0
    LessOrEqual,
    /// expr > 0
    GreaterThan,
    /// expr >= 0
    GreaterOrEqual,
}

impl ConstraintType {
    /// Check whether `value` stands in this relation to zero.
    pub fn holds(self, value: &BigInt) -> bool {
        match self {
            ConstraintType::Equal => value.is_zero(),
            ConstraintType::LessThan => value.is_negative(),
            ConstraintType::LessOrEqual => !value.is_positive(),
            ConstraintType::GreaterThan => value.is_positive(),
            ConstraintType::GreaterOrEqual => !value.is_negative(),
        }
    }

    /// Whether the relation excludes zero.
    pub fn is_strict(self) -> bool {
        matches!(self, ConstraintType::LessThan | ConstraintType::GreaterThan)
    }

    fn symbol(self) -> &'static str {
        match self {
            ConstraintType::Equal => "=",
            ConstraintType::LessThan => "<",
            ConstraintType::LessOrEqual => "<=",
            ConstraintType::GreaterThan => ">",
            ConstraintType::GreaterOrEqual => ">=",
        }
    }
}

/// A linear constraint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Constraint {
    /// The linear expression compared against zero
    pub expr: LinearExpression,
    /// Relation to zero
    pub kind: ConstraintType,
}

impl Constraint {
    /// Create a new constraint.
    pub fn new(expr: LinearExpression, kind: ConstraintType) -> Self {
        Self { expr, kind }
    }

    /// Create an equality constraint: expr = 0
    pub fn eq_zero(expr: LinearExpression) -> Self {
        Self::new(expr, ConstraintType::Equal)
    }

    /// Create an inequality constraint: expr >= 0
    pub fn ge_zero(expr: LinearExpression) -> Self {
        Self::new(expr, ConstraintType::GreaterOrEqual)
    }

    /// Create a lower bound constraint: x[dim] >= lower
    pub fn lower_bound(dim: usize, lower: i64, space_dim: usize) -> Self {
        let mut expr = LinearExpression::var(dim, space_dim);
        expr.set_inhomogeneous(-BigInt::from(lower));
        Self::ge_zero(expr)
    }

    /// Create an upper bound constraint: x[dim] <= upper
    pub fn upper_bound(dim: usize, upper: i64, space_dim: usize) -> Self {
        let mut expr = -LinearExpression::var(dim, space_dim);
        expr.set_inhomogeneous(BigInt::from(upper));
        Self::ge_zero(expr)
    }

    /// Space dimension of the underlying expression.
    pub fn space_dimension(&self) -> usize {
        self.expr.space_dimension()
    }

    /// Coefficient of dimension `dim`.
    pub fn coefficient(&self, dim: usize) -> Coefficient {
        self.expr.coefficient(dim)
    }

    /// The inhomogeneous term.
    pub fn inhomogeneous_term(&self) -> &Coefficient {
        self.expr.inhomogeneous_term()
    }

    /// Check if this is an equality constraint.
    pub fn is_equality(&self) -> bool {
        matches!(self.kind, ConstraintType::Equal)
    }

    /// Check if this constraint is satisfied by the given point.
    pub fn is_satisfied(&self, point: &[BigInt]) -> bool {
        self.kind.holds(&self.expr.evaluate(point))
    }

    /// Check if the constraint can never hold (constant and false).
    pub fn is_trivially_false(&self) -> bool {
        self.expr.is_constant() && !self.kind.holds(self.expr.inhomogeneous_term())
    }

    /// Convert to string with given names.
    pub fn to_string_with_names(&self, dim_names: &[String]) -> String {
        format!("{} {} 0", self.expr.to_string_with_names(dim_names), self.kind.symbol())
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_with_names(&[]))
    }
}

/// A conjunction of constraints over one space.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintSystem {
    constraints: Vec<Constraint>,
    space_dim: usize,
}

impl ConstraintSystem {
    /// Create an empty constraint system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty constraint system over `space_dim` dimensions.
    pub fn with_dimension(space_dim: usize) -> Self {
        Self {
            constraints: Vec::new(),
            space_dim,
        }
    }

    /// Insert a constraint, widening the system's space if needed.
    pub fn insert(&mut self, constraint: Constraint) {
        self.space_dim = self.space_dim.max(constraint.space_dimension());
        self.constraints.push(constraint);
    }

    /// Iterate over the constraints in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Constraint> + '_ {
        self.constraints.iter()
    }

    /// Check whether the system already holds `constraint` verbatim.
    pub fn contains(&self, constraint: &Constraint) -> bool {
        self.constraints.contains(constraint)
    }

    /// Space dimension of the system.
    pub fn space_dimension(&self) -> usize {
        self.space_dim
    }

    pub(crate) fn widen(&mut self, space_dim: usize) {
        self.space_dim = self.space_dim.max(space_dim);
    }

    /// Check if a point satisfies all constraints.
    pub fn is_satisfied(&self, point: &[BigInt]) -> bool {
        self.constraints.iter().all(|c| c.is_satisfied(point))
    }

    /// Check if the system is empty (has no constraints).
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Get the number of constraints.
    pub fn len(&self) -> usize {
        self.constraints.len()
    }
}

impl<'a> IntoIterator for &'a ConstraintSystem {
    type Item = &'a Constraint;
    type IntoIter = std::slice::Iter<'a, Constraint>;

    fn into_iter(self) -> Self::IntoIter {
        self.constraints.iter()
    }
}

impl FromIterator<Constraint> for ConstraintSystem {
    fn from_iter<I: IntoIterator<Item = Constraint>>(iter: I) -> Self {
        let mut cs = Self::new();
        for c in iter {
            cs.insert(c);
        }
        cs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(values: &[i64]) -> Vec<BigInt> {
        values.iter().map(|&v| BigInt::from(v)).collect()
    }

    #[test]
    fn test_lower_bound() {
        // i >= 0
        let c = Constraint::lower_bound(0, 0, 2);
        assert!(c.is_satisfied(&point(&[0, 0])));
        assert!(c.is_satisfied(&point(&[5, 0])));
        assert!(!c.is_satisfied(&point(&[-1, 0])));
    }

    #[test]
    fn test_upper_bound() {
        // i <= 10
        let c = Constraint::upper_bound(0, 10, 2);
        assert!(c.is_satisfied(&point(&[10, 0])));
        assert!(!c.is_satisfied(&point(&[11, 0])));
    }

    #[test]
    fn test_extreme_bounds() {
        let lower = Constraint::lower_bound(0, i64::MIN, 1);
        assert_eq!(*lower.inhomogeneous_term(), -BigInt::from(i64::MIN));
        assert!(lower.is_satisfied(&point(&[i64::MIN])));

        let upper = Constraint::upper_bound(0, i64::MAX, 1);
        assert!(upper.is_satisfied(&point(&[i64::MAX])));
    }

    #[test]
    fn test_strict_kinds() {
        // x - 5
        let expr = LinearExpression::from_parts([1i64], -5);
        let gt = Constraint::new(expr.clone(), ConstraintType::GreaterThan);
        let lt = Constraint::new(expr.clone(), ConstraintType::LessThan);
        let le = Constraint::new(expr, ConstraintType::LessOrEqual);
        assert!(!gt.is_satisfied(&point(&[5])));
        assert!(gt.is_satisfied(&point(&[6])));
        assert!(lt.is_satisfied(&point(&[4])));
        assert!(!lt.is_satisfied(&point(&[5])));
        assert!(le.is_satisfied(&point(&[5])));
        assert!(ConstraintType::LessThan.is_strict());
        assert!(!ConstraintType::Equal.is_strict());
    }

    #[test]
    fn test_trivially_false() {
        let c = Constraint::ge_zero(LinearExpression::from_parts([0i64, 0], -1));
        assert!(c.is_trivially_false());
        assert!(!Constraint::lower_bound(0, 3, 1).is_trivially_false());
    }

    #[test]
    fn test_constraint_system() {
        let mut sys = ConstraintSystem::new();
        // 0 <= i <= 9, 0 <= j <= 9
        sys.insert(Constraint::lower_bound(0, 0, 2));
        sys.insert(Constraint::upper_bound(0, 9, 2));
        sys.insert(Constraint::lower_bound(1, 0, 2));
        sys.insert(Constraint::upper_bound(1, 9, 2));

        assert_eq!(sys.len(), 4);
        assert_eq!(sys.space_dimension(), 2);
        assert!(sys.is_satisfied(&point(&[0, 0])));
        assert!(sys.is_satisfied(&point(&[9, 9])));
        assert!(!sys.is_satisfied(&point(&[10, 0])));
        assert!(!sys.is_satisfied(&point(&[-1, 0])));
    }

    #[test]
    fn test_system_widens_to_widest_constraint() {
        let sys: ConstraintSystem = vec![
            Constraint::lower_bound(0, 0, 1),
            Constraint::lower_bound(2, 0, 3),
        ]
        .into_iter()
        .collect();
        assert_eq!(sys.space_dimension(), 3);
    }

    #[test]
    fn test_display() {
        let c = Constraint::upper_bound(0, 9, 1);
        assert_eq!(c.to_string_with_names(&["i".to_string()]), "-i + 9 >= 0");
    }
}
