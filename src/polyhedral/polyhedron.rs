//! Convex polyhedra over exact integer dimensions.
//!
//! A [`Polyhedron`] is the conjunction of a [`ConstraintSystem`]. Only the
//! primitives needed to move iteration domains in and out of the matrix
//! format and to reshape them are provided: construction, constraint
//! insertion, widening and dimension permutation.

use crate::polyhedral::constraint::{Constraint, ConstraintSystem};
use crate::polyhedral::expr::LinearExpression;
use crate::utils::errors::{BridgeResult, DimensionError, DimensionErrorKind};
use crate::utils::poly_print::PolyPrinter;
use log::trace;
use num_bigint::BigInt;
use serde::{Serialize, Deserialize};
use std::fmt;

/// A convex polyhedron defined by linear constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Polyhedron {
    space_dim: usize,
    constraints: ConstraintSystem,
}

impl Polyhedron {
    /// The whole `space_dim`-dimensional space.
    pub fn universe(space_dim: usize) -> Self {
        Self {
            space_dim,
            constraints: ConstraintSystem::with_dimension(space_dim),
        }
    }

    /// The empty polyhedron of dimension `space_dim`.
    pub fn empty(space_dim: usize) -> Self {
        let mut ph = Self::universe(space_dim);
        let mut expr = LinearExpression::with_dimension(space_dim);
        expr.set_inhomogeneous(-1);
        ph.constraints.insert(Constraint::ge_zero(expr));
        ph
    }

    /// Build a polyhedron that takes ownership of `cs`.
    pub fn from_constraint_system(cs: ConstraintSystem) -> Self {
        let space_dim = cs.space_dimension();
        let mut ph = Self::universe(space_dim);
        for c in &cs {
            ph.push_unique(c.clone());
        }
        ph
    }

    /// Number of dimensions of the ambient space.
    pub fn space_dimension(&self) -> usize {
        self.space_dim
    }

    /// The defining constraints.
    pub fn constraints(&self) -> &ConstraintSystem {
        &self.constraints
    }

    /// Intersect with the half-space or hyperplane `constraint`.
    pub fn add_constraint(&mut self, constraint: Constraint) -> BridgeResult<()> {
        self.check_fits(&constraint)?;
        self.push_unique(constraint);
        Ok(())
    }

    /// Intersect with every constraint of `cs`.
    pub fn add_constraints<'a>(
        &mut self,
        cs: impl IntoIterator<Item = &'a Constraint>,
    ) -> BridgeResult<()> {
        for c in cs {
            self.add_constraint(c.clone())?;
        }
        Ok(())
    }

    /// Append `count` unconstrained dimensions after the existing ones.
    pub fn add_space_dimensions_and_embed(&mut self, count: usize) {
        self.space_dim += count;
        self.constraints.widen(self.space_dim);
    }

    /// Rename dimension `i` to `map[i]`.
    ///
    /// `map` must be a permutation of `0..space_dimension()`.
    pub fn map_space_dimensions(&mut self, map: &[usize]) -> BridgeResult<()> {
        check_permutation(map, self.space_dim)?;
        trace!("remapping {}-dimensional polyhedron with {:?}", self.space_dim, map);

        let remapped = self
            .constraints
            .iter()
            .map(|c| Constraint::new(c.expr.permute(map), c.kind))
            .collect::<Vec<_>>();
        self.constraints = ConstraintSystem::with_dimension(self.space_dim);
        for c in remapped {
            self.push_unique(c);
        }
        Ok(())
    }

    /// Check whether `point` lies inside the polyhedron.
    pub fn contains(&self, point: &[BigInt]) -> BridgeResult<bool> {
        if point.len() != self.space_dim {
            return Err(DimensionError::new(
                DimensionErrorKind::PointMismatch,
                format!(
                    "point has {} coordinates, polyhedron has {} dimensions",
                    point.len(),
                    self.space_dim
                ),
            )
            .into());
        }
        Ok(self.constraints.is_satisfied(point))
    }

    /// Check for a constraint that can never hold.
    pub fn is_obviously_empty(&self) -> bool {
        self.constraints.iter().any(Constraint::is_trivially_false)
    }

    /// Enumerate the integer points inside the box `lower[i] <= x[i] <= upper[i]`.
    ///
    /// Points come out in lexicographic order. Intended for small boxes.
    pub fn integer_points(&self, lower: &[i64], upper: &[i64]) -> BridgeResult<Vec<Vec<i64>>> {
        if lower.len() != self.space_dim || upper.len() != self.space_dim {
            return Err(DimensionError::new(
                DimensionErrorKind::PointMismatch,
                format!(
                    "enumeration box has {}/{} bounds, polyhedron has {} dimensions",
                    lower.len(),
                    upper.len(),
                    self.space_dim
                ),
            )
            .into());
        }

        let mut points = Vec::new();
        if lower.iter().zip(upper).any(|(lo, hi)| lo > hi) {
            return Ok(points);
        }

        let mut current = lower.to_vec();
        loop {
            let exact: Vec<BigInt> = current.iter().map(|&v| BigInt::from(v)).collect();
            if self.constraints.is_satisfied(&exact) {
                points.push(current.clone());
            }

            // Odometer step, last dimension fastest.
            let mut d = self.space_dim;
            loop {
                if d == 0 {
                    return Ok(points);
                }
                d -= 1;
                if current[d] < upper[d] {
                    current[d] += 1;
                    break;
                }
                current[d] = lower[d];
            }
        }
    }

    fn check_fits(&self, constraint: &Constraint) -> BridgeResult<()> {
        if constraint.space_dimension() > self.space_dim {
            return Err(DimensionError::new(
                DimensionErrorKind::ConstraintTooWide,
                format!(
                    "constraint over {} dimensions added to a {}-dimensional polyhedron",
                    constraint.space_dimension(),
                    self.space_dim
                ),
            )
            .into());
        }
        Ok(())
    }

    fn push_unique(&mut self, constraint: Constraint) {
        if !self.constraints.contains(&constraint) {
            self.constraints.insert(constraint);
        }
    }

    /// Convert to string with given dimension names.
    pub fn to_string_with_names(&self, dim_names: &[String]) -> String {
        let mut printer = PolyPrinter::new().with_names(dim_names.to_vec());
        printer.print_polyhedron(self);
        printer.take_output()
    }
}

impl fmt::Display for Polyhedron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_with_names(&[]))
    }
}

fn check_permutation(map: &[usize], space_dim: usize) -> BridgeResult<()> {
    let invalid = |message: String| -> BridgeResult<()> {
        Err(DimensionError::new(DimensionErrorKind::InvalidPermutation, message).into())
    };
    if map.len() != space_dim {
        return invalid(format!(
            "dimension map has {} entries for a {}-dimensional space",
            map.len(),
            space_dim
        ));
    }
    let mut seen = vec![false; space_dim];
    for (i, &target) in map.iter().enumerate() {
        if target >= space_dim {
            return invalid(format!("dimension {} mapped outside the space to {}", i, target));
        }
        if std::mem::replace(&mut seen[target], true) {
            return invalid(format!("dimension {} is the image of two dimensions", target));
        }
    }
    Ok(())
}
