//! Dimension insertion.
//!
//! The polyhedron primitives only widen a space at its end and permute
//! dimensions, so a new dimension is inserted at position `at` by widening and
//! then rotating the fresh trailing dimension into place:
//!
//! ```text
//! before:  x0 .. x(at-1)  x(at) .. x(dim-1)  [new]
//! after:   x0 .. x(at-1)  [new]  x(at) .. x(dim-1)
//! ```

use crate::polyhedral::polyhedron::Polyhedron;
use crate::transform::PolyTransform;
use crate::utils::errors::{
    BridgeResult, DimensionError, DimensionErrorKind, TransformError, TransformErrorKind,
};
use log::debug;
use num_traits::Zero;
use serde::{Serialize, Deserialize};

/// The permutation sending dimension `dim` to `at` and shifting `at..dim` up by one.
pub fn shift_map(at: usize, dim: usize) -> Vec<usize> {
    let mut map: Vec<usize> = (0..at).collect();
    map.extend(at + 1..=dim);
    map.push(at);
    map
}

/// Place `ph` in a `dim + 1`-dimensional space with a new unconstrained
/// dimension at index `at`.
///
/// `ph` is either `dim`-dimensional or already widened to `dim + 1`
/// dimensions with its dimension `dim` unconstrained; that dimension becomes
/// the new one. Any other input is rejected.
pub fn shift_dimensions(ph: Polyhedron, at: usize, dim: usize) -> BridgeResult<Polyhedron> {
    if at > dim {
        return Err(TransformError::new(
            TransformErrorKind::InvalidPosition,
            "shift",
            format!("cannot insert a dimension at {} in a {}-dimensional space", at, dim),
        )
        .into());
    }
    check_space(&ph, dim)?;

    let mut res = Polyhedron::universe(dim + 1);
    res.add_constraints(ph.constraints())?;
    res.map_space_dimensions(&shift_map(at, dim))?;
    debug!("inserted dimension {} into {}-dimensional polyhedron", at, dim);
    Ok(res)
}

fn check_space(ph: &Polyhedron, dim: usize) -> BridgeResult<()> {
    let space_dim = ph.space_dimension();
    if space_dim == dim {
        return Ok(());
    }
    if space_dim != dim + 1 {
        return Err(DimensionError::new(
            DimensionErrorKind::SpaceMismatch,
            format!("expected a {}-dimensional polyhedron, got {} dimensions", dim, space_dim),
        )
        .into());
    }
    if let Some(c) = ph.constraints().iter().find(|c| !c.coefficient(dim).is_zero()) {
        return Err(DimensionError::new(
            DimensionErrorKind::SpaceMismatch,
            format!("dimension {} to be inserted is constrained by `{}`", dim, c),
        )
        .into());
    }
    Ok(())
}

/// Insert an unconstrained dimension at a fixed position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Index the new dimension takes
    pub at: usize,
}

impl Shift {
    /// Insert the new dimension at `at`.
    pub fn new(at: usize) -> Self {
        Self { at }
    }
}

impl PolyTransform for Shift {
    fn apply(&self, ph: Polyhedron) -> BridgeResult<Polyhedron> {
        let dim = ph.space_dimension();
        shift_dimensions(ph, self.at, dim)
    }

    fn name(&self) -> &str {
        "shift"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polyhedral::constraint::Constraint;
    use crate::polyhedral::expr::LinearExpression;
    use crate::utils::errors::BridgeError;
    use num_bigint::BigInt;

    fn box_2d() -> Polyhedron {
        // 0 <= x0 <= 1, 5 <= x1 <= 6
        let mut ph = Polyhedron::universe(2);
        ph.add_constraint(Constraint::lower_bound(0, 0, 2)).unwrap();
        ph.add_constraint(Constraint::upper_bound(0, 1, 2)).unwrap();
        ph.add_constraint(Constraint::lower_bound(1, 5, 2)).unwrap();
        ph.add_constraint(Constraint::upper_bound(1, 6, 2)).unwrap();
        ph
    }

    fn has(ph: &Polyhedron, p: [i64; 3]) -> bool {
        ph.contains(&p.map(BigInt::from)).unwrap()
    }

    #[test]
    fn test_shift_map() {
        assert_eq!(shift_map(0, 2), vec![1, 2, 0]);
        assert_eq!(shift_map(1, 2), vec![0, 2, 1]);
        assert_eq!(shift_map(2, 2), vec![0, 1, 2]);
    }

    #[test]
    fn test_insert_front() {
        let ph = shift_dimensions(box_2d(), 0, 2).unwrap();
        assert_eq!(ph.space_dimension(), 3);
        assert!(has(&ph, [-40, 1, 5]));
        assert!(!has(&ph, [0, 5, 1]));
    }

    #[test]
    fn test_insert_middle() {
        let ph = shift_dimensions(box_2d(), 1, 2).unwrap();
        assert!(has(&ph, [1, 99, 6]));
        assert!(!has(&ph, [1, 6, 99]));
    }

    #[test]
    fn test_insert_end() {
        let ph = Shift::new(2).apply(box_2d()).unwrap();
        assert!(has(&ph, [0, 5, 12345]));
    }

    #[test]
    fn test_insert_past_end() {
        assert!(Shift::new(3).apply(box_2d()).is_err());
    }

    #[test]
    fn test_widened_input() {
        // Already widened to 3 dimensions with the last one free.
        let mut ph = box_2d();
        ph.add_space_dimensions_and_embed(1);
        let shifted = shift_dimensions(ph, 0, 2).unwrap();
        assert_eq!(shifted.space_dimension(), 3);
        assert!(has(&shifted, [7, 0, 5]));
    }

    #[test]
    fn test_constrained_trailing_dimension_rejected() {
        // x1 = 3 in a 2-dimensional space: dimension 1 is not free.
        let mut ph = Polyhedron::universe(2);
        ph.add_constraint(Constraint::eq_zero(LinearExpression::from_parts([0i64, 1], -3)))
            .unwrap();
        let err = shift_dimensions(ph, 0, 1).unwrap_err();
        assert!(matches!(
            err,
            BridgeError::Dimension(DimensionError { kind: DimensionErrorKind::SpaceMismatch, .. })
        ));
    }

    #[test]
    fn test_space_mismatch_rejected() {
        let mut wide = box_2d();
        wide.add_space_dimensions_and_embed(2);
        assert!(shift_dimensions(wide, 0, 2).is_err());
        assert!(shift_dimensions(box_2d(), 0, 3).is_err());
    }
}
