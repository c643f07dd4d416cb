//! Geometric transformations on polyhedra.
//!
//! Every transformation consumes its input polyhedron and returns a new one.

pub mod shift;
pub mod strip_mine;

pub use shift::{shift_dimensions, Shift};
pub use strip_mine::{strip_mine, StripMine};

use crate::polyhedral::polyhedron::Polyhedron;
use crate::utils::errors::BridgeResult;
use log::info;

/// Transformation pass trait.
pub trait PolyTransform {
    /// Apply the transformation.
    fn apply(&self, ph: Polyhedron) -> BridgeResult<Polyhedron>;

    /// Get transformation name.
    fn name(&self) -> &str;
}

/// Apply `transforms` in order, threading the polyhedron through each.
pub fn apply_all(ph: Polyhedron, transforms: &[&dyn PolyTransform]) -> BridgeResult<Polyhedron> {
    transforms.iter().try_fold(ph, |ph, t| {
        let dim = ph.space_dimension();
        let res = t.apply(ph)?;
        info!("{}: {} -> {} dimensions", t.name(), dim, res.space_dimension());
        Ok(res)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polyhedral::constraint::Constraint;

    #[test]
    fn test_apply_all() {
        let mut ph = Polyhedron::universe(1);
        ph.add_constraint(Constraint::lower_bound(0, 0, 1)).unwrap();
        ph.add_constraint(Constraint::upper_bound(0, 7, 1)).unwrap();

        let shift = Shift::new(0);
        let strip = StripMine::new(1, 4);
        let res = apply_all(ph, &[&shift, &strip]).unwrap();
        assert_eq!(res.space_dimension(), 3);
        // (free, t, i)
        let points = res.integer_points(&[0, -1, -1], &[0, 3, 8]).unwrap();
        assert_eq!(points.len(), 8);
        assert!(points.iter().all(|p| p[1] == p[2] / 4));
    }

    #[test]
    fn test_apply_all_stops_on_error() {
        let ph = Polyhedron::universe(1);
        let strip = StripMine::new(0, 0);
        assert!(apply_all(ph, &[&strip, &Shift::new(0)]).is_err());
    }
}
