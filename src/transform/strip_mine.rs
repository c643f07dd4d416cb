//! Strip-mining.
//!
//! Strip-mining splits one loop into a tile counter and an inner loop that
//! covers one stride-sized window per tile. The tile counter takes the loop's
//! index and the original loop variable moves one dimension up.
//!
//! The tile counter also inherits every constraint that bounds the loop:
//!
//! ```text
//! for i = lb to ub:
//!   S(i)
//! ```
//! becomes:
//! ```text
//! for t = lb to ub:
//!   for i = max(lb, stride*t) to min(ub, stride*t + stride - 1):
//!     S(i)
//! ```
//!
//! With `lb == 0` the inherited bounds on `t` are redundant and every
//! iteration is kept. With `lb > 0`, or bounds that involve another
//! strip-mined loop, they cut iterations: `5 <= i <= 9` by 4 yields an empty
//! domain because `t >= 5` forces `i >= 20`.

use crate::polyhedral::constraint::Constraint;
use crate::polyhedral::expr::LinearExpression;
use crate::polyhedral::polyhedron::Polyhedron;
use crate::transform::shift::shift_dimensions;
use crate::transform::PolyTransform;
use crate::utils::errors::{BridgeResult, TransformError, TransformErrorKind};
use log::debug;
use num_traits::Zero;
use serde::{Serialize, Deserialize};

/// Strip-mine dimension `loop_dim` of `ph` into strips of `stride` iterations.
///
/// The result has one more dimension than `ph`: index `loop_dim` is the tile
/// counter `t` and index `loop_dim + 1` the original loop variable `i`, bound
/// by `stride*t <= i <= stride*t + stride - 1` on top of its original bounds.
/// The constraints that bound `i` are also carried over onto `t`, so `t`
/// ranges over the loop's own bounds; see the module docs for the
/// iterations this drops when the lower bound is positive.
pub fn strip_mine(ph: Polyhedron, loop_dim: usize, stride: i64) -> BridgeResult<Polyhedron> {
    let dim = ph.space_dimension();
    if stride <= 0 {
        return Err(TransformError::new(
            TransformErrorKind::InvalidStride,
            "strip-mine",
            format!("stride must be positive, got {}", stride),
        )
        .into());
    }
    if loop_dim >= dim {
        return Err(TransformError::new(
            TransformErrorKind::InvalidLoop,
            "strip-mine",
            format!("loop {} is not a dimension of a {}-dimensional polyhedron", loop_dim, dim),
        )
        .into());
    }

    let pcs = ph.constraints();

    // Start from a copy of the constraints, then open the tile dimension.
    let mut res = Polyhedron::universe(dim + 1);
    res.add_constraints(pcs)?;
    let mut res = shift_dimensions(res, loop_dim, dim)?;

    // Bounds of the strip-mined loop, re-indexed onto the tile counter.
    let mut bounds = Polyhedron::universe(dim + 1);
    bounds.add_constraints(pcs.iter().filter(|c| !c.coefficient(loop_dim).is_zero()))?;
    let bounds = shift_dimensions(bounds, loop_dim + 1, dim)?;
    res.add_constraints(bounds.constraints())?;

    // i - stride*t >= 0
    let mut lower = LinearExpression::with_dimension(dim + 1);
    lower.set_coefficient(loop_dim + 1, 1);
    lower.set_coefficient(loop_dim, -stride);
    res.add_constraint(Constraint::ge_zero(lower))?;

    // -i + stride*t + stride - 1 >= 0
    let mut upper = LinearExpression::with_dimension(dim + 1);
    upper.set_coefficient(loop_dim + 1, -1);
    upper.set_coefficient(loop_dim, stride);
    upper.set_inhomogeneous(stride - 1);
    res.add_constraint(Constraint::ge_zero(upper))?;

    debug!(
        "strip-mined loop {} by {}: {} constraints",
        loop_dim,
        stride,
        res.constraints().len()
    );
    Ok(res)
}

/// Strip-mining of one loop dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StripMine {
    /// Dimension to strip-mine
    pub loop_dim: usize,
    /// Iterations per strip
    pub stride: i64,
}

impl StripMine {
    /// Create a new strip-mining transformation.
    pub fn new(loop_dim: usize, stride: i64) -> Self {
        Self { loop_dim, stride }
    }
}

impl PolyTransform for StripMine {
    fn apply(&self, ph: Polyhedron) -> BridgeResult<Polyhedron> {
        strip_mine(ph, self.loop_dim, self.stride)
    }

    fn name(&self) -> &str {
        "strip-mine"
    }
}
