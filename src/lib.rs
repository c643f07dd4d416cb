//! # PolyBridge - exact polyhedral bridge for loop code generation
//!
//! Converts iteration domains between the row-matrix format consumed by a
//! loop-nest code generator and exact convex polyhedra, and reshapes those
//! polyhedra for loop restructuring:
//! - Row and matrix conversion with strictness normalization
//! - Dimension insertion
//! - Strip-mining of a loop by a fixed stride
//! - Lexicographic ordering of scattering expressions
//!
//! ## Architecture
//!
//! ```text
//! DomainMatrix → bridge → Polyhedron → transform → Polyhedron → bridge → DomainMatrix
//! ```
//!
//! ## Example
//!
//! ```rust
//! use polybridge::prelude::*;
//!
//! // 0 <= i <= 9
//! let domain: DomainMatrix = "2 3\n1 1 0\n1 -1 9\n".parse().unwrap();
//! let ph = polyhedron_from_matrix(&domain).unwrap();
//! let tiled = strip_mine(ph, 0, 4).unwrap();
//! assert_eq!(tiled.space_dimension(), 2);
//! let lowered = matrix_from_polyhedron(&tiled).unwrap();
//! assert_eq!(lowered.ncols(), 4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod polyhedral;
pub mod bridge;
pub mod transform;
pub mod utils;

// Re-export commonly used types
pub mod prelude {
    //! Convenient re-exports of commonly used types and traits.

    pub use crate::bridge::{
        matrix_from_polyhedron, polyhedron_from_matrix, DomainMatrix,
    };
    pub use crate::polyhedral::{
        Coefficient, Constraint, ConstraintSystem, ConstraintType, LexicoKey,
        LinearExpression, Polyhedron,
    };
    pub use crate::polyhedral::lexico::compare;
    pub use crate::transform::{shift_dimensions, strip_mine, PolyTransform, Shift, StripMine};
    pub use crate::utils::errors::*;
}

use crate::bridge::DomainMatrix;
use crate::transform::PolyTransform;
use crate::utils::errors::BridgeResult;

/// Lift `matrix`, apply `transforms` in order and lower the result.
pub fn transform_matrix(
    matrix: &DomainMatrix,
    transforms: &[&dyn PolyTransform],
) -> BridgeResult<DomainMatrix> {
    let ph = bridge::polyhedron_from_matrix(matrix)?;
    let ph = transform::apply_all(ph, transforms)?;
    bridge::matrix_from_polyhedron(&ph)
}

/// Strip-mine dimension `loop_dim` of the domain `matrix` by `stride`.
pub fn strip_mine_matrix(
    matrix: &DomainMatrix,
    loop_dim: usize,
    stride: i64,
) -> BridgeResult<DomainMatrix> {
    transform_matrix(matrix, &[&transform::StripMine::new(loop_dim, stride)])
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
