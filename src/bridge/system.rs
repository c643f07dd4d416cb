//! Whole-matrix conversions between domain matrices and polyhedra.

use crate::bridge::matrix::DomainMatrix;
use crate::bridge::row::{insert_constraint_into_matrix, row_to_constraint};
use crate::polyhedral::constraint::ConstraintSystem;
use crate::polyhedral::polyhedron::Polyhedron;
use crate::utils::errors::BridgeResult;
use log::debug;

/// Build the constraint system described by every row of `matrix`.
pub fn constraint_system_from_matrix(matrix: &DomainMatrix) -> BridgeResult<ConstraintSystem> {
    let mut cs = ConstraintSystem::with_dimension(matrix.dimension());
    for row in 0..matrix.nrows() {
        cs.insert(row_to_constraint(matrix, row)?);
    }
    Ok(cs)
}

/// Lift `matrix` into a polyhedron over `matrix.dimension()` dimensions.
pub fn polyhedron_from_matrix(matrix: &DomainMatrix) -> BridgeResult<Polyhedron> {
    let cs = constraint_system_from_matrix(matrix)?;
    debug!(
        "lifted {}x{} matrix into {} constraints",
        matrix.nrows(),
        matrix.ncols(),
        cs.len()
    );
    Ok(Polyhedron::from_constraint_system(cs))
}

/// Lower a constraint system over `space_dim` dimensions into a matrix.
///
/// Rows follow the system's iteration order.
pub fn matrix_from_constraint_system(
    cs: &ConstraintSystem,
    space_dim: usize,
) -> BridgeResult<DomainMatrix> {
    let rows = cs.len();
    let mut matrix = DomainMatrix::zeros(rows, space_dim + 2)?;
    for (row, c) in cs.iter().enumerate() {
        insert_constraint_into_matrix(&mut matrix, row, c)?;
    }
    Ok(matrix)
}

/// Lower `ph` into a matrix with one row per defining constraint.
pub fn matrix_from_polyhedron(ph: &Polyhedron) -> BridgeResult<DomainMatrix> {
    let matrix = matrix_from_constraint_system(ph.constraints(), ph.space_dimension())?;
    debug!(
        "lowered {}-dimensional polyhedron into {}x{} matrix",
        ph.space_dimension(),
        matrix.nrows(),
        matrix.ncols()
    );
    Ok(matrix)
}
