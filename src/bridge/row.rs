//! Conversion between one matrix row and one constraint.
//!
//! The matrix format only knows equalities and `expr >= 0`. Going from a
//! constraint to a row therefore folds the other three kinds onto
//! `expr >= 0`, which is exact over the integers:
//!
//! | kind     | row                |
//! |----------|--------------------|
//! | `e < 0`  | `-e - 1 >= 0`      |
//! | `e > 0`  | `e - 1 >= 0`       |
//! | `e <= 0` | `-e >= 0`          |
//! | `e >= 0` | `e >= 0`           |
//! | `e = 0`  | `e = 0` (flag 0)   |

use crate::bridge::matrix::DomainMatrix;
use crate::polyhedral::constraint::{Constraint, ConstraintType};
use crate::polyhedral::expr::LinearExpression;
use crate::utils::errors::{BridgeResult, MatrixError, MatrixErrorKind};
use num_bigint::BigInt;
use num_traits::{One, Zero};

/// Kind flag of an equality row.
pub const EQUALITY_FLAG: i64 = 0;
/// Kind flag of an `expr >= 0` row.
pub const INEQUALITY_FLAG: i64 = 1;

/// Translate row `row` of `matrix` into a constraint.
pub fn row_to_constraint(matrix: &DomainMatrix, row: usize) -> BridgeResult<Constraint> {
    let cells = matrix.row(row)?;
    let ncols = matrix.ncols();

    let mut expr = LinearExpression::with_dimension(matrix.dimension());
    for (j, cell) in cells.iter().enumerate().take(ncols - 1).skip(1) {
        expr.add_to_coefficient(j - 1, cell);
    }
    expr.add_to_inhomogeneous(&cells[ncols - 1]);

    let kind = if cells[0].is_zero() {
        ConstraintType::Equal
    } else {
        ConstraintType::GreaterOrEqual
    };
    Ok(Constraint::new(expr, kind))
}

/// Write `constraint` into row `row` of `matrix`.
///
/// Coefficient columns past the constraint's space dimension are zeroed. The
/// row must be wide enough to hold every coefficient.
pub fn insert_constraint_into_matrix(
    matrix: &mut DomainMatrix,
    row: usize,
    constraint: &Constraint,
) -> BridgeResult<()> {
    let dim = constraint.space_dimension();
    let nb_cols = matrix.ncols();
    if nb_cols < dim + 2 {
        return Err(MatrixError::new(
            MatrixErrorKind::RowTooNarrow,
            format!(
                "a constraint over {} dimensions needs {} columns, row has {}",
                dim,
                dim + 2,
                nb_cols
            ),
        )
        .into());
    }

    let cells = matrix.row_mut(row)?;
    for (i, cell) in cells[1..nb_cols - 1].iter_mut().enumerate() {
        *cell = constraint.coefficient(i);
    }
    cells[nb_cols - 1] = constraint.inhomogeneous_term().clone();
    cells[0] = BigInt::from(INEQUALITY_FLAG);

    match constraint.kind {
        ConstraintType::LessThan => {
            oppose_row(cells);
            cells[nb_cols - 1] -= BigInt::one();
        }
        ConstraintType::GreaterThan => {
            cells[nb_cols - 1] -= BigInt::one();
        }
        ConstraintType::LessOrEqual => oppose_row(cells),
        ConstraintType::GreaterOrEqual => {}
        ConstraintType::Equal => cells[0] = BigInt::from(EQUALITY_FLAG),
    }
    Ok(())
}

/// Negate every column but the kind flag.
fn oppose_row(cells: &mut [BigInt]) {
    for cell in &mut cells[1..] {
        *cell = -std::mem::take(cell);
    }
}
