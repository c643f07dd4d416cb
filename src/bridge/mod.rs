//! Bridge between iteration-domain matrices and polyhedra.
//!
//! The loop code generator speaks in [`DomainMatrix`] rows; the exact side of
//! the crate speaks in [`Polyhedron`](crate::polyhedral::Polyhedron)s. This
//! module converts one row at a time ([`row`]) and whole matrices
//! ([`system`]).

pub mod matrix;
pub mod row;
pub mod system;

pub use matrix::DomainMatrix;
pub use row::{insert_constraint_into_matrix, row_to_constraint};
pub use system::{
    constraint_system_from_matrix, matrix_from_constraint_system, matrix_from_polyhedron,
    polyhedron_from_matrix,
};
