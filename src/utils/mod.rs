//! Utility modules for the polyhedral bridge.
//!
//! - Error types
//! - Polyhedral printing

pub mod errors;
pub mod poly_print;

// Re-exports
pub use errors::*;
pub use poly_print::{print_matrix, print_polyhedron, visualize_2d, PolyPrinter};
