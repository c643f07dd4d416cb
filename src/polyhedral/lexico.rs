//! Lexicographic ordering of linear expressions.
//!
//! Scattering functions and iteration vectors are ordered by their
//! coefficients, dimension by dimension. The inhomogeneous term never takes
//! part in the comparison.

use crate::polyhedral::expr::LinearExpression;
use std::cmp::Ordering;

/// Compare `a` and `b` coefficient by coefficient.
///
/// The first differing coefficient decides. When one expression is a prefix
/// of the other the one with fewer dimensions is smaller.
pub fn compare(a: &LinearExpression, b: &LinearExpression) -> Ordering {
    a.coefficients()
        .iter()
        .zip(b.coefficients())
        .map(|(ca, cb)| ca.cmp(cb))
        .find(|ord| ord.is_ne())
        .unwrap_or_else(|| a.space_dimension().cmp(&b.space_dimension()))
}

/// Sort expressions in place by [`compare`].
pub fn sort(exprs: &mut [LinearExpression]) {
    exprs.sort_by(compare);
}

/// Wrapper giving a [`LinearExpression`] the lexicographic [`Ord`].
///
/// Equality follows the ordering, so two expressions that differ only in
/// their inhomogeneous term are equal keys.
#[derive(Debug, Clone)]
pub struct LexicoKey(pub LinearExpression);

impl PartialEq for LexicoKey {
    fn eq(&self, other: &Self) -> bool {
        compare(&self.0, &other.0).is_eq()
    }
}

impl Eq for LexicoKey {}

impl PartialOrd for LexicoKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LexicoKey {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(&self.0, &other.0)
    }
}
