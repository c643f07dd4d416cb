//! Linear expressions with exact integer coefficients.
//!
//! A linear expression is a weighted sum of dimension variables plus an
//! inhomogeneous term:
//! `e(x) = c + a0*x0 + a1*x1 + ... + a(n-1)*x(n-1)`
//!
//! Coefficients are [`BigInt`]s and never overflow.

use num_bigint::BigInt;
use num_traits::{One, Zero};
use serde::{Serialize, Deserialize};
use std::fmt;
use std::ops::{Add, Sub, Neg};

/// An exact-precision integer coefficient.
pub type Coefficient = BigInt;

/// A linear expression: inhomogeneous + sum(coeffs[i] * x[i])
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinearExpression {
    /// Coefficients for each dimension (index = dimension index)
    coeffs: Vec<Coefficient>,
    /// Inhomogeneous (constant) term
    inhomogeneous: Coefficient,
}

impl LinearExpression {
    /// Create the zero expression over `dim` dimensions.
    pub fn with_dimension(dim: usize) -> Self {
        Self {
            coeffs: vec![BigInt::zero(); dim],
            inhomogeneous: BigInt::zero(),
        }
    }

    /// Create an expression from explicit coefficients and constant.
    pub fn from_parts<C, I>(coeffs: I, inhomogeneous: C) -> Self
    where
        C: Into<Coefficient>,
        I: IntoIterator<Item = C>,
    {
        Self {
            coeffs: coeffs.into_iter().map(Into::into).collect(),
            inhomogeneous: inhomogeneous.into(),
        }
    }

    /// Create the expression `x[dim]` in a space of `space_dim` dimensions.
    pub fn var(dim: usize, space_dim: usize) -> Self {
        let mut expr = Self::with_dimension(space_dim.max(dim + 1));
        expr.coeffs[dim] = BigInt::one();
        expr
    }

    /// Number of dimensions the expression is defined over.
    pub fn space_dimension(&self) -> usize {
        self.coeffs.len()
    }

    /// Coefficient of dimension `dim`; zero past the end of the space.
    pub fn coefficient(&self, dim: usize) -> Coefficient {
        self.coeffs.get(dim).cloned().unwrap_or_else(BigInt::zero)
    }

    /// All coefficients, lowest dimension first.
    pub fn coefficients(&self) -> &[Coefficient] {
        &self.coeffs
    }

    /// The inhomogeneous term.
    pub fn inhomogeneous_term(&self) -> &Coefficient {
        &self.inhomogeneous
    }

    /// Add `value` to the coefficient of `dim`, widening the space if needed.
    pub fn add_to_coefficient(&mut self, dim: usize, value: &Coefficient) {
        self.ensure_dimension(dim + 1);
        self.coeffs[dim] += value;
    }

    /// Add `value` to the inhomogeneous term.
    pub fn add_to_inhomogeneous(&mut self, value: &Coefficient) {
        self.inhomogeneous += value;
    }

    /// Overwrite the coefficient of `dim`, widening the space if needed.
    pub fn set_coefficient(&mut self, dim: usize, value: impl Into<Coefficient>) {
        self.ensure_dimension(dim + 1);
        self.coeffs[dim] = value.into();
    }

    /// Overwrite the inhomogeneous term.
    pub fn set_inhomogeneous(&mut self, value: impl Into<Coefficient>) {
        self.inhomogeneous = value.into();
    }

    /// Negate every coefficient and the inhomogeneous term in place.
    pub fn oppose(&mut self) {
        for c in &mut self.coeffs {
            *c = -std::mem::take(c);
        }
        self.inhomogeneous = -std::mem::take(&mut self.inhomogeneous);
    }

    /// Check whether all dimension coefficients are zero.
    pub fn is_constant(&self) -> bool {
        self.coeffs.iter().all(Zero::is_zero)
    }

    /// Evaluate the expression at `point`.
    ///
    /// Missing coordinates count as zero; extra coordinates are ignored.
    pub fn evaluate(&self, point: &[BigInt]) -> BigInt {
        self.coeffs
            .iter()
            .zip(point)
            .fold(self.inhomogeneous.clone(), |acc, (c, v)| acc + c * v)
    }

    /// Move coefficient `i` to position `map[i]`.
    ///
    /// `map` must be a permutation of `0..map.len()` with
    /// `map.len() >= self.space_dimension()`; checked by the caller.
    pub(crate) fn permute(&self, map: &[usize]) -> Self {
        let mut coeffs = vec![BigInt::zero(); map.len()];
        for (i, c) in self.coeffs.iter().enumerate() {
            coeffs[map[i]] = c.clone();
        }
        Self {
            coeffs,
            inhomogeneous: self.inhomogeneous.clone(),
        }
    }

    fn ensure_dimension(&mut self, dim: usize) {
        if self.coeffs.len() < dim {
            self.coeffs.resize(dim, BigInt::zero());
        }
    }

    /// Convert to string with given dimension names.
    pub fn to_string_with_names(&self, dim_names: &[String]) -> String {
        let mut parts = Vec::new();

        for (i, c) in self.coeffs.iter().enumerate() {
            if c.is_zero() {
                continue;
            }
            let default_name = format!("d{}", i);
            let name = dim_names.get(i)
                .map(|s| s.as_str())
                .unwrap_or(&default_name);
            if c.is_one() {
                parts.push(name.to_string());
            } else if (-c).is_one() {
                parts.push(format!("-{}", name));
            } else {
                parts.push(format!("{}*{}", c, name));
            }
        }

        if !self.inhomogeneous.is_zero() || parts.is_empty() {
            parts.push(self.inhomogeneous.to_string());
        }

        parts.join(" + ").replace("+ -", "- ")
    }
}

fn zip_longest(a: &[BigInt], b: &[BigInt], op: impl Fn(&BigInt, &BigInt) -> BigInt) -> Vec<BigInt> {
    let zero = BigInt::zero();
    (0..a.len().max(b.len()))
        .map(|i| op(a.get(i).unwrap_or(&zero), b.get(i).unwrap_or(&zero)))
        .collect()
}

impl Add for LinearExpression {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            coeffs: zip_longest(&self.coeffs, &other.coeffs, |a, b| a + b),
            inhomogeneous: self.inhomogeneous + other.inhomogeneous,
        }
    }
}

impl Sub for LinearExpression {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            coeffs: zip_longest(&self.coeffs, &other.coeffs, |a, b| a - b),
            inhomogeneous: self.inhomogeneous - other.inhomogeneous,
        }
    }
}

impl Neg for LinearExpression {
    type Output = Self;

    fn neg(mut self) -> Self {
        self.oppose();
        self
    }
}

impl fmt::Display for LinearExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_with_names(&[]))
    }
}
