//! Property-based tests for the bridge and transformations.
//!
//! These tests check the ordering laws of the lexicographic comparator and
//! that conversions and reshaping preserve integer points, over randomized
//! small domains.

use num_bigint::BigInt;
use polybridge::prelude::*;
use proptest::prelude::*;
use std::cmp::Ordering;

// ============================================================================
// Strategies
// ============================================================================

fn coeff_vec() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-3i64..=3, 0..5)
}

fn expr_of(coeffs: &[i64], constant: i64) -> LinearExpression {
    LinearExpression::from_parts(coeffs.iter().copied(), constant)
}

fn kind() -> impl Strategy<Value = ConstraintType> {
    prop_oneof![
        Just(ConstraintType::Equal),
        Just(ConstraintType::LessThan),
        Just(ConstraintType::LessOrEqual),
        Just(ConstraintType::GreaterThan),
        Just(ConstraintType::GreaterOrEqual),
    ]
}

/// A 2D polyhedron: a bounding box plus a few random constraints.
fn domain_2d() -> impl Strategy<Value = Polyhedron> {
    let extra = prop::collection::vec(
        ((-3i64..=3, -3i64..=3), -6i64..=6, kind()),
        0..3,
    );
    (0i64..=4, 0i64..=4, extra).prop_map(|(ub0, ub1, extra)| {
        let mut ph = Polyhedron::universe(2);
        ph.add_constraint(Constraint::lower_bound(0, 0, 2)).unwrap();
        ph.add_constraint(Constraint::upper_bound(0, ub0, 2)).unwrap();
        ph.add_constraint(Constraint::lower_bound(1, 0, 2)).unwrap();
        ph.add_constraint(Constraint::upper_bound(1, ub1, 2)).unwrap();
        for ((a, b), c, k) in extra {
            ph.add_constraint(Constraint::new(expr_of(&[a, b], c), k)).unwrap();
        }
        ph
    })
}

fn to_exact(p: &[i64]) -> Vec<BigInt> {
    p.iter().map(|&v| BigInt::from(v)).collect()
}

// ============================================================================
// Lexicographic order
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn lexico_reflexive(a in coeff_vec()) {
        prop_assert_eq!(compare(&expr_of(&a, 0), &expr_of(&a, 7)), Ordering::Equal);
    }

    #[test]
    fn lexico_antisymmetric(a in coeff_vec(), b in coeff_vec()) {
        let ab = compare(&expr_of(&a, 0), &expr_of(&b, 0));
        let ba = compare(&expr_of(&b, 0), &expr_of(&a, 0));
        prop_assert_eq!(ab, ba.reverse());
        if ab == Ordering::Equal {
            prop_assert_eq!(a, b);
        }
    }

    #[test]
    fn lexico_transitive(a in coeff_vec(), b in coeff_vec(), c in coeff_vec()) {
        let (ea, eb, ec) = (expr_of(&a, 0), expr_of(&b, 0), expr_of(&c, 0));
        if compare(&ea, &eb) != Ordering::Greater && compare(&eb, &ec) != Ordering::Greater {
            prop_assert_ne!(compare(&ea, &ec), Ordering::Greater);
        }
    }

    #[test]
    fn lexico_matches_slice_order(a in coeff_vec(), b in coeff_vec()) {
        prop_assert_eq!(compare(&expr_of(&a, 0), &expr_of(&b, 0)), a.cmp(&b));
    }
}

// ============================================================================
// Conversions and reshaping
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn matrix_round_trip_preserves_points(ph in domain_2d()) {
        let back = polyhedron_from_matrix(&matrix_from_polyhedron(&ph).unwrap()).unwrap();
        prop_assert_eq!(
            ph.integer_points(&[-1, -1], &[5, 5]).unwrap(),
            back.integer_points(&[-1, -1], &[5, 5]).unwrap()
        );
    }

    #[test]
    fn shift_preserves_projection(ph in domain_2d(), at in 0usize..=2, free in -5i64..=5) {
        let points = ph.integer_points(&[-1, -1], &[5, 5]).unwrap();
        let shifted = shift_dimensions(ph.clone(), at, 2).unwrap();
        for x in -1i64..=5 {
            for y in -1i64..=5 {
                let mut q = vec![x, y];
                q.insert(at, free);
                let inside = shifted.contains(&to_exact(&q)).unwrap();
                prop_assert_eq!(inside, points.contains(&vec![x, y]));
            }
        }
    }

    #[test]
    fn strip_mine_tiles_rectangles(ub0 in 0i64..=6, ub1 in 0i64..=6, loop_dim in 0usize..2, stride in 1i64..=4) {
        let mut ph = Polyhedron::universe(2);
        ph.add_constraint(Constraint::lower_bound(0, 0, 2)).unwrap();
        ph.add_constraint(Constraint::upper_bound(0, ub0, 2)).unwrap();
        ph.add_constraint(Constraint::lower_bound(1, 0, 2)).unwrap();
        ph.add_constraint(Constraint::upper_bound(1, ub1, 2)).unwrap();
        let original = ph.integer_points(&[0, 0], &[6, 6]).unwrap();

        let tiled = strip_mine(ph, loop_dim, stride).unwrap();
        let points = tiled.integer_points(&[-1, -1, -1], &[7, 7, 7]).unwrap();

        // Each original point appears exactly once, with t = floor(x / stride).
        prop_assert_eq!(points.len(), original.len());
        for p in &points {
            let t = p[loop_dim];
            let x = p[loop_dim + 1];
            prop_assert_eq!(t, x.div_euclid(stride));
            let mut q = p.clone();
            q.remove(loop_dim);
            prop_assert!(original.contains(&q));
        }
    }
}
