//! Secret recovery via exact Lagrange interpolation at x = 0.

use crate::error::{Error, Result};
use crate::rational::Rational;
use crate::share::{Share, ShareSet};
use num_bigint::BigInt;
use tracing::debug;

/// Recover the secret from a decoded share set.
///
/// Selection policy: of the n available shares, the k with the smallest
/// x-coordinates are used (ascending by id). Any k shares on the true
/// degree-(k-1) polynomial give the same answer, but fixing the subset
/// makes reconstruction reproducible regardless of document key order.
pub fn reconstruct(set: &ShareSet) -> Result<BigInt> {
    if set.threshold < 1 {
        return Err(Error::DegenerateInput);
    }
    if set.shares.len() < set.threshold {
        return Err(Error::InsufficientShares {
            needed: set.threshold,
            got: set.shares.len(),
        });
    }
    let mut selected = set.shares.clone();
    selected.sort_by(|a, b| a.x.cmp(&b.x));
    selected.truncate(set.threshold);
    debug!(
        threshold = set.threshold,
        available = set.shares.len(),
        "interpolating from first k shares by ascending id"
    );
    interpolate_at_zero(&selected)?.into_integer()
}

/// Evaluate the interpolating polynomial of `points` at x = 0:
///
/// ```text
/// P(0) = Σ_i y_i · Π_{j≠i} (-x_j) / (x_i - x_j)
/// ```
///
/// Each term's product and the outer sum are carried as [`Rational`],
/// because `(x_i - x_j)` rarely divides the running numerator evenly;
/// truncating at any intermediate step would silently corrupt the
/// result. For a single point the empty product is 1 and P(0) = y_0.
pub fn interpolate_at_zero(points: &[Share]) -> Result<Rational> {
    if points.is_empty() {
        return Err(Error::DegenerateInput);
    }
    let mut secret = Rational::zero();
    for (i, p_i) in points.iter().enumerate() {
        let mut num = BigInt::from(1);
        let mut den = BigInt::from(1);
        for (j, p_j) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            if p_i.x == p_j.x {
                return Err(Error::DuplicateAbscissa { x: p_i.x.clone() });
            }
            num *= -&p_j.x;
            den *= &p_i.x - &p_j.x;
        }
        let lambda = Rational::new(num, den);
        let term = Rational::from_integer(p_i.y.clone()) * &lambda;
        secret = secret + &term;
    }
    Ok(secret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::FromPrimitive;
    use proptest::prelude::*;

    fn share(x: i64, y: i64) -> Share {
        Share {
            x: BigInt::from_i64(x).unwrap(),
            y: BigInt::from_i64(y).unwrap(),
        }
    }

    fn eval(coeffs: &[i64], x: i64) -> i64 {
        coeffs.iter().rev().fold(0i64, |acc, c| acc * x + c)
    }

    #[test]
    fn single_point_is_its_own_secret() {
        let secret = interpolate_at_zero(&[share(5, 42)]).unwrap();
        assert_eq!(secret.into_integer().unwrap(), BigInt::from_i64(42).unwrap());
    }

    #[test]
    fn recovers_quadratic_constant_term() {
        // f(x) = 3 + 2x + x^2: f(1)=6, f(2)=11, f(3)=18
        let points = [share(1, 6), share(2, 11), share(3, 18)];
        let secret = interpolate_at_zero(&points).unwrap();
        assert_eq!(secret.into_integer().unwrap(), BigInt::from_i64(3).unwrap());
    }

    #[test]
    fn survives_non_divisible_intermediate_terms() {
        // f(x) = 3 + 2x + x^2 at x = 1, 3, 5. The i=0 term is exactly
        // 45/4 and the i=2 term 57/4; a truncating walk loses the
        // fractional parts (it computes 11 - 22 + 13 = 2) while the
        // exact sum 45/4 - 45/2 + 57/4 collapses to 3.
        let points = [share(1, 6), share(3, 18), share(5, 38)];
        let secret = interpolate_at_zero(&points).unwrap();
        assert_eq!(secret.into_integer().unwrap(), BigInt::from_i64(3).unwrap());

        // The same walk with integer division lands elsewhere; guard
        // against regressing to it.
        let naive: i64 = {
            let pts = [(1i64, 6i64), (3, 18), (5, 38)];
            let mut s = 0;
            for i in 0..3 {
                let mut term = pts[i].1;
                for j in 0..3 {
                    if i != j {
                        term = term * -pts[j].0 / (pts[i].0 - pts[j].0);
                    }
                }
                s += term;
            }
            s
        };
        assert_eq!(naive, 2);
        assert_ne!(naive, 3);
    }

    #[test]
    fn any_k_subset_agrees() {
        // f(x) = 7 + 5x + 11x^2, shares at x = 1..=5, k = 3
        let coeffs = [7i64, 5, 11];
        let shares: Vec<Share> = (1..=5).map(|x| share(x, eval(&coeffs, x))).collect();
        let mut secrets = Vec::new();
        for a in 0..5 {
            for b in (a + 1)..5 {
                for c in (b + 1)..5 {
                    let subset = [shares[a].clone(), shares[b].clone(), shares[c].clone()];
                    let s = interpolate_at_zero(&subset).unwrap().into_integer().unwrap();
                    secrets.push(s);
                }
            }
        }
        assert!(secrets.iter().all(|s| s == &secrets[0]));
        assert_eq!(secrets[0], BigInt::from_i64(7).unwrap());
    }

    #[test]
    fn duplicate_x_is_rejected() {
        let points = [share(2, 11), share(2, 12), share(3, 18)];
        assert_eq!(
            interpolate_at_zero(&points),
            Err(Error::DuplicateAbscissa {
                x: BigInt::from_i64(2).unwrap()
            })
        );
    }

    #[test]
    fn zero_threshold_is_degenerate() {
        let set = ShareSet {
            threshold: 0,
            total: 1,
            shares: vec![share(1, 4)],
        };
        assert_eq!(reconstruct(&set), Err(Error::DegenerateInput));
    }

    #[test]
    fn inconsistent_points_are_not_truncated() {
        // No integer quadratic passes through these three points, so the
        // exact result is fractional and must be reported, not rounded.
        let points = [share(1, 1), share(2, 2), share(4, 3)];
        assert!(matches!(
            interpolate_at_zero(&points).unwrap().into_integer(),
            Err(Error::NonIntegerResult(_))
        ));
    }

    #[test]
    fn selection_takes_lowest_ids() {
        // f(x) = 3 + 2x + x^2 holds at x = 1, 2, 3; the share at x = 9
        // lies off the polynomial and must not be selected for k = 3.
        let set = ShareSet {
            threshold: 3,
            total: 4,
            shares: vec![share(9, 999), share(3, 18), share(1, 6), share(2, 11)],
        };
        assert_eq!(reconstruct(&set).unwrap(), BigInt::from_i64(3).unwrap());
    }

    proptest! {
        #[test]
        fn recovers_constant_of_random_polynomials(
            coeffs in prop::collection::vec(-1000i64..1000, 1..6),
            offset in 1i64..50,
        ) {
            let k = coeffs.len();
            let shares: Vec<Share> = (0..k as i64)
                .map(|i| share(offset + i, eval(&coeffs, offset + i)))
                .collect();
            let secret = interpolate_at_zero(&shares)
                .unwrap()
                .into_integer()
                .unwrap();
            prop_assert_eq!(secret, BigInt::from_i64(coeffs[0]).unwrap());
        }
    }
}
