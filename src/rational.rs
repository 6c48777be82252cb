use std::fmt::{self, Debug};
use std::ops::{Add, Mul, Neg};

use crate::error::{Error, Result};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// An exact rational number: `numer / denom` in lowest terms, `denom > 0`.
///
/// Lagrange interpolation over integer shares produces intermediate terms
/// like `y_i * (-x_j) / (x_i - x_j)` that are not integers in general, so
/// the division has to be deferred. This type carries every term exactly
/// and only collapses to an integer at the very end, via [`into_integer`].
///
/// [`into_integer`]: Rational::into_integer
#[derive(Clone, PartialEq, Eq)]
pub struct Rational {
    numer: BigInt,
    denom: BigInt,
}

impl Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({}/{})", self.numer, self.denom)
    }
}

impl Rational {
    /// Construct `numer / denom`, reduced, with the sign carried by the
    /// numerator. Panics on a zero denominator; callers rule that out
    /// before dividing (the interpolator rejects duplicate abscissae).
    pub fn new(numer: BigInt, denom: BigInt) -> Self {
        assert!(!denom.is_zero(), "zero denominator");
        let mut r = Rational { numer, denom };
        r.reduce();
        r
    }

    pub fn from_integer(n: BigInt) -> Self {
        Rational {
            numer: n,
            denom: BigInt::one(),
        }
    }

    pub fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    pub fn one() -> Self {
        Self::from_integer(BigInt::one())
    }

    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    /// Collapse to the exact integer value, or fail with
    /// [`Error::NonIntegerResult`] if one does not exist. No truncation,
    /// ever: either the denominator reduced to 1 or the caller gets an
    /// error naming the leftover fraction.
    pub fn into_integer(self) -> Result<BigInt> {
        if self.is_integer() {
            Ok(self.numer)
        } else {
            Err(Error::NonIntegerResult(self.to_string()))
        }
    }

    fn reduce(&mut self) {
        if self.denom.is_negative() {
            self.numer = -std::mem::take(&mut self.numer);
            self.denom = -std::mem::take(&mut self.denom);
        }
        let g = self.numer.gcd(&self.denom);
        if !g.is_one() {
            self.numer = &self.numer / &g;
            self.denom = &self.denom / &g;
        }
    }
}

impl Add<&Rational> for Rational {
    type Output = Self;
    fn add(self, rhs: &Self) -> Self {
        // a/b + c/d = (ad + cb) / bd, then reduce
        let numer = &self.numer * &rhs.denom + &rhs.numer * &self.denom;
        let denom = self.denom * &rhs.denom;
        Rational::new(numer, denom)
    }
}

impl Mul<&Rational> for Rational {
    type Output = Self;
    fn mul(self, rhs: &Self) -> Self {
        let numer = self.numer * &rhs.numer;
        let denom = self.denom * &rhs.denom;
        Rational::new(numer, denom)
    }
}

impl Mul<&Rational> for &Rational {
    type Output = Rational;
    fn mul(self, rhs: &Rational) -> Rational {
        let numer = &self.numer * &rhs.numer;
        let denom = &self.denom * &rhs.denom;
        Rational::new(numer, denom)
    }
}

impl Neg for Rational {
    type Output = Self;
    fn neg(self) -> Self {
        Rational {
            numer: -self.numer,
            denom: self.denom,
        }
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::FromPrimitive;

    fn rat(n: i64, d: i64) -> Rational {
        Rational::new(
            BigInt::from_i64(n).unwrap(),
            BigInt::from_i64(d).unwrap(),
        )
    }

    #[test]
    fn reduces_on_construction() {
        assert_eq!(rat(6, 4), rat(3, 2));
        assert_eq!(rat(-6, -4), rat(3, 2));
        assert_eq!(rat(0, 5), Rational::zero());
    }

    #[test]
    fn sign_lives_in_numerator() {
        let r = rat(1, -2);
        assert_eq!(r.numer(), &BigInt::from_i64(-1).unwrap());
        assert_eq!(r.denom(), &BigInt::from_i64(2).unwrap());
    }

    #[test]
    fn add_and_mul() {
        // 1/2 + 1/3 = 5/6
        assert_eq!(rat(1, 2) + &rat(1, 3), rat(5, 6));
        // 2/3 * 3/4 = 1/2
        assert_eq!(rat(2, 3) * &rat(3, 4), rat(1, 2));
        // 1/2 + (-1/2) = 0
        assert_eq!(rat(1, 2) + &(-rat(1, 2)), Rational::zero());
    }

    #[test]
    fn non_integer_sum_can_still_collapse() {
        // 3/2 * 4/3 = 2, an integer despite fractional factors
        let product = rat(3, 2) * &rat(4, 3);
        assert_eq!(product.into_integer().unwrap(), BigInt::from_i64(2).unwrap());
    }

    #[test]
    fn into_integer_rejects_fractions() {
        assert_eq!(rat(7, 1).into_integer().unwrap(), BigInt::from_i64(7).unwrap());
        assert_eq!(
            rat(7, 2).into_integer(),
            Err(Error::NonIntegerResult("7/2".into()))
        );
    }

    #[test]
    #[should_panic(expected = "zero denominator")]
    fn zero_denominator_panics() {
        let _ = rat(1, 0);
    }
}
