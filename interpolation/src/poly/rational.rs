//! An exact fraction of arbitrary precision integers.
use std::{
    fmt,
    ops::{Add, AddAssign, Mul, MulAssign, Neg},
};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// An exact fraction of arbitrary precision integers.
///
/// The denominator is always positive and coprime with the numerator,
/// so structural equality is numeric equality.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rational {
    numer: BigInt,
    denom: BigInt,
}

impl Rational {
    /// Creates a new fraction, returning `None` if the denominator is zero.
    pub fn new(numer: BigInt, denom: BigInt) -> Option<Self> {
        if denom.is_zero() {
            return None;
        }
        Some(Self::reduced(numer, denom))
    }

    /// Creates a fraction with denominator one.
    pub fn from_integer(value: BigInt) -> Self {
        Self {
            numer: value,
            denom: BigInt::one(),
        }
    }

    /// Returns the numerator.
    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    /// Returns the denominator, which is always positive.
    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    /// Returns true if the fraction represents an integer.
    pub fn is_integer(&self) -> bool {
        self.numer.is_multiple_of(&self.denom)
    }

    /// Returns the integer value of the fraction, or `None` if the
    /// denominator does not divide the numerator.
    pub fn to_integer(&self) -> Option<BigInt> {
        let (quotient, remainder) = self.numer.div_rem(&self.denom);
        if !remainder.is_zero() {
            return None;
        }
        Some(quotient)
    }

    /// Brings the fraction into canonical form.
    ///
    /// The denominator must be non-zero.
    fn reduced(mut numer: BigInt, mut denom: BigInt) -> Self {
        if denom.is_negative() {
            numer = -numer;
            denom = -denom;
        }

        // gcd(0, d) = d, so zero becomes 0/1.
        let gcd = numer.gcd(&denom);
        if !gcd.is_one() {
            numer /= &gcd;
            denom /= &gcd;
        }

        Self { numer, denom }
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::from_integer(BigInt::one())
    }
}

impl From<BigInt> for Rational {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self::from_integer(BigInt::from(value))
    }
}

impl Add for Rational {
    type Output = Rational;

    fn add(mut self, other: Rational) -> Rational {
        self += &other;
        self
    }
}

impl<'a> Add<&'a Rational> for Rational {
    type Output = Rational;

    fn add(mut self, other: &Rational) -> Rational {
        self += other;
        self
    }
}

impl<'a> AddAssign<&'a Rational> for Rational {
    fn add_assign(&mut self, other: &Rational) {
        // a/b + c/d = (ad + cb) / bd
        let numer = &self.numer * &other.denom + &other.numer * &self.denom;
        let denom = &self.denom * &other.denom;
        *self = Self::reduced(numer, denom);
    }
}

impl AddAssign<Rational> for Rational {
    fn add_assign(&mut self, other: Rational) {
        *self += &other;
    }
}

impl Mul for Rational {
    type Output = Rational;

    fn mul(mut self, rhs: Rational) -> Rational {
        self *= &rhs;
        self
    }
}

impl<'a> Mul<&'a Rational> for Rational {
    type Output = Rational;

    fn mul(mut self, rhs: &Rational) -> Rational {
        self *= rhs;
        self
    }
}

impl<'a> MulAssign<&'a Rational> for Rational {
    fn mul_assign(&mut self, rhs: &Rational) {
        let numer = &self.numer * &rhs.numer;
        let denom = &self.denom * &rhs.denom;
        *self = Self::reduced(numer, denom);
    }
}

impl MulAssign<Rational> for Rational {
    fn mul_assign(&mut self, rhs: Rational) {
        *self *= &rhs;
    }
}

impl<'a> Mul<&'a BigInt> for Rational {
    type Output = Rational;

    fn mul(self, rhs: &BigInt) -> Rational {
        Self::reduced(self.numer * rhs, self.denom)
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Self {
            numer: -self.numer,
            denom: self.denom,
        }
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.denom.is_one() {
            return fmt::Display::fmt(&self.numer, f);
        }
        write!(f, "{}/{}", self.numer, self.denom)
    }
}
