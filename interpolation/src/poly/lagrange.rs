// Lagrange interpolation at zero over exact fractions.
use std::iter::zip;

use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::{errors::Error, poly::Point, poly::Rational};

/// Returns the value at zero of the unique polynomial of degree at most
/// `k - 1` passing through the given `k` points, i.e. its constant term.
///
/// The value is computed as:
/// ```text
///     F(0) = \sum_{j=0}^{k-1} y_j * L_j(0)
/// ```
/// where `L_j(0)` represents the j-th Lagrange coefficient. All arithmetic
/// is exact and the result is returned only if the sum is an integer.
pub fn interpolate_at_zero(points: &[Point]) -> Result<BigInt, Error> {
    if points.is_empty() {
        return Err(Error::NoPoints);
    }

    let xs: Vec<_> = points.iter().map(|p| p.x.clone()).collect();
    let cs = coefficients_at_zero(&xs)?;

    let mut sum = Rational::zero();
    for (c, p) in zip(cs, points) {
        sum += c * &p.y;
    }

    sum.to_integer().ok_or(Error::NonIntegerResult(sum))
}

/// Returns Lagrange coefficients for the given set of x values.
///
/// The j-th Lagrange coefficient is defined as:
/// ```text
///     L_j(0) = \prod_{m=0,m≠j}^{k-1} -x_m / (x_j - x_m)
/// ```
pub fn coefficients_at_zero(xs: &[BigInt]) -> Result<Vec<Rational>, Error> {
    distinct_coordinates(xs)?;
    (0..xs.len()).map(|j| coefficient_at_zero(xs, j)).collect()
}

/// Returns j-th Lagrange coefficient for the given set of x values.
fn coefficient_at_zero(xs: &[BigInt], j: usize) -> Result<Rational, Error> {
    let mut nom = BigInt::one();
    let mut denom = BigInt::one();
    for m in 0..xs.len() {
        if m == j {
            continue;
        }
        nom *= -&xs[m]; // -x_m
        denom *= &xs[j] - &xs[m]; // (x_j - x_m)
    }

    // L_j(0) = nom / denom
    Rational::new(nom, denom).ok_or_else(|| Error::DegenerateInput(xs[j].clone()))
}

/// Fails if the given x values are not pairwise distinct.
fn distinct_coordinates(xs: &[BigInt]) -> Result<(), Error> {
    // For a small number of points, a brute-force approach suffices.
    for i in 0..xs.len() {
        for j in (i + 1)..xs.len() {
            if xs[i] == xs[j] {
                return Err(Error::DegenerateInput(xs[i].clone()));
            }
        }
    }
    Ok(())
}
