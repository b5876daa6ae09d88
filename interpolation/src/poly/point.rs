use std::fmt;

use num_bigint::BigInt;

/// A point (x,y) on a univariate polynomial f(x), where y = f(x).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Point {
    /// The x-coordinate of the point.
    pub(crate) x: BigInt,
    /// The y-coordinate of the point.
    pub(crate) y: BigInt,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: BigInt, y: BigInt) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point.
    pub fn x(&self) -> &BigInt {
        &self.x
    }

    /// Returns the y-coordinate of the point.
    pub fn y(&self) -> &BigInt {
        &self.y
    }
}

impl<X, Y> From<(X, Y)> for Point
where
    X: Into<BigInt>,
    Y: Into<BigInt>,
{
    fn from((x, y): (X, Y)) -> Self {
        Self::new(x.into(), y.into())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "(x={}, y={})", self.x, self.y)
    }
}
