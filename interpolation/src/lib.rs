//! # Polynomial constant-term recovery
//!
//! This library recovers the constant term of an integer polynomial of
//! degree `k - 1` from `k` of its points, whose y-coordinates are given as
//! digit strings in arbitrary bases.
//!
//! All arithmetic is exact: y-coordinates are decoded into arbitrary
//! precision integers and the Lagrange interpolation at zero is carried out
//! over exact fractions. A result that is not an integer is reported as an
//! error instead of being rounded.

pub mod config;
pub mod errors;
pub mod logger;
pub mod poly;
pub mod radix;
pub mod solver;
pub mod testcase;

// Re-exports.
pub use self::{
    config::{Config, Selection},
    errors::Error,
    poly::{interpolate_at_zero, Point, Rational},
    radix::decode,
    solver::Solver,
    testcase::{EncodedPoint, TestCase},
};
