//! This package provides exact interpolation of integer polynomials.
//!
//! Features include:
//!
//! - Points with arbitrary precision integer coordinates
//! - Exact fractions over arbitrary precision integers
//! - Lagrange interpolation at zero

mod lagrange;
mod point;
mod rational;

// Re-exports.
pub use self::{lagrange::*, point::*, rational::*};
