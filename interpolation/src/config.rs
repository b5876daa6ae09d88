//! Solver configuration.
use std::{fmt, str::FromStr};

use crate::errors::Error;

/// Solver configuration.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Which of the test case's points are used for interpolation.
    pub selection: Selection,
}

/// Strategy for choosing the `k` points of a test case.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    /// Use the points with x-coordinates `1..=k`, which must all be present.
    #[default]
    Sequential,
    /// Use the `k` points with the smallest x-coordinates.
    Ascending,
}

impl Selection {
    /// Names accepted by `from_str`.
    pub const NAMES: &'static [&'static str] = &["sequential", "ascending"];
}

impl FromStr for Selection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sequential" => Ok(Selection::Sequential),
            "ascending" => Ok(Selection::Ascending),
            _ => Err(Error::UnknownSelection(s.to_owned())),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Selection::Sequential => write!(f, "sequential"),
            Selection::Ascending => write!(f, "ascending"),
        }
    }
}
