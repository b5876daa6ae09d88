//! Constant-term recovery for test cases.
use std::path::Path;

use num_bigint::BigInt;
use slog::{debug, info, warn, Logger};

use crate::{
    config::Config,
    errors::Error,
    logger::module_logger,
    poly::{interpolate_at_zero, Point},
    testcase::TestCase,
};

/// Recovers the constant term of the polynomial described by a test case.
///
/// The solver holds no mutable state and can be shared between threads.
pub struct Solver {
    config: Config,
    logger: Logger,
}

impl Solver {
    /// Creates a new solver.
    pub fn new(config: Config, logger: &Logger) -> Self {
        Self {
            config,
            logger: module_logger(logger, "solver"),
        }
    }

    /// Reads the test case from the given file and solves it.
    pub fn solve_file<P: AsRef<Path>>(&self, path: P) -> Result<BigInt, Error> {
        let path = path.as_ref();
        debug!(self.logger, "Reading test case"; "path" => %path.display());

        let case = TestCase::from_file(path)?;
        self.solve(&case)
    }

    /// Solves the given test case.
    pub fn solve(&self, case: &TestCase) -> Result<BigInt, Error> {
        let k = case.threshold();
        info!(self.logger, "Solving test case";
            "degree" => k.saturating_sub(1),
            "k" => k,
            "available" => case.len(),
            "selection" => %self.config.selection,
        );

        match self.recover(case) {
            Ok(constant) => {
                info!(self.logger, "Recovered constant term"; "constant" => %constant);
                Ok(constant)
            }
            Err(err) => {
                warn!(self.logger, "Failed to recover constant term"; "err" => %err);
                Err(err)
            }
        }
    }

    fn recover(&self, case: &TestCase) -> Result<BigInt, Error> {
        let points = case
            .points(self.config.selection)?
            .iter()
            .map(|encoded| {
                let point = encoded.decode()?;
                debug!(self.logger, "Decoded point";
                    "point" => %point,
                    "base" => encoded.base(),
                    "value" => encoded.value(),
                );
                Ok(point)
            })
            .collect::<Result<Vec<Point>, Error>>()?;

        interpolate_at_zero(&points)
    }
}
