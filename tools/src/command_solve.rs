//! Tool subcommand for solving test case files.
use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{anyhow, Context, Result};
use clap::{Arg, ArgMatches};
use num_bigint::BigInt;
use slog::{info, Level};

use polysolve_interpolation::{logger::new_logger, Config, Error, Selection, Solver};

/// Log level names accepted on the command line.
const LOG_LEVELS: &[&str] = &["critical", "error", "warning", "info", "debug", "trace"];

/// The outcome of solving a single test case file.
#[derive(Debug)]
pub struct Report {
    /// Path of the test case file.
    pub path: PathBuf,
    /// The recovered constant term or the reason it could not be recovered.
    pub result: std::result::Result<BigInt, Error>,
}

/// Return the command line argument specification.
pub fn get_arguments<'a, 'b>() -> Vec<Arg<'a, 'b>> {
    vec![
        Arg::with_name("testcase")
            .value_name("TESTCASE")
            .help("Test case JSON file")
            .takes_value(true)
            .multiple(true)
            .required(true),
        Arg::with_name("selection")
            .long("selection")
            .help("Which points of a test case to interpolate")
            .takes_value(true)
            .possible_values(Selection::NAMES)
            .default_value("sequential"),
        Arg::with_name("log-level")
            .long("log-level")
            .help("Minimum severity of log records written to stderr")
            .takes_value(true)
            .possible_values(LOG_LEVELS)
            .default_value("warning"),
    ]
}

/// Builds the solver configuration from command line arguments.
pub fn config_from_matches(matches: &ArgMatches) -> Result<Config> {
    let selection = matches
        .value_of("selection")
        .unwrap_or("sequential")
        .parse::<Selection>()
        .context("failed to parse point selection")?;

    Ok(Config { selection })
}

/// Returns the log level requested on the command line.
pub fn log_level_from_matches(matches: &ArgMatches) -> Result<Level> {
    match matches.value_of("log-level").unwrap_or("warning") {
        "critical" => Ok(Level::Critical),
        "error" => Ok(Level::Error),
        "warning" => Ok(Level::Warning),
        "info" => Ok(Level::Info),
        "debug" => Ok(Level::Debug),
        "trace" => Ok(Level::Trace),
        level => Err(anyhow!("unknown log level {:?}", level)),
    }
}

/// Solves the given test case files concurrently.
///
/// Reports are returned in the order of the given paths. A failure to solve
/// one file does not affect the others.
pub fn solve_files(solver: &Solver, paths: &[PathBuf]) -> Result<Vec<Report>> {
    crossbeam::thread::scope(|s| {
        let handles: Vec<_> = paths
            .iter()
            .map(|path| s.spawn(move |_| solver.solve_file(path)))
            .collect();

        handles
            .into_iter()
            .zip(paths)
            .map(|(handle, path)| {
                let result = handle
                    .join()
                    .map_err(|_| anyhow!("solver panicked on {}", path.display()))?;
                Ok(Report {
                    path: path.clone(),
                    result,
                })
            })
            .collect::<Result<Vec<_>>>()
    })
    .map_err(|_| anyhow!("solver threads panicked"))?
}

/// Writes each report to `out` when solved or to `err` when not.
///
/// Returns true if every report holds a recovered constant term.
pub fn print_reports<O: Write, E: Write>(
    reports: &[Report],
    out: &mut O,
    err: &mut E,
) -> io::Result<bool> {
    let mut solved = true;
    for report in reports {
        match &report.result {
            Ok(constant) => {
                writeln!(out, "Result (c) for {}: {}", report.path.display(), constant)?;
            }
            Err(error) => {
                writeln!(err, "Error processing {}: {}", report.path.display(), error)?;
                solved = false;
            }
        }
    }

    Ok(solved)
}

/// Solves the test cases given on the command line and prints the results.
///
/// Returns true if every test case was solved.
pub fn run(matches: &ArgMatches) -> Result<bool> {
    let logger = new_logger(log_level_from_matches(matches)?);
    let config = config_from_matches(matches)?;
    let paths: Vec<PathBuf> = matches
        .values_of("testcase")
        .ok_or_else(|| anyhow!("no test cases given"))?
        .map(PathBuf::from)
        .collect();

    info!(logger, "Solving test cases";
        "count" => paths.len(),
        "selection" => %config.selection,
    );

    let solver = Solver::new(config, &logger);
    let reports = solve_files(&solver, &paths)?;

    let solved = print_reports(&reports, &mut io::stdout().lock(), &mut io::stderr().lock())
        .context("failed to write results")?;

    Ok(solved)
}
