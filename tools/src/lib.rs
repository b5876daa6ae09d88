//! Command line tooling for constant-term recovery.

pub mod command_solve;
