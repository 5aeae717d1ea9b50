//! CLI commands. Each command exposes its clap `Args` and a `run` returning
//! the exit code.

pub mod build;
pub mod name;
pub mod normalize;

use std::fmt::Display;

/// Map a command result to an exit code, printing the error on failure.
pub fn exit_code<E: Display>(result: Result<(), E>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{err}");
            1
        }
    }
}
