//! Hand-rolled argument parsing for the two binaries.
//!
//! Unknown flags are collected and reported by the caller, never fatal.
//! Malformed values are errors, so a bad invocation stops before any data
//! is generated or any network is trained.

pub mod datagen_args;
pub mod experiment_args;

pub use datagen_args::{parse_datagen_args, DatagenArgs};
pub use experiment_args::{parse_experiment_args, ExperimentArgs};

use std::str::FromStr;

use crate::error::{HarnessError, Result};

/// The value following the flag at `args[i]`.
fn value_of<'a>(args: &'a [String], i: usize) -> Result<&'a str> {
    args.get(i + 1)
        .map(|s| s.trim())
        .ok_or_else(|| HarnessError::MissingArgument(args[i].clone()))
}

fn parse_value<T>(flag: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse::<T>().map_err(|e| HarnessError::InvalidArgument {
        flag: flag.to_string(),
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

fn invalid(flag: &str, raw: &str, reason: &str) -> HarnessError {
    HarnessError::InvalidArgument {
        flag: flag.to_string(),
        value: raw.to_string(),
        reason: reason.to_string(),
    }
}
