use std::path::PathBuf;

use crate::activation::activation::ActivationFunction;
use crate::cli::{invalid, parse_value, value_of};
use crate::data::dataset::FeatureMode;
use crate::error::Result;
use crate::experiment::classify::DecisionRule;
use crate::experiment::config::ExperimentConfig;

pub const EXPERIMENT_USAGE: &str = "\
Usage: ferrite-ab [--config PATH] [--hidden N] [--reps N] [--groups N] [--max-iter N]
                  [--lr F] [--max-error F] [--train-size N] [--test-size N]
                  [--train PATH] [--test PATH] [--output PATH] [--summary PATH]
                  [--seed N] [--workers N] [--rule cap|cap-test] [--extra random|zero]
                  [--activation tanh|sigmoid|identity] [--regenerate-baseline]";

/// Result of parsing the experiment runner's command line.
#[derive(Debug, Clone)]
pub struct ExperimentArgs {
    pub config: ExperimentConfig,
    /// Flags that were not recognised; reported by the caller.
    pub ignored: Vec<String>,
    pub help: bool,
}

/// Parses `args` (without the program name).
///
/// `--config` is applied first wherever it appears; every other flag then
/// overrides the loaded (or default) configuration.
pub fn parse_experiment_args(args: &[String]) -> Result<ExperimentArgs> {
    let mut config = ExperimentConfig::default();
    if let Some(i) = args.iter().position(|a| a == "--config") {
        config = ExperimentConfig::load_json(value_of(args, i)?)?;
    }

    let mut ignored = Vec::new();
    let mut help = false;

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--config" => {
                i += 1;
            }
            "--hidden" => {
                config.hidden = parse_value(flag, value_of(args, i)?)?;
                i += 1;
            }
            "--reps" => {
                config.repetitions = parse_value(flag, value_of(args, i)?)?;
                i += 1;
            }
            "--groups" => {
                config.groups = parse_value(flag, value_of(args, i)?)?;
                i += 1;
            }
            "--max-iter" => {
                config.max_iterations = parse_value(flag, value_of(args, i)?)?;
                i += 1;
            }
            "--lr" => {
                config.learning_rate = parse_value(flag, value_of(args, i)?)?;
                i += 1;
            }
            "--max-error" => {
                config.max_error = parse_value(flag, value_of(args, i)?)?;
                i += 1;
            }
            "--train-size" => {
                config.train_size = parse_value(flag, value_of(args, i)?)?;
                i += 1;
            }
            "--test-size" => {
                config.test_size = parse_value(flag, value_of(args, i)?)?;
                i += 1;
            }
            "--train" => {
                config.train_path = Some(PathBuf::from(value_of(args, i)?));
                i += 1;
            }
            "--test" => {
                config.test_path = Some(PathBuf::from(value_of(args, i)?));
                i += 1;
            }
            "--output" => {
                config.output = PathBuf::from(value_of(args, i)?);
                i += 1;
            }
            "--summary" => {
                config.summary = PathBuf::from(value_of(args, i)?);
                i += 1;
            }
            "--seed" => {
                config.seed = Some(parse_value(flag, value_of(args, i)?)?);
                i += 1;
            }
            "--workers" => {
                config.workers = parse_value(flag, value_of(args, i)?)?;
                i += 1;
            }
            "--rule" => {
                let raw = value_of(args, i)?;
                config.rule = DecisionRule::from_name(raw)
                    .ok_or_else(|| invalid(flag, raw, "expected cap or cap-test"))?;
                i += 1;
            }
            "--extra" => {
                let raw = value_of(args, i)?;
                config.extra = match FeatureMode::from_name(raw) {
                    Some(mode @ (FeatureMode::Random | FeatureMode::Zero)) => mode,
                    _ => return Err(invalid(flag, raw, "expected random or zero")),
                };
                i += 1;
            }
            "--activation" => {
                let raw = value_of(args, i)?;
                config.activation = ActivationFunction::from_name(raw)
                    .ok_or_else(|| invalid(flag, raw, "expected tanh, sigmoid or identity"))?;
                i += 1;
            }
            "--regenerate-baseline" => {
                config.regenerate_baseline = true;
            }
            "--help" | "-h" => {
                help = true;
            }
            other => {
                ignored.push(other.to_string());
            }
        }
        i += 1;
    }

    Ok(ExperimentArgs { config, ignored, help })
}
