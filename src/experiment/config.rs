use std::path::PathBuf;

use serde::{Serialize, Deserialize};

use crate::activation::activation::ActivationFunction;
use crate::data::dataset::FeatureMode;
use crate::error::{HarnessError, Result};
use crate::experiment::classify::DecisionRule;
use crate::network::topology::Topology;
use crate::train::stop::StopCondition;

/// Everything an experiment run needs.
///
/// Can be saved to / loaded from JSON; command-line flags are applied on top
/// of whatever the file (or `Default`) provides. Missing JSON fields take
/// their default values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    /// Units in the single hidden layer of both networks.
    pub hidden: usize,
    /// Trials per dataset group.
    pub repetitions: usize,
    /// Dataset groups; each gets a freshly drawn augmented training set.
    pub groups: usize,
    pub max_iterations: usize,
    pub learning_rate: f64,
    pub max_error: f64,
    /// Rows in the generated training set (ignored when `train_path` is set).
    pub train_size: usize,
    /// Rows in the generated test set (ignored when `test_path` is set).
    pub test_size: usize,
    pub activation: ActivationFunction,
    pub rule: DecisionRule,
    /// How the augmented side's extra column is filled (`random` or `zero`).
    pub extra: FeatureMode,
    /// Plain `x,y` CSV used instead of a generated training set.
    pub train_path: Option<PathBuf>,
    /// Plain `x,y` CSV used instead of a generated test set.
    pub test_path: Option<PathBuf>,
    /// Re-read `train_path` at the start of every group, picking up a file
    /// rewritten between groups. Without `train_path` the generated set is
    /// deterministic, so this has no effect.
    pub regenerate_baseline: bool,
    /// Per-trial detail lines.
    pub output: PathBuf,
    /// Per-group tally lines.
    pub summary: PathBuf,
    /// Master seed; `None` draws one from the OS.
    pub seed: Option<u64>,
    /// Worker threads for trials within a group; 0 lets rayon decide.
    pub workers: usize,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        ExperimentConfig {
            hidden: 3,
            repetitions: 10,
            groups: 2,
            max_iterations: 20_000,
            learning_rate: 0.1,
            max_error: 0.001,
            train_size: 1000,
            test_size: 10_000,
            activation: ActivationFunction::Tanh,
            rule: DecisionRule::IterationCap,
            extra: FeatureMode::Random,
            train_path: None,
            test_path: None,
            regenerate_baseline: false,
            output: PathBuf::from("TestRunOutput.txt"),
            summary: PathBuf::from("Summary.txt"),
            seed: None,
            workers: 0,
        }
    }
}

impl ExperimentConfig {
    pub fn baseline_topology(&self) -> Topology {
        Topology::new(1, self.hidden, 1)
    }

    pub fn stop_condition(&self) -> StopCondition {
        StopCondition::new(self.max_error, self.max_iterations)
    }

    /// Rejects configurations that cannot produce a meaningful run.
    pub fn validate(&self) -> Result<()> {
        if self.hidden == 0 {
            return Err(HarnessError::Config("hidden must be at least 1".into()));
        }
        if self.max_iterations == 0 {
            return Err(HarnessError::Config("max_iterations must be at least 1".into()));
        }
        if !(self.learning_rate > 0.0) {
            return Err(HarnessError::Config("learning_rate must be positive".into()));
        }
        if self.train_path.is_none() && self.train_size == 0 {
            return Err(HarnessError::Config("train_size must be at least 1".into()));
        }
        if self.test_path.is_none() && self.test_size == 0 {
            return Err(HarnessError::Config("test_size must be at least 1".into()));
        }
        if self.extra == FeatureMode::Plain {
            return Err(HarnessError::Config("extra must be random or zero".into()));
        }
        Ok(())
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a config from a JSON file previously written by `save_json`
    /// (or written by hand; absent fields fall back to defaults).
    pub fn load_json(path: &str) -> Result<ExperimentConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}
