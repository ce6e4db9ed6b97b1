pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;
pub mod data;
pub mod experiment;
pub mod report;
pub mod cli;
pub mod error;
pub mod logging;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::activation::ActivationFunction;
pub use layers::dense::Layer;
pub use network::{Network, Topology};
pub use optim::sgd::Sgd;
pub use train::{learn, cumulative_abs_error, StopCondition, StopReport};
pub use data::{Dataset, FeatureMode};
pub use experiment::{
    align, classify, DecisionRule, Experiment, ExperimentConfig, ExperimentSummary, GroupTally,
    Outcome, RunSummary, TrialResult,
};
pub use report::ReportWriter;
pub use error::{HarnessError, Result};
