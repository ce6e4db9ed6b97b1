pub mod classify;
pub mod config;
pub mod orchestrator;
pub mod tally;
pub mod transplant;

pub use classify::{classify, DecisionRule, Outcome, RunSummary};
pub use config::ExperimentConfig;
pub use orchestrator::{Experiment, TrialData};
pub use tally::{ExperimentSummary, GroupReport, GroupTally, TrialResult};
pub use transplant::align;
