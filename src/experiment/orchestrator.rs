use std::io::Write;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::data::csv::read_dataset;
use crate::data::dataset::{augment, sin_cos, Dataset};
use crate::error::{HarnessError, Result};
use crate::experiment::classify::{classify, RunSummary};
use crate::experiment::config::ExperimentConfig;
use crate::experiment::tally::{ExperimentSummary, GroupReport, GroupTally, TrialResult};
use crate::experiment::transplant::align;
use crate::network::network::Network;
use crate::optim::sgd::Sgd;
use crate::report::writer::ReportWriter;
use crate::train::eval::cumulative_abs_error;
use crate::train::learn::learn;

/// Datasets every trial of a group reads. Never mutated once built.
pub struct TrialData<'a> {
    pub train_plain: &'a Dataset,
    pub train_extra: &'a Dataset,
    pub test_plain: &'a Dataset,
    pub test_extra: &'a Dataset,
}

/// Drives groups of paired baseline/augmented trainings.
pub struct Experiment {
    config: ExperimentConfig,
}

impl Experiment {
    pub fn new(config: ExperimentConfig) -> Result<Experiment> {
        config.validate()?;
        Ok(Experiment { config })
    }

    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    /// Runs every group, writing detail and summary lines to `report`.
    ///
    /// All randomness derives from one master seed: test data first, then per
    /// group the augmented training set and one seed per trial, drawn in trial
    /// order before any trial starts. Trials of a group run on a rayon pool and
    /// are reported in trial order, so a given seed always yields the same
    /// report regardless of worker count.
    ///
    /// Failing report writes are logged and skipped; failing trials abort.
    pub fn run<W: Write>(&self, report: &mut ReportWriter<W>) -> Result<ExperimentSummary> {
        let cfg = &self.config;
        let seed = cfg.seed.unwrap_or_else(|| rand::thread_rng().gen());
        let mut master = StdRng::seed_from_u64(seed);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(cfg.workers)
            .build()
            .map_err(|e| HarnessError::Config(format!("cannot start worker pool: {e}")))?;

        tracing::info!(
            seed,
            groups = cfg.groups,
            repetitions = cfg.repetitions,
            hidden = cfg.hidden,
            max_iterations = cfg.max_iterations,
            workers = pool.current_num_threads(),
            "starting experiment"
        );

        let test_plain = self.load_test_set()?;
        let test_extra = augment(&test_plain, cfg.extra, &mut master)?;
        let mut train_plain = self.load_train_set()?;

        let mut summary = ExperimentSummary::default();

        for group in 0..cfg.groups {
            // Only a file-backed set can change between reads; a generated
            // one is rebuilt identically.
            if cfg.regenerate_baseline && group > 0 {
                train_plain = self.load_train_set()?;
            }
            let train_extra = augment(&train_plain, cfg.extra, &mut master)?;
            let seeds: Vec<u64> = (0..cfg.repetitions).map(|_| master.gen()).collect();

            let data = TrialData {
                train_plain: &train_plain,
                train_extra: &train_extra,
                test_plain: &test_plain,
                test_extra: &test_extra,
            };

            let trials: Vec<TrialResult> = pool.install(|| {
                seeds
                    .par_iter()
                    .enumerate()
                    .map(|(trial, &trial_seed)| self.run_trial(&data, trial, trial_seed))
                    .collect::<Result<Vec<_>>>()
            })?;

            let tally = GroupTally::from_results(&trials);
            for t in &trials {
                if let Err(e) = report.write_trial(t) {
                    tracing::error!(group, trial = t.trial, error = %e, "failed to write trial record");
                }
            }
            if let Err(e) = report.finish_group(&tally) {
                tracing::error!(group, error = %e, "failed to write group summary");
            }

            tracing::info!(
                group,
                baseline_wins = tally.baseline_wins,
                augmented_wins = tally.augmented_wins,
                ties = tally.ties,
                "group finished"
            );
            summary.groups.push(GroupReport { group, tally, trials });
        }

        Ok(summary)
    }

    /// One A/B trial from a fixed seed.
    ///
    /// The baseline's pre-training weights are transplanted into the
    /// augmented network so both start from the same state on every shared
    /// connection.
    pub fn run_trial(&self, data: &TrialData<'_>, trial: usize, seed: u64) -> Result<TrialResult> {
        let cfg = &self.config;
        let mut rng = StdRng::seed_from_u64(seed);
        let optimizer = Sgd::new(cfg.learning_rate);
        let stop = cfg.stop_condition();
        let topology = cfg.baseline_topology();

        let mut baseline = Network::new(topology, cfg.activation);
        baseline.randomize_weights(&mut rng);
        let baseline_weights = baseline.weights();

        let b_stop = learn(&mut baseline, data.train_plain, &optimizer, &stop)?;
        let baseline_run = RunSummary {
            iterations: b_stop.iterations,
            error: b_stop.error,
            test_error: cumulative_abs_error(&baseline, data.test_plain),
        };

        let mut augmented = Network::new(topology.with_extra_input(), cfg.activation);
        augmented.randomize_weights(&mut rng);
        let fresh_weights = augmented.weights();
        augmented.set_weights(&align(&baseline_weights, &fresh_weights, topology.hidden)?)?;

        let a_stop = learn(&mut augmented, data.train_extra, &optimizer, &stop)?;
        let augmented_run = RunSummary {
            iterations: a_stop.iterations,
            error: a_stop.error,
            test_error: cumulative_abs_error(&augmented, data.test_extra),
        };

        let outcome = classify(&baseline_run, &augmented_run, cfg.max_iterations, cfg.rule);

        tracing::debug!(
            trial,
            outcome = outcome.label(),
            baseline_iterations = baseline_run.iterations,
            augmented_iterations = augmented_run.iterations,
            baseline_test_error = baseline_run.test_error,
            augmented_test_error = augmented_run.test_error,
            "trial finished"
        );

        Ok(TrialResult { trial, outcome, baseline: baseline_run, augmented: augmented_run })
    }

    fn load_train_set(&self) -> Result<Dataset> {
        let train = match &self.config.train_path {
            Some(path) => read_dataset(path, 1)?,
            None => sin_cos(self.config.train_size)?,
        };
        train.check_shape(1, 1)?;
        Ok(train)
    }

    fn load_test_set(&self) -> Result<Dataset> {
        let test = match &self.config.test_path {
            Some(path) => read_dataset(path, 1)?,
            None => sin_cos(self.config.test_size)?,
        };
        test.check_shape(1, 1)?;
        Ok(test)
    }
}
