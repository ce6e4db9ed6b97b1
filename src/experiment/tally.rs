use serde::{Serialize, Deserialize};

use crate::experiment::classify::{Outcome, RunSummary};

/// One completed A/B trial.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrialResult {
    /// 0-based index within its group.
    pub trial: usize,
    pub outcome: Outcome,
    pub baseline: RunSummary,
    pub augmented: RunSummary,
}

/// Outcome counts for one dataset group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupTally {
    pub baseline_wins: usize,
    pub augmented_wins: usize,
    pub ties: usize,
}

impl GroupTally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::BaselineWins => self.baseline_wins += 1,
            Outcome::AugmentedWins => self.augmented_wins += 1,
            Outcome::Tie => self.ties += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.baseline_wins + self.augmented_wins + self.ties
    }

    /// Folds `results` in trial-index order, whatever order they arrive in.
    pub fn from_results(results: &[TrialResult]) -> GroupTally {
        let mut ordered: Vec<&TrialResult> = results.iter().collect();
        ordered.sort_by_key(|r| r.trial);
        let mut tally = GroupTally::default();
        for r in ordered {
            tally.record(r.outcome);
        }
        tally
    }
}

/// Everything a finished experiment produced, group by group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperimentSummary {
    pub groups: Vec<GroupReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupReport {
    pub group: usize,
    pub tally: GroupTally,
    pub trials: Vec<TrialResult>,
}

impl ExperimentSummary {
    /// Sum of every group's tally.
    pub fn overall(&self) -> GroupTally {
        self.groups.iter().fold(GroupTally::default(), |acc, g| GroupTally {
            baseline_wins: acc.baseline_wins + g.tally.baseline_wins,
            augmented_wins: acc.augmented_wins + g.tally.augmented_wins,
            ties: acc.ties + g.tally.ties,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(trial: usize, outcome: Outcome) -> TrialResult {
        let run = RunSummary { iterations: 1, error: 0.0, test_error: 0.0 };
        TrialResult { trial, outcome, baseline: run, augmented: run }
    }

    #[test]
    fn tally_ignores_arrival_order() {
        let a = [result(0, Outcome::Tie), result(1, Outcome::BaselineWins), result(2, Outcome::AugmentedWins)];
        let b = [a[2], a[0], a[1]];
        let ta = GroupTally::from_results(&a);
        assert_eq!(ta, GroupTally::from_results(&b));
        assert_eq!(ta, GroupTally { baseline_wins: 1, augmented_wins: 1, ties: 1 });
        assert_eq!(ta.total(), 3);
    }

    #[test]
    fn overall_sums_groups() {
        let summary = ExperimentSummary {
            groups: vec![
                GroupReport { group: 0, tally: GroupTally { baseline_wins: 2, augmented_wins: 0, ties: 1 }, trials: vec![] },
                GroupReport { group: 1, tally: GroupTally { baseline_wins: 0, augmented_wins: 3, ties: 4 }, trials: vec![] },
            ],
        };
        assert_eq!(summary.overall(), GroupTally { baseline_wins: 2, augmented_wins: 3, ties: 5 });
    }
}
