use std::fmt;

use serde::{Serialize, Deserialize};

/// Which side of a trial came out ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    /// Baseline converged, augmented hit the cap.
    BaselineWins,
    /// Augmented converged, baseline hit the cap.
    AugmentedWins,
    Tie,
}

impl Outcome {
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::BaselineWins => "baseline-wins",
            Outcome::AugmentedWins => "augmented-wins",
            Outcome::Tie => "tie",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How a trial is scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionRule {
    /// Only the iteration cap decides.
    IterationCap,
    /// The cap decides, and the winner must also have the lower test error.
    CapAndTestError,
}

impl DecisionRule {
    pub fn from_name(name: &str) -> Option<DecisionRule> {
        match name.to_lowercase().as_str() {
            "cap" | "iteration-cap" => Some(DecisionRule::IterationCap),
            "cap-test" | "cap-and-test-error" => Some(DecisionRule::CapAndTestError),
            _ => None,
        }
    }
}

impl Default for DecisionRule {
    fn default() -> Self {
        DecisionRule::IterationCap
    }
}

/// What one side of a trial produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub iterations: usize,
    pub error: f64,
    pub test_error: f64,
}

/// Scores a trial. Returns `Tie` whenever the cap alone does not separate
/// the two runs (both converged or both capped), and under
/// `CapAndTestError` also when the test errors point the other way.
pub fn classify(
    baseline: &RunSummary,
    augmented: &RunSummary,
    max_iterations: usize,
    rule: DecisionRule,
) -> Outcome {
    let baseline_converged = baseline.iterations < max_iterations;
    let augmented_converged = augmented.iterations < max_iterations;
    let baseline_capped = baseline.iterations == max_iterations;
    let augmented_capped = augmented.iterations == max_iterations;

    let candidate = if baseline_converged && augmented_capped {
        Outcome::BaselineWins
    } else if baseline_capped && augmented_converged {
        Outcome::AugmentedWins
    } else {
        return Outcome::Tie;
    };

    match rule {
        DecisionRule::IterationCap => candidate,
        DecisionRule::CapAndTestError => {
            let agrees = match candidate {
                Outcome::BaselineWins => baseline.test_error < augmented.test_error,
                Outcome::AugmentedWins => augmented.test_error < baseline.test_error,
                Outcome::Tie => false,
            };
            if agrees { candidate } else { Outcome::Tie }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(iterations: usize, test_error: f64) -> RunSummary {
        RunSummary { iterations, error: 0.01, test_error }
    }

    #[test]
    fn cap_scenarios() {
        let rule = DecisionRule::IterationCap;
        assert_eq!(classify(&run(50, 1.0), &run(100, 1.0), 100, rule), Outcome::BaselineWins);
        assert_eq!(classify(&run(100, 1.0), &run(60, 1.0), 100, rule), Outcome::AugmentedWins);
        assert_eq!(classify(&run(100, 1.0), &run(100, 1.0), 100, rule), Outcome::Tie);
        assert_eq!(classify(&run(40, 1.0), &run(70, 1.0), 100, rule), Outcome::Tie);
    }

    #[test]
    fn test_error_rule_needs_agreement() {
        let rule = DecisionRule::CapAndTestError;
        assert_eq!(classify(&run(50, 1.0), &run(100, 2.0), 100, rule), Outcome::BaselineWins);
        assert_eq!(classify(&run(50, 3.0), &run(100, 2.0), 100, rule), Outcome::Tie);
        assert_eq!(classify(&run(100, 5.0), &run(60, 4.0), 100, rule), Outcome::AugmentedWins);
        assert_eq!(classify(&run(100, 4.0), &run(60, 4.0), 100, rule), Outcome::Tie);
    }

    #[test]
    fn every_input_gets_exactly_one_label() {
        let cap = 10;
        for b in 0..=cap {
            for a in 0..=cap {
                for rule in [DecisionRule::IterationCap, DecisionRule::CapAndTestError] {
                    let o = classify(&run(b, 1.0), &run(a, 2.0), cap, rule);
                    let strict_base = b < cap && a == cap;
                    let strict_aug = b == cap && a < cap;
                    if !strict_base && !strict_aug {
                        assert_eq!(o, Outcome::Tie, "b={b} a={a}");
                    }
                    if strict_aug {
                        assert_ne!(o, Outcome::BaselineWins);
                    }
                }
            }
        }
    }

    #[test]
    fn labels() {
        assert_eq!(Outcome::BaselineWins.to_string(), "baseline-wins");
        assert_eq!(Outcome::AugmentedWins.label(), "augmented-wins");
        assert_eq!(Outcome::Tie.label(), "tie");
    }
}
