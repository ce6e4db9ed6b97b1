use crate::data::dataset::Dataset;
use crate::error::Result;
use crate::loss::mse::MseLoss;
use crate::network::network::Network;
use crate::optim::sgd::Sgd;
use crate::train::stop::{StopCondition, StopReport};

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` on `dataset` with online gradient descent and blocks
/// until a stop condition is met.
///
/// One iteration is one pass over the rows in dataset order, updating the
/// weights after every row. The iteration error is the mean over rows of
/// ½·Σ(output − desired)².
///
/// Training stops after the first iteration whose error is below
/// `stop.max_error`, or after `stop.max_iterations` iterations, whichever
/// comes first. At least one iteration always runs.
///
/// # Errors
/// Returns an error if the dataset is empty or its input/output widths do
/// not match the network's topology.
pub fn learn(
    network: &mut Network,
    dataset: &Dataset,
    optimizer: &Sgd,
    stop: &StopCondition,
) -> Result<StopReport> {
    check_shape(network, dataset)?;

    let mut iteration = 0;
    loop {
        iteration += 1;
        let error = run_one_iteration(network, dataset, optimizer);

        if error < stop.max_error || iteration >= stop.max_iterations {
            tracing::trace!(iteration, error, "learning stopped");
            return Ok(StopReport { iterations: iteration, error });
        }
    }
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn check_shape(network: &Network, dataset: &Dataset) -> Result<()> {
    let topo = network.topology;
    dataset.check_shape(topo.inputs, topo.outputs)
}

/// One full pass in row order. Returns the mean pattern error.
fn run_one_iteration(network: &mut Network, dataset: &Dataset, optimizer: &Sgd) -> f64 {
    let mut total = 0.0;

    for row in 0..dataset.len() {
        let input = dataset.input(row);
        let desired = dataset.desired(row);

        let output = network.forward(input);
        total += MseLoss::pattern_error(&output, desired);

        // ∂E/∂a of the output layer, then walk backwards.
        let mut error = MseLoss::derivative(&output, desired);
        for i in (0..network.layers.len()).rev() {
            let delta = network.layers[i].compute_delta(&error);

            // Propagate through the pre-update weights.
            if i > 0 {
                error = network.layers[i].propagate(&delta);
            }

            let layer_input = if i == 0 {
                input.to_vec()
            } else {
                network.layers[i - 1].neurons().to_vec()
            };
            optimizer.step(&mut network.layers[i], &layer_input, &delta);
        }
    }

    total / dataset.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::activation::ActivationFunction;
    use crate::data::dataset::{sin_cos, Dataset};
    use crate::network::topology::Topology;
    use crate::error::HarnessError;
    use crate::train::eval::cumulative_abs_error;
    use rand::SeedableRng;

    fn net(inputs: usize, seed: u64) -> Network {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let mut n = Network::new(Topology::new(inputs, 3, 1), ActivationFunction::Tanh);
        n.randomize_weights(&mut rng);
        n
    }

    #[test]
    fn unreachable_threshold_hits_cap_exactly() {
        let mut n = net(1, 1);
        let ds = sin_cos(20).unwrap();
        let stop = StopCondition::new(0.0, 7);
        let report = learn(&mut n, &ds, &Sgd::new(0.1), &stop).unwrap();
        assert_eq!(report.iterations, 7);
        assert!(!report.converged(&stop));
    }

    #[test]
    fn trivial_threshold_stops_after_one_iteration() {
        let mut n = net(1, 2);
        let ds = sin_cos(20).unwrap();
        let stop = StopCondition::new(f64::MAX, 1000);
        let report = learn(&mut n, &ds, &Sgd::new(0.1), &stop).unwrap();
        assert_eq!(report.iterations, 1);
        assert!(report.converged(&stop));
    }

    #[test]
    fn training_reduces_test_error() {
        let ds = sin_cos(40).unwrap();
        let mut n = net(1, 3);
        let before = cumulative_abs_error(&n, &ds);
        learn(&mut n, &ds, &Sgd::new(0.1), &StopCondition::new(0.0, 300)).unwrap();
        let after = cumulative_abs_error(&n, &ds);
        assert!(after < before, "before {before}, after {after}");
    }

    #[test]
    fn learns_a_linear_target() {
        // y = 0.5x on a small range is easy for a tanh net.
        let rows = (0..20).map(|i| {
            let x = i as f64 / 20.0 - 0.5;
            vec![x, 0.5 * x]
        }).collect();
        let ds = Dataset::new(1, rows);
        let mut n = net(1, 4);
        let stop = StopCondition::new(1e-3, 5000);
        let report = learn(&mut n, &ds, &Sgd::new(0.1), &stop).unwrap();
        assert!(report.converged(&stop), "{report:?}");
        assert!(report.error < 1e-3);
    }

    #[test]
    fn width_mismatch_is_rejected() {
        let mut n = net(2, 5);
        let ds = sin_cos(5).unwrap();
        let err = learn(&mut n, &ds, &Sgd::new(0.1), &StopCondition::new(0.1, 5)).unwrap_err();
        assert!(matches!(err, HarnessError::ShapeMismatch { what: "inputs", expected: 2, actual: 1 }));
    }

    #[test]
    fn same_start_same_result() {
        let ds = sin_cos(30).unwrap();
        let stop = StopCondition::new(0.0, 25);
        let mut a = net(1, 8);
        let mut b = net(1, 8);
        let ra = learn(&mut a, &ds, &Sgd::new(0.1), &stop).unwrap();
        let rb = learn(&mut b, &ds, &Sgd::new(0.1), &stop).unwrap();
        assert_eq!(ra, rb);
        assert_eq!(a.weights(), b.weights());
    }
}
