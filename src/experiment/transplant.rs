use crate::error::{HarnessError, Result};

/// Builds the starting weights for the augmented network.
///
/// The result shares every connection the two networks have in common with
/// the baseline's untrained weights; only the new input's connections to the
/// hidden layer come from the augmented network's own randomization:
///
/// - `[0, h)`     input 0 → hidden, from `baseline`
/// - `[h, 2h)`    input 1 → hidden, from `fresh_augmented`
/// - `[2h, ..)`   hidden → output and biases, from `baseline[h..]`
///
/// Both vectors must come from networks with the same hidden count, so
/// `fresh_augmented.len() == baseline.len() + hidden`.
pub fn align(baseline: &[f64], fresh_augmented: &[f64], hidden: usize) -> Result<Vec<f64>> {
    if baseline.len() < hidden || fresh_augmented.len() != baseline.len() + hidden {
        return Err(HarnessError::TransplantMismatch {
            hidden,
            baseline: baseline.len(),
            augmented: fresh_augmented.len(),
        });
    }

    let mut out = Vec::with_capacity(fresh_augmented.len());
    out.extend_from_slice(&baseline[..hidden]);
    out.extend_from_slice(&fresh_augmented[hidden..2 * hidden]);
    out.extend_from_slice(&baseline[hidden..]);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::activation::ActivationFunction;
    use crate::network::{Network, Topology};
    use rand::SeedableRng;

    fn ramp(start: f64, len: usize) -> Vec<f64> {
        (0..len).map(|i| start + i as f64).collect()
    }

    #[test]
    fn slices_come_from_the_right_source() {
        for h in 1..6 {
            let b = ramp(0.0, 3 * h + 1);
            let a = ramp(100.0, 4 * h + 1);
            let w = align(&b, &a, h).unwrap();
            assert_eq!(w.len(), b.len() + h);
            assert_eq!(&w[..h], &b[..h]);
            assert_eq!(&w[h..2 * h], &a[h..2 * h]);
            assert_eq!(&w[2 * h..], &b[h..]);
        }
    }

    #[test]
    fn mismatched_hidden_count_is_an_error() {
        let b = ramp(0.0, 10);
        let a = ramp(0.0, 14);
        let err = align(&b, &a, 3).unwrap_err();
        assert!(matches!(err, HarnessError::TransplantMismatch { hidden: 3, baseline: 10, augmented: 14 }));
        assert!(align(&ramp(0.0, 2), &ramp(0.0, 5), 3).is_err());
    }

    #[test]
    fn transplanted_network_matches_baseline_when_extra_input_is_zero() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(21);
        let topo = Topology::new(1, 4, 1);
        let mut baseline = Network::new(topo, ActivationFunction::Tanh);
        baseline.randomize_weights(&mut rng);
        let mut augmented = Network::new(topo.with_extra_input(), ActivationFunction::Tanh);
        augmented.randomize_weights(&mut rng);

        let w = align(&baseline.weights(), &augmented.weights(), topo.hidden).unwrap();
        augmented.set_weights(&w).unwrap();

        assert_eq!(augmented.layers[0].weights.row(0), baseline.layers[0].weights.row(0));
        for x in [0.0, 0.7, 3.1, 5.9] {
            let b = baseline.predict(&[x])[0];
            let a = augmented.predict(&[x, 0.0])[0];
            assert!((a - b).abs() < 1e-12);
        }
    }
}
