/// Squared-error loss used by the learner.
///
/// The per-pattern error carries the conventional ½ factor so that its
/// gradient is exactly `predicted - expected`.
pub struct MseLoss;

impl MseLoss {
    /// ½ · Σ (predicted - expected)²
    pub fn pattern_error(predicted: &[f64], expected: &[f64]) -> f64 {
        0.5 * predicted.iter().zip(expected.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
    }

    /// Per-output gradient: predicted - expected
    pub fn derivative(predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        predicted.iter().zip(expected.iter())
            .map(|(a, b)| a - b)
            .collect()
    }
}
