use crate::data::dataset::Dataset;
use crate::network::network::Network;

/// Σ over rows and outputs of |output − desired|.
///
/// This is the held-out score recorded for each side of a trial. It is a
/// sum, not a mean, so values are only comparable across equally sized
/// test sets.
pub fn cumulative_abs_error(network: &Network, dataset: &Dataset) -> f64 {
    (0..dataset.len())
        .map(|row| {
            let output = network.predict(dataset.input(row));
            output.iter().zip(dataset.desired(row))
                .map(|(o, d)| (o - d).abs())
                .sum::<f64>()
        })
        .sum()
}
