use crate::layers::dense::Layer;

/// Plain stochastic gradient descent with a fixed learning rate.
#[derive(Debug, Clone, Copy)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one update to `layer` given the input it saw and its δ.
    pub fn step(&self, layer: &mut Layer, input: &[f64], delta: &[f64]) {
        layer.apply_delta(input, delta, self.learning_rate);
    }
}
