use rand::Rng;

use crate::activation::activation::ActivationFunction;
use crate::error::{HarnessError, Result};
use crate::layers::dense::Layer;
use crate::network::topology::Topology;

/// Input → hidden → output perceptron used on both sides of the A/B trial.
#[derive(Debug, Clone)]
pub struct Network {
    pub topology: Topology,
    pub layers: Vec<Layer>,
}

impl Network {
    /// Builds the two layers described by `topology`. Parameters start at
    /// zero; call `randomize_weights` to draw an initial state.
    pub fn new(topology: Topology, activation: ActivationFunction) -> Network {
        let layers = vec![
            Layer::new(topology.hidden, topology.inputs, activation),
            Layer::new(topology.outputs, topology.hidden, activation),
        ];
        Network { topology, layers }
    }

    pub fn randomize_weights<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for layer in &mut self.layers {
            layer.randomize(rng);
        }
    }

    /// Flattened parameters: every weight matrix in layer order (row-major,
    /// one row per source unit), followed by every bias vector in layer order.
    pub fn weights(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.topology.weight_count());
        for layer in &self.layers {
            out.extend_from_slice(&layer.weights.data);
        }
        for layer in &self.layers {
            out.extend_from_slice(&layer.biases);
        }
        out
    }

    /// Inverse of `weights`.
    pub fn set_weights(&mut self, weights: &[f64]) -> Result<()> {
        let expected = self.topology.weight_count();
        if weights.len() != expected {
            return Err(HarnessError::WeightLength { expected, actual: weights.len() });
        }
        let mut offset = 0;
        for layer in &mut self.layers {
            let n = layer.weights.len();
            layer.weights.data.copy_from_slice(&weights[offset..offset + n]);
            offset += n;
        }
        for layer in &mut self.layers {
            let n = layer.biases.len();
            layer.biases.copy_from_slice(&weights[offset..offset + n]);
            offset += n;
        }
        Ok(())
    }

    /// Forward pass; stores activations in each layer for backprop.
    pub fn forward(&mut self, input: &[f64]) -> Vec<f64> {
        let mut current = input.to_vec();
        for layer in &mut self.layers {
            current = layer.feed_from(&current);
        }
        current
    }

    /// Forward pass for evaluation only.
    pub fn predict(&self, input: &[f64]) -> Vec<f64> {
        let mut current = input.to_vec();
        for layer in &self.layers {
            current = layer.evaluate(&current);
        }
        current
    }
}
