use rand::Rng;

use crate::{math::matrix::Matrix, activation::activation::ActivationFunction};

/// Fully connected layer.
///
/// `weights` is `input_size × size`: row `i` holds input `i`'s connections to
/// every unit of this layer.
#[derive(Debug, Clone)]
pub struct Layer {
    pub size: usize,
    pub input_size: usize,
    pub weights: Matrix,
    pub biases: Vec<f64>,
    pub activator: ActivationFunction,
    neurons: Vec<f64>,
    pre_neurons: Vec<f64>, // z = xW + b, kept for the derivative
}

impl Layer {
    /// Creates a layer with all parameters at zero; call `randomize` before use.
    pub fn new(size: usize, input_size: usize, activation: ActivationFunction) -> Layer {
        Layer {
            size,
            input_size,
            weights: Matrix::zeros(input_size, size),
            biases: vec![0.0; size],
            activator: activation,
            neurons: vec![0.0; size],
            pre_neurons: vec![0.0; size],
        }
    }

    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.weights = Matrix::random(self.input_size, self.size, rng);
        self.biases = Matrix::random(1, self.size, rng).data;
    }

    /// Forward pass that records activations for a following `backward`.
    pub fn feed_from(&mut self, input: &[f64]) -> Vec<f64> {
        let z = self.linear(input);
        let a: Vec<f64> = z.iter().map(|&x| self.activator.function(x)).collect();
        self.pre_neurons = z;
        self.neurons = a.clone();
        a
    }

    /// Forward pass without touching the cached activations.
    pub fn evaluate(&self, input: &[f64]) -> Vec<f64> {
        self.linear(input)
            .into_iter()
            .map(|x| self.activator.function(x))
            .collect()
    }

    pub fn neurons(&self) -> &[f64] {
        &self.neurons
    }

    /// δ = error ⊙ σ'(z), where `error` is ∂E/∂a for this layer.
    pub fn compute_delta(&self, error: &[f64]) -> Vec<f64> {
        error
            .iter()
            .zip(&self.pre_neurons)
            .map(|(e, &z)| e * self.activator.derivative(z))
            .collect()
    }

    /// ∂E/∂a of the previous layer: W · δ. Must run before `apply_delta`.
    pub fn propagate(&self, delta: &[f64]) -> Vec<f64> {
        self.weights.mul_vec(delta)
    }

    /// Gradient step: W -= lr · xᵀδ, b -= lr · δ.
    pub fn apply_delta(&mut self, input: &[f64], delta: &[f64], lr: f64) {
        self.weights.sub_scaled_outer(input, delta, lr);
        for (b, d) in self.biases.iter_mut().zip(delta) {
            *b -= lr * d;
        }
    }

    fn linear(&self, input: &[f64]) -> Vec<f64> {
        let mut z = self.weights.vec_mul(input);
        for (zi, b) in z.iter_mut().zip(&self.biases) {
            *zi += b;
        }
        z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_layer_is_affine() {
        let mut layer = Layer::new(2, 2, ActivationFunction::Identity);
        layer.weights = Matrix::from_flat(2, 2, vec![1.0, 2.0, 3.0, 4.0]);
        layer.biases = vec![0.5, -0.5];
        assert_eq!(layer.evaluate(&[1.0, 1.0]), vec![4.5, 5.5]);
        assert_eq!(layer.feed_from(&[1.0, 0.0]), vec![1.5, 1.5]);
        assert_eq!(layer.neurons(), &[1.5, 1.5]);
    }

    #[test]
    fn apply_delta_moves_output_towards_target() {
        let mut layer = Layer::new(1, 1, ActivationFunction::Tanh);
        layer.weights = Matrix::from_flat(1, 1, vec![0.2]);
        let input = [1.0];
        let target = 0.9;
        let before = layer.feed_from(&input)[0];
        let delta = layer.compute_delta(&[before - target]);
        layer.apply_delta(&input, &delta, 0.5);
        let after = layer.evaluate(&input)[0];
        assert!((after - target).abs() < (before - target).abs());
    }
}
