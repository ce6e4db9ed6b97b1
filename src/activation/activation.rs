use serde::{Serialize, Deserialize};
use std::f64::consts::E;

/// Element-wise transfer function applied by every neuron of a layer.
///
/// The experiment uses `Tanh` throughout; the other variants exist so the
/// runner can be pointed at a differently shaped squashing function without
/// touching the trial logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationFunction {
    Tanh,
    Sigmoid,
    Identity,
}

impl ActivationFunction {
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Tanh => x.tanh(),
            ActivationFunction::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
            ActivationFunction::Identity => x,
        }
    }

    /// Derivative evaluated at the pre-activation value `x`.
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Tanh => {
                let t = x.tanh();
                1.0 - t * t
            }
            ActivationFunction::Sigmoid => {
                let fx = self.function(x);
                fx * (1.0 - fx)
            }
            ActivationFunction::Identity => 1.0,
        }
    }

    /// Parses the lowercase names accepted on the command line.
    pub fn from_name(name: &str) -> Option<ActivationFunction> {
        match name.to_lowercase().as_str() {
            "tanh" => Some(ActivationFunction::Tanh),
            "sigmoid" => Some(ActivationFunction::Sigmoid),
            "identity" | "linear" => Some(ActivationFunction::Identity),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ActivationFunction::Tanh => "tanh",
            ActivationFunction::Sigmoid => "sigmoid",
            ActivationFunction::Identity => "identity",
        }
    }
}

impl Default for ActivationFunction {
    fn default() -> Self {
        ActivationFunction::Tanh
    }
}
