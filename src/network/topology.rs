/// Shape of a single-hidden-layer network.
///
/// - `inputs` : number of input features (1 for the baseline, 2 when the
///               extra column is present)
/// - `hidden` : units in the hidden layer
/// - `outputs`: units in the output layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topology {
    pub inputs: usize,
    pub hidden: usize,
    pub outputs: usize,
}

impl Topology {
    pub fn new(inputs: usize, hidden: usize, outputs: usize) -> Topology {
        Topology { inputs, hidden, outputs }
    }

    /// Length of the flattened weight vector:
    /// input→hidden, hidden→output, then both bias vectors.
    pub fn weight_count(&self) -> usize {
        self.inputs * self.hidden + self.hidden * self.outputs + self.hidden + self.outputs
    }

    /// Same network with one more input unit.
    pub fn with_extra_input(&self) -> Topology {
        Topology { inputs: self.inputs + 1, ..*self }
    }
}
