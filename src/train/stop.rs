/// When `learn` stops.
///
/// # Fields
/// - `max_error`     : training stops once the iteration error drops
///                      strictly below this threshold
/// - `max_iterations`: hard cap on full passes over the dataset; reaching
///                      it means the run did not converge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopCondition {
    pub max_error: f64,
    pub max_iterations: usize,
}

impl StopCondition {
    pub fn new(max_error: f64, max_iterations: usize) -> Self {
        StopCondition { max_error, max_iterations }
    }
}

/// Returned by `learn` when training stops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopReport {
    /// Number of completed iterations (1-based count).
    pub iterations: usize,
    /// Total network error of the last completed iteration.
    pub error: f64,
}

impl StopReport {
    /// True when the run stopped below the threshold before the cap.
    pub fn converged(&self, stop: &StopCondition) -> bool {
        self.iterations < stop.max_iterations
    }
}
