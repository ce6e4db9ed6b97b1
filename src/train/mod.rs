pub mod stop;
pub mod learn;
pub mod eval;

pub use stop::{StopCondition, StopReport};
pub use learn::learn;
pub use eval::cumulative_abs_error;
