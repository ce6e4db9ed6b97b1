use thiserror::Error;

/// Every fallible operation in the harness returns this error.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("dataset must contain at least one row")]
    EmptyDataset,

    #[error("cannot insert a column before index {column}; valid range is 0..={max}")]
    ColumnOutOfRange { column: usize, max: usize },

    #[error("shape mismatch: network expects {expected} {what}, dataset provides {actual}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("weight vector has {actual} entries, network needs {expected}")]
    WeightLength { expected: usize, actual: usize },

    #[error(
        "cannot transplant: baseline has {baseline} weights, augmented has {augmented}, \
         hidden count {hidden} requires augmented = baseline + hidden"
    )]
    TransplantMismatch {
        hidden: usize,
        baseline: usize,
        augmented: usize,
    },

    #[error("invalid value '{value}' for {flag}: {reason}")]
    InvalidArgument {
        flag: String,
        value: String,
        reason: String,
    },

    #[error("missing value for {0}")]
    MissingArgument(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, HarnessError>;
