pub mod dataset;
pub mod csv;
pub mod files;

pub use dataset::{Dataset, FeatureMode, EXTRA_COLUMN, augment, generate, sin_cos, target};
pub use files::{DatasetNaming, GenerationPlan};
