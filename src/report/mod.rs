pub mod writer;

pub use writer::{ReportWriter, GROUP_SEPARATOR};
