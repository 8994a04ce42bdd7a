// Output module
pub mod table;

pub use table::{ArtifactRow, OutputFormat, RunSummary};
