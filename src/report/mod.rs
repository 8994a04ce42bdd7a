// Report module
pub mod insights;

pub use insights::{REPORT_FILE_NAME, render_report, write_report};
