// Utility functions module
pub mod date_format;
pub mod numbers;

// Re-export for easy access
pub use date_format::*;
pub use numbers::*;
