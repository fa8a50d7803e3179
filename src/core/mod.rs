//! Core business logic abstractions

pub mod log;
pub mod rates;
pub mod source;

// Re-export main types for cleaner imports
pub use rates::{ConvertError, RateTable};
pub use source::{FetchError, RateSource};
