pub mod error;
pub mod types;

pub mod coverage;
pub mod esg;
pub mod plan;
pub mod report;
pub mod service;

pub use error::VsmeError;
pub use types::*;

/// Standard result type for all vsme operations
pub type VsmeResult<T> = Result<T, VsmeError>;
