pub mod amortization;
pub mod config;
pub mod error;
pub mod payment;
pub mod sanitize;
pub mod types;

pub use error::PitiError;
pub use types::*;

/// Standard result type for all piti operations
pub type PitiResult<T> = Result<T, PitiError>;
