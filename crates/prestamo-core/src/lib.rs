pub mod annuity;
pub mod error;
pub mod types;

#[cfg(feature = "amortization")]
pub mod amortization;

pub use error::PrestamoError;
pub use types::*;

/// Standard result type for all engine operations
pub type PrestamoResult<T> = Result<T, PrestamoError>;
