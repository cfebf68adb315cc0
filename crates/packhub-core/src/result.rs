//! Convenience result type alias for PackHub.

use crate::error::AppError;

/// A specialized `Result` type for PackHub operations.
pub type AppResult<T> = Result<T, AppError>;
