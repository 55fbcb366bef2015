//! Application-level error type for the storefront.
//!
//! Wraps the layers below. Validation failures are normally swallowed at
//! the controller (invalid input is ignored, not surfaced), so in practice
//! only storage failures reach a caller.

use bloms_core::ValidationError;
use bloms_store::StoreError;
use thiserror::Error;

/// Errors that can escape the storefront controller.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("storage failed: {0}")]
    Store(#[from] StoreError),
}

/// Result alias used throughout the app.
pub type AppResult<T> = Result<T, AppError>;
