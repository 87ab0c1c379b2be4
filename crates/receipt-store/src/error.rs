//! # Store Error Types
//!
//! Error types for receipt store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  StoreError (this module)                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in HTTP app) ← 404 "No receipt found for that ID."          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Receipt store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No receipt is stored under the id.
    ///
    /// ## When This Occurs
    /// - The id was never issued by this process
    /// - The id is not a UUID at all
    #[error("Receipt not found: {id}")]
    NotFound { id: String },
}

impl StoreError {
    /// Creates a NotFound error for a given ID.
    pub fn not_found(id: impl Into<String>) -> Self {
        StoreError::NotFound { id: id.into() }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
