//! # receipt-core: Pure Business Logic for Receipt Points
//!
//! This crate is the **heart** of the receipt points service. It validates
//! submitted receipts and scores them, as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Receipt Points Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    HTTP API (axum)                              │   │
//! │  │    POST /receipts/process      GET /receipts/{id}/points        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ receipt-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │validation │  │  scoring  │  │   │
//! │  │   │  Receipt  │  │   Money   │  │ validate  │  │   score   │  │   │
//! │  │   │   Item    │  │  (cents)  │  │  (rules)  │  │  (rules)  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    receipt-store                                │   │
//! │  │              id → (receipt, points)                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Receipt payloads and validated receipts
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Validation error types
//! - [`validation`] - Receipt validation
//! - [`scoring`] - Points rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same receipt in, same points out
//! 2. **No I/O**: storage and network access are FORBIDDEN here
//! 3. **Integer Money**: amounts are cents (i64), parsed straight from text
//! 4. **Explicit Errors**: validation returns `Result`, never panics
//!
//! ## Example Usage
//!
//! ```rust
//! use receipt_core::{score, validate, ItemPayload, ReceiptPayload};
//!
//! let payload = ReceiptPayload {
//!     retailer: Some("Target".to_string()),
//!     purchase_date: Some("2022-01-01".to_string()),
//!     purchase_time: Some("13:01".to_string()),
//!     items: Some(vec![
//!         ItemPayload::new("Mountain Dew 12PK", "6.49"),
//!         ItemPayload::new("Emils Cheese Pizza", "12.25"),
//!         ItemPayload::new("Knorr Creamy Chicken", "1.26"),
//!         ItemPayload::new("Doritos Nacho Cheese", "3.35"),
//!         ItemPayload::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
//!     ]),
//!     total: Some("35.35".to_string()),
//! };
//!
//! let receipt = validate(&payload)?;
//! assert_eq!(score(&receipt), 28);
//! # Ok::<(), receipt_core::ValidationError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod scoring;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use receipt_core::Money` instead of
// `use receipt_core::money::Money`

pub use error::{ItemDefect, ValidationError, ValidationResult};
pub use money::Money;
pub use scoring::{score, score_breakdown, PointsBreakdown};
pub use types::*;
pub use validation::validate;
