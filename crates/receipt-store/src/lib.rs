//! # receipt-store: Receipt Storage for Receipt Points
//!
//! This crate keeps processed receipts in memory, keyed by a generated id.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Receipt Points Data Flow                           │
//! │                                                                         │
//! │  HTTP handler (process_receipt)                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  receipt-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────┐    ┌──────────────┐  │   │
//! │  │   │ ReceiptStore  │    │ StoredReceipt  │    │  ReceiptId   │  │   │
//! │  │   │ put / get     │───►│ receipt        │    │  UUID v4     │  │   │
//! │  │   │ RwLock<Map>   │    │ points         │    │              │  │   │
//! │  │   └───────────────┘    └────────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The store, ids and stored records
//! - [`error`] - Store error types
//!
//! Storage lives only as long as the process.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use store::{ReceiptId, ReceiptStore, StoredReceipt};
