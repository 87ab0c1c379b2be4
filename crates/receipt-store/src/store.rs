//! # Receipt Store
//!
//! Keeps every processed receipt together with its points.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Receipt Store                                   │
//! │                                                                         │
//! │  POST /receipts/process                                                │
//! │       │  validate + score                                              │
//! │       ▼                                                                 │
//! │  store.put(receipt, points) ──► new ReceiptId (UUID v4)                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │  RwLock<HashMap<ReceiptId, StoredReceipt>> │                        │
//! │  │   id ─► { receipt, points, processed_at }  │                        │
//! │  └─────────────────────────────────────────┘                           │
//! │       ▲                                                                 │
//! │       │  store.get(&id)                                                │
//! │  GET /receipts/{id}/points                                             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! Writers take the lock exclusively; lookups share it. Nothing is held
//! across an await point other than the lock itself.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use receipt_core::{Points, Receipt};
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Receipt Id
// =============================================================================

/// Opaque identifier handed back on submission.
///
/// Rendered as a hyphenated lowercase UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReceiptId(Uuid);

impl ReceiptId {
    /// Generates a fresh random id.
    pub fn new_v4() -> Self {
        ReceiptId(Uuid::new_v4())
    }

    /// Parses an id received from a client.
    ///
    /// Only the exact text handed out on submission (hyphenated lowercase)
    /// is accepted. Anything else, including other spellings of the same
    /// UUID, was never issued and is reported as not found.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_store::ReceiptId;
    ///
    /// assert!(ReceiptId::parse("7fb1377b-b223-49d9-a31a-5a02701dd310").is_ok());
    /// assert!(ReceiptId::parse("7FB1377B-B223-49D9-A31A-5A02701DD310").is_err());
    /// assert!(ReceiptId::parse("not-a-uuid").is_err());
    /// ```
    pub fn parse(text: &str) -> StoreResult<Self> {
        match Uuid::parse_str(text) {
            Ok(uuid) if uuid.hyphenated().to_string() == text => Ok(ReceiptId(uuid)),
            _ => Err(StoreError::not_found(text)),
        }
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

// =============================================================================
// Stored Receipt
// =============================================================================

/// A receipt and the points it was awarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredReceipt {
    pub receipt: Receipt,
    pub points: Points,
    pub processed_at: DateTime<Utc>,
}

// =============================================================================
// Store
// =============================================================================

/// In-memory receipt store.
///
/// ## Example
/// ```rust,ignore
/// let store = ReceiptStore::new();
/// let id = store.put(receipt, 28).await;
/// assert_eq!(store.get(&id).await?.points, 28);
/// ```
#[derive(Debug, Default)]
pub struct ReceiptStore {
    receipts: RwLock<HashMap<ReceiptId, StoredReceipt>>,
}

impl ReceiptStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        ReceiptStore::default()
    }

    /// Stores a scored receipt under a freshly generated id.
    pub async fn put(&self, receipt: Receipt, points: Points) -> ReceiptId {
        let mut receipts = self.receipts.write().await;

        let mut id = ReceiptId::new_v4();
        while receipts.contains_key(&id) {
            id = ReceiptId::new_v4();
        }

        receipts.insert(
            id,
            StoredReceipt {
                receipt,
                points,
                processed_at: Utc::now(),
            },
        );

        info!(id = %id, points, "Receipt stored");
        id
    }

    /// Fetches a stored receipt by id.
    pub async fn get(&self, id: &ReceiptId) -> StoreResult<StoredReceipt> {
        let receipts = self.receipts.read().await;

        match receipts.get(id) {
            Some(stored) => Ok(stored.clone()),
            None => {
                debug!(id = %id, "Receipt lookup missed");
                Err(StoreError::not_found(id.to_string()))
            }
        }
    }

    /// Number of stored receipts.
    pub async fn len(&self) -> usize {
        self.receipts.read().await.len()
    }

    /// True when nothing has been stored yet.
    pub async fn is_empty(&self) -> bool {
        self.receipts.read().await.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
