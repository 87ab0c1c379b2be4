//! # Domain Types
//!
//! Core domain types used throughout receipt processing.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  Wire side (untrusted)              Validated side (trusted)            │
//! │  ─────────────────────              ────────────────────────            │
//! │  ┌─────────────────┐                ┌─────────────────┐                 │
//! │  │ ReceiptPayload  │   validate()   │    Receipt      │   score()       │
//! │  │  every field    │ ─────────────► │  NaiveDate      │ ──────────►     │
//! │  │  Option<String> │                │  NaiveTime      │   Points        │
//! │  └─────────────────┘                │  Money total    │                 │
//! │  ┌─────────────────┐                └─────────────────┘                 │
//! │  │  ItemPayload    │                ┌─────────────────┐                 │
//! │  │  Option<String> │ ─────────────► │     Item        │                 │
//! │  └─────────────────┘                │  Money price    │                 │
//! │                                     └─────────────────┘                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Two Shapes?
//! The payload mirrors the JSON exactly, including absent fields, so the
//! validator can report `MissingField`. A `Receipt` can only be built by the
//! validator, so anything holding one is known to be well-formed.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

/// Reward points awarded to a receipt.
pub type Points = u64;

// =============================================================================
// Receipt Payload
// =============================================================================

/// A receipt as submitted by a client.
///
/// ```json
/// {
///   "retailer": "Target",
///   "purchaseDate": "2022-01-01",
///   "purchaseTime": "13:01",
///   "items": [{ "shortDescription": "Mountain Dew 12PK", "price": "6.49" }],
///   "total": "6.49"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ReceiptPayload {
    /// Store name.
    pub retailer: Option<String>,

    /// Date printed on the receipt (`YYYY-MM-DD`).
    pub purchase_date: Option<String>,

    /// Time printed on the receipt (`HH:MM`, 24-hour).
    pub purchase_time: Option<String>,

    /// Line items in receipt order.
    pub items: Option<Vec<ItemPayload>>,

    /// Amount paid (`\d+\.\d{2}`).
    pub total: Option<String>,
}

/// A line item as submitted by a client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ItemPayload {
    /// Product description as printed.
    pub short_description: Option<String>,

    /// Line price (`\d+\.\d{2}`).
    pub price: Option<String>,
}

impl ItemPayload {
    /// Creates an item payload with both fields present.
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        ItemPayload {
            short_description: Some(short_description.into()),
            price: Some(price.into()),
        }
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// A receipt that passed validation.
///
/// ## Invariants
/// - `retailer` is non-empty and only holds word chars, whitespace, `-`, `&`
/// - `items` holds at least one entry, in submission order
/// - Amounts were parsed from `\d+\.\d{2}` text, so they are never negative
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    retailer: String,
    purchase_date: NaiveDate,
    purchase_time: NaiveTime,
    items: Vec<Item>,
    total: Money,
}

impl Receipt {
    pub(crate) fn new(
        retailer: String,
        purchase_date: NaiveDate,
        purchase_time: NaiveTime,
        items: Vec<Item>,
        total: Money,
    ) -> Self {
        Receipt {
            retailer,
            purchase_date,
            purchase_time,
            items,
            total,
        }
    }

    #[inline]
    pub fn retailer(&self) -> &str {
        &self.retailer
    }

    #[inline]
    pub fn purchase_date(&self) -> NaiveDate {
        self.purchase_date
    }

    #[inline]
    pub fn purchase_time(&self) -> NaiveTime {
        self.purchase_time
    }

    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[inline]
    pub fn total(&self) -> Money {
        self.total
    }
}

// =============================================================================
// Item
// =============================================================================

/// A validated line item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    short_description: String,
    price: Money,
}

impl Item {
    pub(crate) fn new(short_description: String, price: Money) -> Self {
        Item {
            short_description,
            price,
        }
    }

    /// Description exactly as submitted, surrounding whitespace included.
    #[inline]
    pub fn short_description(&self) -> &str {
        &self.short_description
    }

    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
