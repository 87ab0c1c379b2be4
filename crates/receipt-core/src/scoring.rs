//! # Scoring Module
//!
//! Computes reward points for a validated [`Receipt`].
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Rule                                              Points               │
//! │  ────────────────────────────────────────────────  ─────────────────    │
//! │  Alphanumeric chars in retailer                    +1 each              │
//! │  Total has no cents                                +50                  │
//! │  Total is a multiple of 0.25                       +25                  │
//! │  Every two items                                   +5 per pair          │
//! │  Trimmed description length is a multiple of 3     ceil(price × 0.2)    │
//! │  Purchase day is odd                               +6                   │
//! │  Purchase time after 14:00 and before 16:00        +10                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every rule works on integer cents, so there is no float rounding at the
//! `.00` / `.25` / ceiling boundaries.
//!
//! ## Usage
//! ```rust
//! use receipt_core::scoring::score;
//! use receipt_core::validation::validate;
//! use receipt_core::{ItemPayload, ReceiptPayload};
//!
//! let payload = ReceiptPayload {
//!     retailer: Some("M&M Corner Market".to_string()),
//!     purchase_date: Some("2022-03-20".to_string()),
//!     purchase_time: Some("14:33".to_string()),
//!     items: Some(vec![ItemPayload::new("Gatorade", "2.25"); 4]),
//!     total: Some("9.00".to_string()),
//! };
//!
//! let receipt = validate(&payload).unwrap();
//! assert_eq!(score(&receipt), 109);
//! ```

use chrono::{Datelike, Timelike};

use crate::types::{Item, Points, Receipt};

/// Bonus when the total is a round dollar amount.
pub const ROUND_TOTAL_POINTS: Points = 50;

/// Bonus when the total is a multiple of 25 cents.
pub const QUARTER_TOTAL_POINTS: Points = 25;

/// Cent step for the quarter bonus.
const QUARTER_CENTS: i64 = 25;

/// Points per pair of items.
pub const ITEM_PAIR_POINTS: Points = 5;

/// Share of an item's price awarded for qualifying descriptions (20%).
const DESCRIPTION_RATE_BPS: u32 = 2000;

/// Description lengths must be a multiple of this.
const DESCRIPTION_LENGTH_STEP: usize = 3;

/// Bonus for an odd day of month.
pub const ODD_DAY_POINTS: Points = 6;

/// Bonus for an afternoon purchase.
pub const AFTERNOON_POINTS: Points = 10;

/// Afternoon window in minutes since midnight, exclusive on both ends.
const AFTERNOON_START_MINUTE: u32 = 14 * 60;
const AFTERNOON_END_MINUTE: u32 = 16 * 60;

// =============================================================================
// Points Breakdown
// =============================================================================

/// Points earned by each rule.
///
/// ```text
/// Target / 2022-01-01 13:01 / 5 items / 35.35
///   retailer_name       6
///   round_dollar        0
///   quarter_multiple    0
///   item_pairs         10
///   item_descriptions   6   (3 + 3)
///   odd_day             6
///   afternoon           0
///   ──────────────────────
///   total              28
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointsBreakdown {
    pub retailer_name: Points,
    pub round_dollar: Points,
    pub quarter_multiple: Points,
    pub item_pairs: Points,
    pub item_descriptions: Points,
    pub odd_day: Points,
    pub afternoon: Points,
}

impl PointsBreakdown {
    /// Sum of every rule. Saturates at `Points::MAX`.
    pub fn total(&self) -> Points {
        [
            self.retailer_name,
            self.round_dollar,
            self.quarter_multiple,
            self.item_pairs,
            self.item_descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .fold(0, Points::saturating_add)
    }
}

// =============================================================================
// Scorer
// =============================================================================

/// Computes the points for a receipt.
///
/// Pure: the same receipt always scores the same.
pub fn score(receipt: &Receipt) -> Points {
    score_breakdown(receipt).total()
}

/// Computes the points for a receipt, rule by rule.
pub fn score_breakdown(receipt: &Receipt) -> PointsBreakdown {
    PointsBreakdown {
        retailer_name: retailer_name_points(receipt.retailer()),
        round_dollar: round_dollar_points(receipt),
        quarter_multiple: quarter_multiple_points(receipt),
        item_pairs: item_pair_points(receipt.items()),
        item_descriptions: receipt
            .items()
            .iter()
            .map(item_description_points)
            .fold(0, Points::saturating_add),
        odd_day: odd_day_points(receipt),
        afternoon: afternoon_points(receipt),
    }
}

// =============================================================================
// Rules
// =============================================================================

fn retailer_name_points(retailer: &str) -> Points {
    retailer.chars().filter(|c| c.is_alphanumeric()).count() as Points
}

fn round_dollar_points(receipt: &Receipt) -> Points {
    if receipt.total().is_whole_units() {
        ROUND_TOTAL_POINTS
    } else {
        0
    }
}

fn quarter_multiple_points(receipt: &Receipt) -> Points {
    if receipt.total().is_multiple_of_cents(QUARTER_CENTS) {
        QUARTER_TOTAL_POINTS
    } else {
        0
    }
}

fn item_pair_points(items: &[Item]) -> Points {
    ITEM_PAIR_POINTS.saturating_mul((items.len() / 2) as Points)
}

/// A blank description trims to length 0, which never qualifies.
fn item_description_points(item: &Item) -> Points {
    let trimmed_len = item.short_description().trim().chars().count();

    if trimmed_len == 0 || trimmed_len % DESCRIPTION_LENGTH_STEP != 0 {
        return 0;
    }

    item.price()
        .percentage_ceil_units(DESCRIPTION_RATE_BPS)
        .max(0) as Points
}

fn odd_day_points(receipt: &Receipt) -> Points {
    if receipt.purchase_date().day() % 2 == 1 {
        ODD_DAY_POINTS
    } else {
        0
    }
}

fn afternoon_points(receipt: &Receipt) -> Points {
    let time = receipt.purchase_time();
    let minute_of_day = time.hour() * 60 + time.minute();

    if minute_of_day > AFTERNOON_START_MINUTE && minute_of_day < AFTERNOON_END_MINUTE {
        AFTERNOON_POINTS
    } else {
        0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
