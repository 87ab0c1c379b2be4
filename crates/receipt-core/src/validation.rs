//! # Validation Module
//!
//! Turns an untrusted [`ReceiptPayload`] into a trusted [`Receipt`].
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP extractor (axum + serde)                                │
//! │  ├── Body is JSON                                                      │
//! │  └── Fields have JSON string / array types                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Required fields present                                           │
//! │  ├── retailer / shortDescription character sets                        │
//! │  ├── YYYY-MM-DD date, HH:MM time                                       │
//! │  └── \d+\.\d{2} amounts                                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Receipt (only constructible here) ──► scoring                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Checks are fail-fast and run in a fixed order, so a receipt with several
//! problems always reports the same one.
//!
//! There are no range checks beyond format: `"0.00"` totals and prices pass.
//!
//! ## Usage
//! ```rust
//! use receipt_core::validation::validate;
//! use receipt_core::{ItemPayload, ReceiptPayload, ValidationError};
//!
//! let payload = ReceiptPayload {
//!     retailer: Some("Target$".to_string()),
//!     purchase_date: Some("2022-01-01".to_string()),
//!     purchase_time: Some("13:01".to_string()),
//!     items: Some(vec![ItemPayload::new("Pepsi", "1.25")]),
//!     total: Some("1.25".to_string()),
//! };
//!
//! assert_eq!(validate(&payload), Err(ValidationError::InvalidRetailer));
//! ```

use chrono::{NaiveDate, NaiveTime};

use crate::error::{ItemDefect, ValidationError, ValidationResult};
use crate::money::Money;
use crate::types::{Item, ItemPayload, Receipt, ReceiptPayload};

// =============================================================================
// Receipt Validator
// =============================================================================

/// Validates a submitted receipt.
///
/// ## Order of Checks
/// ```text
/// 1. retailer, purchaseDate, purchaseTime, items, total present → MissingField
/// 2. retailer                                                   → InvalidRetailer
/// 3. purchaseDate                                               → InvalidDate
/// 4. purchaseTime                                               → InvalidTime
/// 5. total                                                      → InvalidTotal
/// 6. items non-empty                                            → NoItems
/// 7. each item, in order                                        → InvalidItem
/// ```
pub fn validate(payload: &ReceiptPayload) -> ValidationResult<Receipt> {
    let retailer = require(&payload.retailer, "retailer")?;
    let purchase_date = require(&payload.purchase_date, "purchaseDate")?;
    let purchase_time = require(&payload.purchase_time, "purchaseTime")?;
    let items = require(&payload.items, "items")?;
    let total = require(&payload.total, "total")?;

    validate_retailer(retailer)?;
    let purchase_date = validate_purchase_date(purchase_date)?;
    let purchase_time = validate_purchase_time(purchase_time)?;
    let total = validate_total(total)?;

    if items.is_empty() {
        return Err(ValidationError::NoItems);
    }

    let items = items
        .iter()
        .enumerate()
        .map(|(index, item)| validate_item(index, item))
        .collect::<ValidationResult<Vec<Item>>>()?;

    Ok(Receipt::new(
        retailer.clone(),
        purchase_date,
        purchase_time,
        items,
        total,
    ))
}

fn require<'a, T>(field: &'a Option<T>, name: &'static str) -> ValidationResult<&'a T> {
    field
        .as_ref()
        .ok_or(ValidationError::MissingField { field: name })
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a retailer name.
///
/// ## Rules
/// - Must not be empty
/// - Letters, digits, `_`, whitespace, `-` and `&` only
///
/// ## Example
/// ```rust
/// use receipt_core::validation::validate_retailer;
///
/// assert!(validate_retailer("M&M Corner Market").is_ok());
/// assert!(validate_retailer("Target$").is_err());
/// assert!(validate_retailer("").is_err());
/// ```
pub fn validate_retailer(retailer: &str) -> ValidationResult<()> {
    if is_non_empty_of(retailer, |c| is_description_char(c) || c == '&') {
        Ok(())
    } else {
        Err(ValidationError::InvalidRetailer)
    }
}

/// Validates a purchase date and returns it parsed.
///
/// ## Rules
/// - Exactly `YYYY-MM-DD`: four-digit year, two-digit month and day
/// - Must be a real calendar date (no `2022-02-30`), year 0001 or later
///
/// ## Example
/// ```rust
/// use receipt_core::validation::validate_purchase_date;
///
/// assert!(validate_purchase_date("2022-03-20").is_ok());
/// assert!(validate_purchase_date("01-01-2022").is_err());
/// assert!(validate_purchase_date("2022-1-1").is_err());
/// ```
pub fn validate_purchase_date(date: &str) -> ValidationResult<NaiveDate> {
    if !has_digit_layout(date, "dddd-dd-dd") {
        return Err(ValidationError::InvalidDate);
    }

    let year: i32 = parse_digits(&date[0..4]);
    let month: u32 = parse_digits(&date[5..7]);
    let day: u32 = parse_digits(&date[8..10]);

    if year == 0 {
        return Err(ValidationError::InvalidDate);
    }

    NaiveDate::from_ymd_opt(year, month, day).ok_or(ValidationError::InvalidDate)
}

/// Validates a purchase time and returns it parsed.
///
/// ## Rules
/// - Exactly `HH:MM` on a 24-hour clock
/// - No seconds, no AM/PM suffix
///
/// ## Example
/// ```rust
/// use receipt_core::validation::validate_purchase_time;
///
/// assert!(validate_purchase_time("14:33").is_ok());
/// assert!(validate_purchase_time("1:01 PM").is_err());
/// assert!(validate_purchase_time("24:00").is_err());
/// ```
pub fn validate_purchase_time(time: &str) -> ValidationResult<NaiveTime> {
    if !has_digit_layout(time, "dd:dd") {
        return Err(ValidationError::InvalidTime);
    }

    let hour: u32 = parse_digits(&time[0..2]);
    let minute: u32 = parse_digits(&time[3..5]);

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or(ValidationError::InvalidTime)
}

/// Validates a receipt total and returns it as [`Money`].
///
/// ## Example
/// ```rust
/// use receipt_core::validation::validate_total;
///
/// assert_eq!(validate_total("35.35").unwrap().cents(), 3535);
/// assert!(validate_total("1.0").is_err());
/// ```
pub fn validate_total(total: &str) -> ValidationResult<Money> {
    Money::parse_amount(total).ok_or(ValidationError::InvalidTotal)
}

/// Validates one line item.
///
/// `index` is the item's position in the receipt, carried into the error.
pub fn validate_item(index: usize, item: &ItemPayload) -> ValidationResult<Item> {
    let defect = |reason| ValidationError::InvalidItem { index, reason };

    let description = item
        .short_description
        .as_ref()
        .ok_or_else(|| defect(ItemDefect::MissingDescription))?;
    let price = item
        .price
        .as_ref()
        .ok_or_else(|| defect(ItemDefect::MissingPrice))?;

    if !is_non_empty_of(description, is_description_char) {
        return Err(defect(ItemDefect::InvalidDescription));
    }

    let price = Money::parse_amount(price).ok_or_else(|| defect(ItemDefect::InvalidPrice))?;

    Ok(Item::new(description.clone(), price))
}

// =============================================================================
// Character Helpers
// =============================================================================

/// Word characters, whitespace and hyphen.
///
/// "Word" follows `char::is_alphanumeric`, which also admits combining
/// marks with the Alphabetic property (e.g. Devanagari vowel signs).
fn is_description_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c.is_whitespace() || c == '-'
}

fn is_non_empty_of(text: &str, allowed: impl Fn(char) -> bool) -> bool {
    !text.is_empty() && text.chars().all(allowed)
}

/// Checks `text` against a layout where `d` is an ASCII digit and anything
/// else must match literally.
fn has_digit_layout(text: &str, layout: &str) -> bool {
    text.len() == layout.len()
        && text.bytes().zip(layout.bytes()).all(|(b, expected)| match expected {
            b'd' => b.is_ascii_digit(),
            literal => b == literal,
        })
}

/// Parses a slice already known to be ASCII digits.
fn parse_digits<T: Default + std::str::FromStr>(digits: &str) -> T {
    digits.parse().unwrap_or_default()
}

// =============================================================================
// Unit Tests
// =============================================================================
