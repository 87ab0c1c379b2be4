//! # Money Module
//!
//! Provides the `Money` type for handling receipt amounts safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Parsing "1.15" as f64 and converting to cents:                         │
//! │    1.15 * 100 = 114.99999999999999  ❌ expected 115                     │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "12.25" → 1225 cents, straight from the text                        │
//! │    Every points rule is integer arithmetic on cents                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use receipt_core::money::Money;
//!
//! let total = Money::parse_amount("35.35").unwrap();
//! assert_eq!(total.cents(), 3535);
//!
//! // Exactly two fraction digits are required
//! assert!(Money::parse_amount("35.3").is_none());
//! ```

use std::fmt;

/// Basis points in 100%.
const BPS_PER_WHOLE: i128 = 10_000;

/// Cents in one major currency unit.
const CENTS_PER_UNIT: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Same representation everywhere; receipt amounts
///   parsed from text are never negative
/// - **Single field tuple struct**: Zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Parses an amount written as `\d+\.\d{2}`.
    ///
    /// ## Rules
    /// - One or more ASCII digits, a dot, exactly two ASCII digits
    /// - No sign, no exponent, no surrounding whitespace
    /// - Leading zeros are fine (`"007.50"`)
    /// - Returns `None` when the cent count does not fit in `i64`
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// assert_eq!(Money::parse_amount("6.49").map(|m| m.cents()), Some(649));
    /// assert_eq!(Money::parse_amount("0.00").map(|m| m.cents()), Some(0));
    /// assert!(Money::parse_amount("1.0").is_none());
    /// assert!(Money::parse_amount("1.000").is_none());
    /// assert!(Money::parse_amount(".50").is_none());
    /// assert!(Money::parse_amount("1e2").is_none());
    /// ```
    pub fn parse_amount(text: &str) -> Option<Self> {
        let (major, minor) = text.split_once('.')?;

        if major.is_empty() || !major.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if minor.len() != 2 || !minor.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let major: i64 = major.parse().ok()?;
        let minor: i64 = minor.parse().ok()?;

        major
            .checked_mul(CENTS_PER_UNIT)?
            .checked_add(minor)
            .map(Money)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).dollars(), 10);
    /// ```
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / CENTS_PER_UNIT
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).cents_part(), 99);
    /// assert_eq!(Money::from_cents(-550).cents_part(), 50);
    /// ```
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % CENTS_PER_UNIT).abs()
    }

    /// True when the amount has no cents (`10.00`, `0.00`).
    #[inline]
    pub const fn is_whole_units(&self) -> bool {
        self.cents_part() == 0
    }

    /// True when the cent count is a multiple of `step_cents`.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// assert!(Money::from_cents(925).is_multiple_of_cents(25));
    /// assert!(!Money::from_cents(3535).is_multiple_of_cents(25));
    /// ```
    #[inline]
    pub const fn is_multiple_of_cents(&self, step_cents: i64) -> bool {
        self.0 % step_cents == 0
    }

    /// Applies a percentage and rounds the result UP to whole major units.
    ///
    /// ## Arguments
    /// * `rate_bps` - Rate in basis points (2000 = 20%)
    ///
    /// ## Implementation
    /// `ceil(cents * bps / (10000 * 100))` in i128 so large amounts never
    /// overflow and no float ever appears.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// // $12.25 × 20% = $2.45 → 3
    /// assert_eq!(Money::from_cents(1225).percentage_ceil_units(2000), 3);
    /// // $12.00 × 20% = $2.40 → 3
    /// assert_eq!(Money::from_cents(1200).percentage_ceil_units(2000), 3);
    /// // $5.00 × 20% = $1.00 → 1 (exact, not bumped)
    /// assert_eq!(Money::from_cents(500).percentage_ceil_units(2000), 1);
    /// ```
    pub fn percentage_ceil_units(&self, rate_bps: u32) -> i64 {
        let numerator = self.0 as i128 * rate_bps as i128;
        let denominator = BPS_PER_WHOLE * CENTS_PER_UNIT as i128;

        let quotient = numerator.div_euclid(denominator);
        let units = if numerator.rem_euclid(denominator) == 0 {
            quotient
        } else {
            quotient + 1
        };

        i64::try_from(units).unwrap_or(i64::MAX)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the amount in the same `\d+\.\d{2}` form it is parsed from.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}


// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(Money::parse_amount("35.35"), Some(Money::from_cents(3535)));
        assert_eq!(Money::parse_amount("0.00"), Some(Money::from_cents(0)));
        assert_eq!(Money::parse_amount("007.50"), Some(Money::from_cents(750)));
    }

    #[test]
    fn test_parse_amount_rejects_bad_shapes() {
        for text in [
            "", "1", "1.", "1.0", "1.000", ".99", "-1.00", "+1.00", "1e2", " 1.00", "1.00 ",
            "1,00", "1.0a", "a.00", "1.-1",
        ] {
            assert!(Money::parse_amount(text).is_none(), "accepted {:?}", text);
        }
    }

    #[test]
    fn test_parse_amount_overflow() {
        // Matches the text pattern but cannot be represented in i64 cents
        assert!(Money::parse_amount("99999999999999999999.00").is_none());
        assert!(Money::parse_amount("92233720368547758.07").is_some());
        assert!(Money::parse_amount("92233720368547758.08").is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "0.00");
    }

    #[test]
    fn test_whole_units_and_multiples() {
        assert!(Money::from_cents(900).is_whole_units());
        assert!(Money::from_cents(0).is_whole_units());
        assert!(!Money::from_cents(901).is_whole_units());

        assert!(Money::from_cents(0).is_multiple_of_cents(25));
        assert!(Money::from_cents(75).is_multiple_of_cents(25));
        assert!(!Money::from_cents(10).is_multiple_of_cents(25));
    }

    #[test]
    fn test_percentage_ceil_units() {
        assert_eq!(Money::from_cents(649).percentage_ceil_units(2000), 2);
        assert_eq!(Money::from_cents(1).percentage_ceil_units(2000), 1);
        assert_eq!(Money::from_cents(0).percentage_ceil_units(2000), 0);
        assert_eq!(Money::from_cents(i64::MAX).percentage_ceil_units(2000), i64::MAX / 500 + 1);
    }
}
