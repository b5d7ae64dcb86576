// 🏅 Points Rules - Loyalty score for a receipt
// Seven independent rules, each contributing a non-negative amount
//
// Precondition: the receipt has passed `validate_receipt`. The rules read
// fixed-width slices of the date and time and parse the dollar strings.
// Anything that does not parse contributes 0 for that rule; slicing goes
// through `str::get`, so unvalidated input never panics.

use crate::receipt::{Item, Receipt};
use serde::{Deserialize, Serialize};

// ============================================================================
// RULE CONSTANTS
// ============================================================================

const ROUND_DOLLAR_POINTS: u64 = 50;
const QUARTER_MULTIPLE_POINTS: u64 = 25;
const ITEM_PAIR_POINTS: u64 = 5;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;

/// Share of an item's price awarded when its description length is a multiple of 3
const DESCRIPTION_PRICE_MULTIPLIER: f64 = 0.2;

/// Added before flooring so that exact products round up cleanly despite float noise
const ROUND_UP_BIAS: f64 = 0.9999;

// ============================================================================
// BREAKDOWN
// ============================================================================

/// Per-rule contributions for one receipt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointsBreakdown {
    /// One point per ASCII letter or digit in the retailer name
    pub retailer_name: u64,

    /// Total has no cents
    pub round_dollar: u64,

    /// Total is a nonzero multiple of 0.25
    pub quarter_multiple: u64,

    /// Every two items
    pub item_pairs: u64,

    /// Items whose trimmed description length is a multiple of 3
    pub item_descriptions: u64,

    /// Day of the purchase date is odd
    pub odd_day: u64,

    /// Purchased after 14:00 and before 16:00
    pub afternoon: u64,
}

impl PointsBreakdown {
    pub fn total(&self) -> u64 {
        self.retailer_name
            + self.round_dollar
            + self.quarter_multiple
            + self.item_pairs
            + self.item_descriptions
            + self.odd_day
            + self.afternoon
    }
}

// ============================================================================
// SCORING
// ============================================================================

/// Points for a validated receipt. Pure: same receipt, same score.
pub fn score(receipt: &Receipt) -> u64 {
    breakdown(receipt).total()
}

pub fn breakdown(receipt: &Receipt) -> PointsBreakdown {
    PointsBreakdown {
        retailer_name: retailer_name_points(&receipt.retailer),
        round_dollar: round_dollar_points(&receipt.total),
        quarter_multiple: quarter_multiple_points(&receipt.total),
        item_pairs: item_pair_points(receipt.items.len()),
        item_descriptions: receipt.items.iter().map(item_description_points).sum(),
        odd_day: odd_day_points(&receipt.purchase_date),
        afternoon: afternoon_points(&receipt.purchase_time),
    }
}

fn retailer_name_points(retailer: &str) -> u64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as u64
}

fn round_dollar_points(total: &str) -> u64 {
    if total.ends_with(".00") {
        ROUND_DOLLAR_POINTS
    } else {
        0
    }
}

fn quarter_multiple_points(total: &str) -> u64 {
    match parse_cents(total) {
        Some(cents) if cents != 0 && cents % 25 == 0 => QUARTER_MULTIPLE_POINTS,
        Some(_) => 0,
        // Unparseable total earns nothing
        None => 0,
    }
}

fn item_pair_points(item_count: usize) -> u64 {
    (item_count / 2) as u64 * ITEM_PAIR_POINTS
}

/// An empty trimmed description has length 0, which counts as a multiple of 3.
fn item_description_points(item: &Item) -> u64 {
    if item.short_description.trim().len() % 3 != 0 {
        return 0;
    }

    match item.price.parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => {
            (price * DESCRIPTION_PRICE_MULTIPLIER + ROUND_UP_BIAS).floor() as u64
        }
        // Unparseable price earns nothing
        _ => 0,
    }
}

fn odd_day_points(purchase_date: &str) -> u64 {
    match purchase_date.get(8..).and_then(|day| day.parse::<u32>().ok()) {
        Some(day) if day % 2 == 1 => ODD_DAY_POINTS,
        Some(_) => 0,
        None => 0,
    }
}

/// 14:01 through 15:59. Exactly 14:00 earns nothing.
fn afternoon_points(purchase_time: &str) -> u64 {
    let hour = purchase_time.get(..2).and_then(|h| h.parse::<u32>().ok());
    let minute = purchase_time.get(3..).and_then(|m| m.parse::<u32>().ok());

    match (hour, minute) {
        (Some(15), Some(_)) => AFTERNOON_POINTS,
        (Some(14), Some(minute)) if minute > 0 => AFTERNOON_POINTS,
        _ => 0,
    }
}

/// Whole cents of a `D+.DD` amount, without going through floating point.
fn parse_cents(amount: &str) -> Option<u64> {
    let (dollars, cents) = amount.split_once('.')?;
    if cents.len() != 2 {
        return None;
    }

    let dollars = dollars.parse::<u64>().ok()?;
    let cents = cents.parse::<u64>().ok()?;
    dollars.checked_mul(100)?.checked_add(cents)
}
