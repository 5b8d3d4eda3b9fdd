use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_traits::{ToPrimitive, Zero};

use super::model::{Item, Receipt};

const POINTS_PER_ALPHANUMERIC_CHAR: u64 = 1;
const POINTS_PER_ITEM_PAIR: u64 = 5;
const ROUND_TOTAL_BONUS: u64 = 50;
const QUARTER_MULTIPLE_BONUS: u64 = 25;
const ODD_DAY_BONUS: u64 = 6;
const AFTERNOON_BONUS: u64 = 10;
/// Purchases from 14:00 up to, but excluding, 16:00.
const AFTERNOON_HOURS: std::ops::Range<i64> = 14..16;
const DESCRIPTION_LENGTH_MULTIPLE: usize = 3;
/// Largest exponent or decimal scale accepted for totals and prices.
const MAX_AMOUNT_EXPONENT: u64 = 64;

/// Points earned by a receipt, one field per rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointsBreakdown {
    pub retailer: u64,
    pub item_pairs: u64,
    pub round_total: u64,
    pub quarter_total: u64,
    pub odd_day: u64,
    pub afternoon: u64,
    pub item_descriptions: u64,
}

impl PointsBreakdown {
    pub fn for_receipt(receipt: &Receipt) -> Self {
        let total = parse_amount(&receipt.total);

        Self {
            retailer: retailer_points(&receipt.retailer),
            item_pairs: item_pair_points(&receipt.items),
            round_total: total.as_ref().map_or(0, round_total_points),
            quarter_total: total.as_ref().map_or(0, quarter_total_points),
            odd_day: odd_day_points(&receipt.purchase_date),
            afternoon: afternoon_points(&receipt.purchase_time),
            item_descriptions: receipt.items.iter().map(item_description_points).sum(),
        }
    }

    pub fn total(&self) -> u64 {
        self.retailer
            + self.item_pairs
            + self.round_total
            + self.quarter_total
            + self.odd_day
            + self.afternoon
            + self.item_descriptions
    }
}

impl fmt::Display for PointsBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "retailer={} item_pairs={} round_total={} quarter_total={} odd_day={} afternoon={} item_descriptions={}",
            self.retailer,
            self.item_pairs,
            self.round_total,
            self.quarter_total,
            self.odd_day,
            self.afternoon,
            self.item_descriptions
        )
    }
}

/// Calculates the points a receipt is worth.
///
/// Never fails: a field that cannot be parsed earns nothing for the rules that
/// read it, the remaining rules still apply.
pub fn calculate_points(receipt: &Receipt) -> u64 {
    PointsBreakdown::for_receipt(receipt).total()
}

/// One point for every ASCII letter or digit in the retailer name.
fn retailer_points(retailer: &str) -> u64 {
    let count = retailer
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .count() as u64;
    count * POINTS_PER_ALPHANUMERIC_CHAR
}

/// Five points for every two items.
fn item_pair_points(items: &[Item]) -> u64 {
    (items.len() / 2) as u64 * POINTS_PER_ITEM_PAIR
}

/// 50 points when the total has no cents.
fn round_total_points(total: &BigDecimal) -> u64 {
    if is_whole(total) {
        ROUND_TOTAL_BONUS
    } else {
        0
    }
}

/// 25 points when the total is a multiple of 0.25.
fn quarter_total_points(total: &BigDecimal) -> u64 {
    let quarters = total * BigDecimal::from(4_i64);
    if is_whole(&quarters) {
        QUARTER_MULTIPLE_BONUS
    } else {
        0
    }
}

/// 6 points when the day in `YYYY-MM-DD` is odd.
fn odd_day_points(purchase_date: &str) -> u64 {
    match parse_day(purchase_date) {
        Some(day) if day % 2 == 1 => ODD_DAY_BONUS,
        _ => 0,
    }
}

/// 10 points when the hour in `HH:MM` falls within 14:00..16:00.
fn afternoon_points(purchase_time: &str) -> u64 {
    match parse_hour(purchase_time) {
        Some(hour) if AFTERNOON_HOURS.contains(&hour) => AFTERNOON_BONUS,
        _ => 0,
    }
}

/// `ceil(price * 0.2)` when the trimmed description length is a multiple of 3.
///
/// Length is measured in UTF-8 bytes. An all-whitespace description trims to
/// length 0 and therefore qualifies.
fn item_description_points(item: &Item) -> u64 {
    let length = item.short_description.trim().len();
    if length % DESCRIPTION_LENGTH_MULTIPLE != 0 {
        return 0;
    }

    parse_amount(&item.price)
        .and_then(|price| price_bonus(&price))
        .unwrap_or(0)
}

fn price_bonus(price: &BigDecimal) -> Option<u64> {
    if *price < BigDecimal::zero() {
        return None;
    }

    let scaled = price * BigDecimal::new(2.into(), 1);
    // with_scale truncates, which is floor for non-negative values
    let floor = scaled.with_scale(0);
    let ceil = if floor < scaled {
        floor + BigDecimal::from(1_i64)
    } else {
        floor
    };
    ceil.to_u64()
}

fn is_whole(value: &BigDecimal) -> bool {
    value.with_scale(0) == *value
}

/// Parses a total or price. Amounts whose exponent or scale exceeds
/// `MAX_AMOUNT_EXPONENT` are rejected before any rescaling, so they earn
/// nothing instead of expanding into enormous integers.
fn parse_amount(value: &str) -> Option<BigDecimal> {
    if let Some((_, exponent)) = value.split_once(['e', 'E']) {
        let exponent: i64 = exponent.parse().ok()?;
        if exponent.unsigned_abs() > MAX_AMOUNT_EXPONENT {
            return None;
        }
    }

    let amount = BigDecimal::from_str(value).ok()?;
    let (_, scale) = amount.as_bigint_and_exponent();
    (scale.unsigned_abs() <= MAX_AMOUNT_EXPONENT).then_some(amount)
}

fn parse_day(purchase_date: &str) -> Option<i64> {
    let mut segments = purchase_date.split('-');
    let (_year, _month, day) = (segments.next()?, segments.next()?, segments.next()?);
    if segments.next().is_some() {
        return None;
    }
    day.parse().ok()
}

fn parse_hour(purchase_time: &str) -> Option<i64> {
    let (hour, _minutes) = purchase_time.split_once(':')?;
    hour.parse().ok()
}
