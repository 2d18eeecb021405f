// src/compare.rs
//
// Snapshot alignment + price deltas.
//
// - compare:         positional pairing; lengths and names must agree exactly.
// - compare_by_name: keyed join on product name; one-sided names are returned, not fatal.
//
// Both fail on the first zero day-one price or a percentage outside Decimal's range. Output is always in day-one order.

use std::collections::{HashMap, HashSet};

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::options::MatchStrategy;
use crate::data::{Comparison, PriceDelta, Product, Snapshot, Unmatched};
use crate::error::CompareError;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

pub fn compare_with(
    strategy: MatchStrategy,
    day_one: &[Product],
    day_two: &[Product],
) -> Result<Comparison, CompareError> {
    match strategy {
        MatchStrategy::Position => Ok(Comparison {
            deltas: compare(day_one, day_two)?,
            unmatched: Unmatched::default(),
        }),
        MatchStrategy::Name => compare_by_name(day_one, day_two),
    }
}

/// Pair `day_one[i]` with `day_two[i]`.
pub fn compare(day_one: &[Product], day_two: &[Product]) -> Result<Vec<PriceDelta>, CompareError> {
    if day_one.len() != day_two.len() {
        return Err(CompareError::Alignment { day_one: day_one.len(), day_two: day_two.len() });
    }

    day_one
        .iter()
        .zip(day_two)
        .enumerate()
        .map(|(index, (a, b))| {
            if a.name != b.name {
                return Err(CompareError::Mismatch {
                    index,
                    day_one: a.name.clone(),
                    day_two: b.name.clone(),
                });
            }
            price_delta(a, b)
        })
        .collect()
}

/// Join day one against a name index of day two.
pub fn compare_by_name(day_one: &[Product], day_two: &[Product]) -> Result<Comparison, CompareError> {
    ensure_unique(Snapshot::DayOne, day_one)?;
    let by_name = index_by_name(Snapshot::DayTwo, day_two)?;

    let mut deltas = Vec::with_capacity(day_one.len().min(day_two.len()));
    let mut unmatched = Unmatched::default();
    let mut seen: HashSet<&str> = HashSet::with_capacity(by_name.len());

    for a in day_one {
        match by_name.get(a.name.as_str()) {
            Some(b) => {
                seen.insert(b.name.as_str());
                deltas.push(price_delta(a, b)?);
            }
            None => unmatched.day_one_only.push(a.name.clone()),
        }
    }

    // day-two order for the leftovers
    unmatched.day_two_only = day_two
        .iter()
        .filter(|p| !seen.contains(p.name.as_str()))
        .map(|p| p.name.clone())
        .collect();

    Ok(Comparison { deltas, unmatched })
}

/// Delta for one matched pair. Record fields other than price come from day one.
pub fn price_delta(day_one: &Product, day_two: &Product) -> Result<PriceDelta, CompareError> {
    if day_one.price.is_zero() {
        return Err(CompareError::DivisionByZero { name: day_one.name.clone() });
    }
    let overflow = || CompareError::Overflow { name: day_one.name.clone() };

    let diff = day_two.price.checked_sub(day_one.price).ok_or_else(overflow)?;
    let percent = diff
        .checked_div(day_one.price)
        .and_then(|ratio| ratio.checked_mul(HUNDRED))
        .ok_or_else(overflow)?;

    Ok(PriceDelta {
        name: day_one.name.clone(),
        description: day_one.description.clone(),
        category: day_one.category.clone(),
        price_day_one: day_one.price,
        price_day_two: day_two.price,
        absolute_difference: round2(diff),
        percent_change: round2(percent),
    })
}

/// Two places, halves away from zero.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn ensure_unique(snapshot: Snapshot, products: &[Product]) -> Result<(), CompareError> {
    index_by_name(snapshot, products).map(|_| ())
}

fn index_by_name(snapshot: Snapshot, products: &[Product]) -> Result<HashMap<&str, &Product>, CompareError> {
    let mut map = HashMap::with_capacity(products.len());
    for p in products {
        if map.insert(p.name.as_str(), p).is_some() {
            return Err(CompareError::DuplicateName { snapshot, name: p.name.clone() });
        }
    }
    Ok(map)
}
