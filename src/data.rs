// src/data.rs
//
// Plain value records shared by the pipeline stages.
//
// - Product:    one catalog entry as read from one snapshot.
// - PriceDelta: one matched product across both snapshots, numbers already rounded.
//
// Both are built once and never mutated.

use std::fmt;

use rust_decimal::Decimal;

/// Which of the two catalog captures a record came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Snapshot {
    DayOne,
    DayTwo,
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Snapshot::DayOne => "day one",
            Snapshot::DayTwo => "day two",
        })
    }
}

/// The four sub-fields every product container must carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Price,
    Description,
    Category,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Name => "name",
            Field::Price => "price",
            Field::Description => "description",
            Field::Category => "category",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Product {
    /// Display name; the matching key between snapshots.
    pub name: String,
    /// Listed price, non-negative, single currency.
    pub price: Decimal,
    pub description: String,
    pub category: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PriceDelta {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price_day_one: Decimal,
    pub price_day_two: Decimal,
    /// `price_day_two - price_day_one`, 2 places.
    pub absolute_difference: Decimal,
    /// Change relative to day one in percent, 2 places.
    pub percent_change: Decimal,
}

impl PriceDelta {
    #[inline]
    pub fn is_unchanged(&self) -> bool {
        self.absolute_difference.is_zero()
    }
}

/// Products that only one side of a keyed comparison knows about.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Unmatched {
    pub day_one_only: Vec<String>,
    pub day_two_only: Vec<String>,
}

impl Unmatched {
    pub fn is_empty(&self) -> bool {
        self.day_one_only.is_empty() && self.day_two_only.is_empty()
    }
}

/// Result of aligning two snapshots: deltas in day-one order plus leftovers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Comparison {
    pub deltas: Vec<PriceDelta>,
    pub unmatched: Unmatched,
}
