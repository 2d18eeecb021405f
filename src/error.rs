// src/error.rs
use std::{io, path::PathBuf};

use rust_decimal::Decimal;
use thiserror::Error;

use crate::data::{Field, Snapshot};

/// Failure to obtain the raw markup of a snapshot.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not read snapshot file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Structural extraction failure. `index` is 0-based; messages show the 1-based position.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("product #{}: missing {field}", .index + 1)]
    MissingField { index: usize, field: Field },

    #[error("product #{}: price `{text}` is not a decimal number", .index + 1)]
    InvalidPrice { index: usize, text: String },

    #[error("product #{}: negative price {price}", .index + 1)]
    NegativePrice { index: usize, price: Decimal },

    #[error("invalid selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompareError {
    #[error("snapshots differ in length: day one has {day_one} products, day two has {day_two}")]
    Alignment { day_one: usize, day_two: usize },

    #[error("product #{}: name mismatch, day one `{day_one}` vs day two `{day_two}`", .index + 1)]
    Mismatch {
        index: usize,
        day_one: String,
        day_two: String,
    },

    #[error("`{name}` has a day one price of 0; percent change is undefined")]
    DivisionByZero { name: String },

    #[error("`{name}`: price change is out of range for exact decimal arithmetic")]
    Overflow { name: String },

    #[error("{snapshot} snapshot lists `{name}` more than once")]
    DuplicateName { snapshot: Snapshot, name: String },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("{snapshot} snapshot")]
    Parse {
        snapshot: Snapshot,
        #[source]
        source: ParseError,
    },

    #[error("invalid catalog selectors")]
    Selectors(#[source] ParseError),

    #[error(transparent)]
    Compare(#[from] CompareError),

    #[error("cannot write {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("report serialization failed")]
    Report(#[from] csv::Error),

    #[error("{0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, Error>;
