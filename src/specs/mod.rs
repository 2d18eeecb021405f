// src/specs/mod.rs
//! # Page "specs"
//!
//! Each spec knows how to read one kind of page: *where the ground truth lives in
//! the markup* and how to turn it into typed records.
//!
//! ## What lives here
//! - **Pure markup parsing**: bytes in, records out. No network, no files.
//! - **Selector use**: exact tag/class lookups compiled once per run
//!   (see `config::options::CatalogSelectors`).
//! - **Strict extraction**: a container missing a required field fails the
//!   whole page; nothing is defaulted or skipped.
//!
//! ## What does **not** live here
//! - Fetching (`core::net`), matching snapshots (`compare`), or export (`report`, `file`).
//!
//! ## Conventions & invariants
//! - Output preserves **document order**: the Nth container yields the Nth record.
//! - Text fields are trimmed of surrounding whitespace and otherwise verbatim.
//!
//! ## Testing notes
//! - Specs are tested **offline** against saved pages in `tests/fixtures/`.
pub mod catalog;
