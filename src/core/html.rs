// src/core/html.rs
// Small helpers over `scraper`'s tree for exact, class-based lookups.

use scraper::{ElementRef, Selector};

use crate::error::ParseError;

pub fn compile(selector: &str) -> Result<Selector, ParseError> {
    Selector::parse(selector).map_err(|e| ParseError::Selector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

/// Text of the first descendant matching `sel`, trimmed.
/// `None` when there is no such element or it holds only whitespace.
pub fn first_text(scope: ElementRef<'_>, sel: &Selector) -> Option<String> {
    let el = scope.select(sel).next()?;
    let text: String = el.text().collect();
    let text = text.trim();
    if text.is_empty() { None } else { Some(text.to_string()) }
}
