// src/specs/catalog.rs
//
// Catalog page:
//   <div class="product">
//     <h2 class="product-name">…</h2>
//     <p class="product-price"><span class="price-number">49.95</span> CHF</p>
//     <p class="product-description">…</p>
//     <p class="product-category">…</p>
//   </div>   (repeated)

use std::str::FromStr;

use rust_decimal::Decimal;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::config::options::CatalogSelectors;
use crate::core::html::{compile, first_text};
use crate::data::{Field, Product};
use crate::error::ParseError;

/// Compiled selectors for one catalog layout. Build once, parse many.
#[derive(Debug)]
pub struct CatalogSpec {
    product: Selector,
    name: Selector,
    price: Selector,
    description: Selector,
    category: Selector,
}

impl CatalogSpec {
    pub fn new(selectors: &CatalogSelectors) -> Result<Self, ParseError> {
        Ok(Self {
            product: compile(&selectors.product)?,
            name: compile(&selectors.name)?,
            price: compile(&selectors.price)?,
            description: compile(&selectors.description)?,
            category: compile(&selectors.category)?,
        })
    }

    /// All product containers, in document order.
    pub fn parse(&self, raw: &[u8]) -> Result<Vec<Product>, ParseError> {
        let markup = String::from_utf8_lossy(raw);
        let doc = Html::parse_document(&markup);

        let products = doc
            .select(&self.product)
            .enumerate()
            .map(|(index, el)| self.extract(index, el))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = products.len(), "parsed catalog");
        Ok(products)
    }

    fn extract(&self, index: usize, el: ElementRef<'_>) -> Result<Product, ParseError> {
        let require = |sel: &Selector, field: Field| {
            first_text(el, sel).ok_or(ParseError::MissingField { index, field })
        };

        let name = require(&self.name, Field::Name)?;
        let price_text = require(&self.price, Field::Price)?;
        let description = require(&self.description, Field::Description)?;
        let category = require(&self.category, Field::Category)?;

        Ok(Product {
            name,
            price: parse_price(index, &price_text)?,
            description,
            category,
        })
    }
}

/// Parse with the default markup contract.
pub fn parse(raw: &[u8]) -> Result<Vec<Product>, ParseError> {
    CatalogSpec::new(&CatalogSelectors::default())?.parse(raw)
}

fn parse_price(index: usize, text: &str) -> Result<Decimal, ParseError> {
    let invalid = || ParseError::InvalidPrice { index, text: text.to_string() };
    if !is_plain_number(text) {
        return Err(invalid());
    }
    let price = Decimal::from_str(text).map_err(|_| invalid())?;
    if price.is_sign_negative() && !price.is_zero() {
        return Err(ParseError::NegativePrice { index, price });
    }
    Ok(price)
}

/// `[-]digits[.digits]`. `Decimal::from_str` alone also takes `_`, `e` and `+`.
fn is_plain_number(text: &str) -> bool {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    match unsigned.split_once('.') {
        Some((int, frac)) => digits(int) && digits(frac),
        None => digits(unsigned),
    }
}
