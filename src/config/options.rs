// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::consts::*;
use crate::core::net::Source;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub sources: SourceOptions,
    pub selectors: CatalogSelectors,
    pub compare: CompareOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    pub day_one: Source,
    pub day_two: Source,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            day_one: Source::parse(DAY_ONE_URL),
            day_two: Source::parse(DAY_TWO_URL),
        }
    }
}

/// CSS selectors for the catalog markup. Price is the nested numeric element
/// inside the price-bearing element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogSelectors {
    pub product: String,
    pub name: String,
    pub price: String,
    pub description: String,
    pub category: String,
}

impl Default for CatalogSelectors {
    fn default() -> Self {
        Self {
            product: PRODUCT_SELECTOR.to_string(),
            name: NAME_SELECTOR.to_string(),
            price: PRICE_SELECTOR.to_string(),
            description: DESCRIPTION_SELECTOR.to_string(),
            category: CATEGORY_SELECTOR.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Pair the Nth product of each snapshot; names must agree.
    Position,
    /// Join on product name; one-sided names are reported, not fatal.
    #[default]
    Name,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompareOptions {
    pub strategy: MatchStrategy,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
}

/// Language of the report header row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeaderStyle {
    #[default]
    English,
    German,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub headers: HeaderStyle,
    out_path: OutputPath,
}

impl ExportOptions {
    /// Final file path: `<dir>/<stem>.<ext>`, extension from the format.
    pub fn out_path(&self) -> PathBuf {
        let mut name = self.out_path.file_stem.clone();
        name.push(".");
        name.push(self.format.ext());
        self.out_path.dir.join(name)
    }

    /// Split user text into dir + stem. A typed extension is ignored; format controls it.
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
        }
    }
}
