// src/config/consts.rs

// Snapshot sources
pub const DAY_ONE_URL: &str = "http://localhost:8080/Product_Catalog_Day_1.html";
pub const DAY_TWO_URL: &str = "http://localhost:8080/Product_Catalog_Day_2.html";

// Net
pub const USER_AGENT: &str = concat!("catalog_diff/", env!("CARGO_PKG_VERSION"));

// Markup contract
pub const PRODUCT_SELECTOR: &str = "div.product";
pub const NAME_SELECTOR: &str = "h2.product-name";
pub const PRICE_SELECTOR: &str = ".product-price .price-number";
pub const DESCRIPTION_SELECTOR: &str = "p.product-description";
pub const CATEGORY_SELECTOR: &str = "p.product-category";

// Local logs
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "price_report";
