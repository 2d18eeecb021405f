// src/lib.rs

pub mod cli;
pub mod compare;
pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod file;
pub mod log;
pub mod progress;
pub mod report;
pub mod runner;
pub mod specs;

pub use error::{Error, Result};
