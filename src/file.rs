// src/file.rs

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::data::PriceDelta;
use crate::error::{Error, Result};
use crate::report::to_report_string;

/// Render the full report, then write it in one truncating write.
/// Nothing touches the disk until rendering has succeeded.
pub fn write_report_file(export: &ExportOptions, deltas: &[PriceDelta]) -> Result<PathBuf> {
    let path = export.out_path();
    let contents = to_report_string(deltas, export.format, export.headers)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    if path.is_dir() {
        return Err(io_error(&path, io::Error::other("path is a directory")));
    }

    fs::write(&path, contents).map_err(|e| io_error(&path, e))?;
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io_error(dir, io::Error::other("path exists but is not a directory")));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| io_error(dir, e))?;
    }
    Ok(())
}

fn io_error(path: &Path, source: io::Error) -> Error {
    Error::Io { path: path.to_path_buf(), source }
}
