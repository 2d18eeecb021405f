// src/runner.rs
use std::path::PathBuf;

use tracing::{info, warn};

use crate::{
    compare::compare_with,
    config::options::AppOptions,
    core::net::{self, Source},
    data::{Product, Snapshot, Unmatched},
    error::{Error, Result},
    file::write_report_file,
    progress::{Progress, Stage},
    specs::catalog::CatalogSpec,
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub out_path: PathBuf,
    pub rows: usize,
    /// Rows whose price moved between the snapshots.
    pub changed: usize,
    pub unmatched: Unmatched,
}

/// Fetch both snapshots, parse, compare, write the report.
/// Strictly sequential; the first error aborts and no report is written.
pub fn run(
    opts: &AppOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    notify(&mut progress, |p| p.begin(Stage::ALL.len()));

    // Selectors are checked before any network traffic.
    let spec = CatalogSpec::new(&opts.selectors).map_err(Error::Selectors)?;

    notify(&mut progress, |p| p.stage(Stage::FetchDayOne));
    let raw_one = fetch(Snapshot::DayOne, &opts.sources.day_one)?;
    notify(&mut progress, |p| p.stage(Stage::FetchDayTwo));
    let raw_two = fetch(Snapshot::DayTwo, &opts.sources.day_two)?;

    notify(&mut progress, |p| p.stage(Stage::ParseDayOne));
    let day_one = parse(&spec, Snapshot::DayOne, &raw_one)?;
    notify(&mut progress, |p| p.stage(Stage::ParseDayTwo));
    let day_two = parse(&spec, Snapshot::DayTwo, &raw_two)?;

    notify(&mut progress, |p| p.stage(Stage::Compare));
    let strategy = opts.compare.strategy;
    let comparison = compare_with(strategy, &day_one, &day_two)?;
    info!(?strategy, rows = comparison.deltas.len(), "compared snapshots");
    for name in &comparison.unmatched.day_one_only {
        warn!(product = %name, "only in day one");
    }
    for name in &comparison.unmatched.day_two_only {
        warn!(product = %name, "only in day two");
    }
    if !comparison.unmatched.is_empty() {
        let n = comparison.unmatched.day_one_only.len() + comparison.unmatched.day_two_only.len();
        notify(&mut progress, |p| p.log(&format!("{n} product(s) found in only one snapshot")));
    }

    notify(&mut progress, |p| p.stage(Stage::Write));
    let out_path = write_report_file(&opts.export, &comparison.deltas)?;
    info!(path = %out_path.display(), "report written");

    notify(&mut progress, |p| p.finish());

    Ok(RunSummary {
        out_path,
        rows: comparison.deltas.len(),
        changed: comparison.deltas.iter().filter(|d| !d.is_unchanged()).count(),
        unmatched: comparison.unmatched,
    })
}

fn notify(progress: &mut Option<&mut dyn Progress>, f: impl FnOnce(&mut dyn Progress)) {
    if let Some(p) = progress.as_deref_mut() {
        f(p);
    }
}

fn fetch(snapshot: Snapshot, source: &Source) -> Result<Vec<u8>> {
    let raw = net::load(source)?;
    info!(%snapshot, %source, bytes = raw.len(), "loaded snapshot");
    Ok(raw)
}

fn parse(spec: &CatalogSpec, snapshot: Snapshot, raw: &[u8]) -> Result<Vec<Product>> {
    let products = spec
        .parse(raw)
        .map_err(|source| Error::Parse { snapshot, source })?;
    info!(%snapshot, products = products.len(), "parsed snapshot");
    Ok(products)
}
