// src/bin/cli.rs
use catalog_diff::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let _log_guard = log::init();

    cli::run()?;
    Ok(())
}
