// src/cli.rs
use crate::config::options::{AppOptions, ExportFormat, HeaderStyle, MatchStrategy};
use crate::core::net::Source;
use crate::error::{Error, Result};
use crate::progress::{Progress, Stage};
use crate::runner::{self, RunSummary};

pub const HELP: &str = include_str!("cli_help.txt");

pub enum Command {
    Run(AppOptions),
    Help,
}

/// Parse process args and run the comparison.
pub fn run() -> Result<()> {
    match parse_args(std::env::args().skip(1))? {
        Command::Help => {
            eprintln!("{HELP}");
            Ok(())
        }
        Command::Run(opts) => {
            let mut progress = CliProgress::default();
            let summary = runner::run(&opts, Some(&mut progress))?;
            print_summary(&summary);
            Ok(())
        }
    }
}

/// Args without the program name. No args → all defaults.
pub fn parse_args<I>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = AppOptions::default();
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        let mut value = |flag: &str| {
            args.next().ok_or_else(|| usage(format!("Missing value for {flag}")))
        };
        match a.as_str() {
            "--day-one" => opts.sources.day_one = Source::parse(&value(&a)?),
            "--day-two" => opts.sources.day_two = Source::parse(&value(&a)?),
            "-o" | "--out" => opts.export.set_path(&value(&a)?),
            "--format" => {
                opts.export.format = match value(&a)?.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(usage(format!("Unknown format: {other}"))),
                };
            }
            "--match" => {
                opts.compare.strategy = match value(&a)?.to_ascii_lowercase().as_str() {
                    "position" => MatchStrategy::Position,
                    "name" => MatchStrategy::Name,
                    other => return Err(usage(format!("Unknown match strategy: {other}"))),
                };
            }
            "--headers" => {
                opts.export.headers = match value(&a)?.to_ascii_lowercase().as_str() {
                    "en" => HeaderStyle::English,
                    "de" => HeaderStyle::German,
                    other => return Err(usage(format!("Unknown header style: {other}"))),
                };
            }
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(usage(format!("Unknown arg: {a}"))),
        }
    }

    Ok(Command::Run(opts))
}

fn usage(msg: String) -> Error {
    Error::Usage(msg)
}

fn print_summary(summary: &RunSummary) {
    println!(
        "Wrote {} rows ({} changed) to {}",
        summary.rows,
        summary.changed,
        summary.out_path.display()
    );
    for name in &summary.unmatched.day_one_only {
        println!("  only in day one: {name}");
    }
    for name in &summary.unmatched.day_two_only {
        println!("  only in day two: {name}");
    }
}

/// Stage lines on stderr: `[2/6] Fetching day two…`
#[derive(Default)]
struct CliProgress {
    total: usize,
    done: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }

    fn stage(&mut self, stage: Stage) {
        self.done += 1;
        eprintln!("[{}/{}] {stage}…", self.done, self.total);
    }

    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn opts(list: &[&str]) -> AppOptions {
        match parse_args(args(list)).unwrap() {
            Command::Run(o) => o,
            Command::Help => panic!("unexpected help"),
        }
    }

    #[test]
    fn no_args_means_defaults() {
        assert_eq!(opts(&[]), AppOptions::default());
    }

    #[test]
    fn sources_and_output() {
        let o = opts(&["--day-one", "a.html", "--day-two", "https://x/b.html", "-o", "res/diff.txt", "--format", "tsv"]);
        assert_eq!(o.sources.day_one, Source::File("a.html".into()));
        assert_eq!(o.sources.day_two, Source::Url("https://x/b.html".into()));
        assert_eq!(o.export.out_path(), PathBuf::from("res").join("diff.tsv"));
    }

    #[test]
    fn strategy_and_headers() {
        let o = opts(&["--match", "Position", "--headers", "de"]);
        assert_eq!(o.compare.strategy, MatchStrategy::Position);
        assert_eq!(o.export.headers, HeaderStyle::German);
    }

    #[test]
    fn help_short_circuits() {
        assert!(matches!(parse_args(args(&["-h", "--bogus"])).unwrap(), Command::Help));
    }

    #[test]
    fn bad_input_is_a_usage_error() {
        for bad in [&["--format"][..], &["--format", "xlsx"], &["--wat"], &["--match", "fuzzy"]] {
            assert!(matches!(parse_args(args(bad)), Err(Error::Usage(_))), "{bad:?}");
        }
    }
}
