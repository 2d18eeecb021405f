// src/progress.rs
use std::fmt;

/// One pipeline step, in run order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    FetchDayOne,
    FetchDayTwo,
    ParseDayOne,
    ParseDayTwo,
    Compare,
    Write,
}

impl Stage {
    pub const ALL: [Stage; 6] = [
        Stage::FetchDayOne,
        Stage::FetchDayTwo,
        Stage::ParseDayOne,
        Stage::ParseDayTwo,
        Stage::Compare,
        Stage::Write,
    ];
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::FetchDayOne => "Fetching day one",
            Stage::FetchDayTwo => "Fetching day two",
            Stage::ParseDayOne => "Parsing day one",
            Stage::ParseDayTwo => "Parsing day two",
            Stage::Compare => "Comparing",
            Stage::Write => "Writing report",
        })
    }
}

/// Progress reporting for a run. Front ends implement what they care about.
pub trait Progress {
    /// Called once with the number of stages.
    fn begin(&mut self, _total: usize) {}

    /// A stage is starting.
    fn stage(&mut self, _stage: Stage) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called after the last stage succeeded.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
