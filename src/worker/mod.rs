//! Per-event analysis: fetch the log, summarize it, deliver the result.

pub mod deliver;
pub mod fetch;
pub mod handler;
pub mod summarize;

pub use handler::{AnalysisOutcome, SessionAnalysisHandler};
