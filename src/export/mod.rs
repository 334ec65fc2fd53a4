//! Export of search results for further analysis
//!
//! Currently supports a JSON report of per-position win statistics.

mod stats_json;

pub use stats_json::{PositionRecord, StatsReport, win_fractions};
