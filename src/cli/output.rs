//! Output formatting and progress spinners for CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Error, Result,
    export::win_fractions,
    tictactoe::{Position, WinStats},
};

/// Create a spinner for a running search, hidden when progress is disabled
pub fn create_spinner(message: &str, enabled: bool) -> Result<ProgressBar> {
    if !enabled {
        return Ok(ProgressBar::hidden());
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .map_err(|e| Error::ProgressBarTemplate {
                message: e.to_string(),
            })?,
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    Ok(pb)
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Format a number with thousands separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Render one result line: `(row,col) -> [counts] -> [fractions]`
pub fn format_win_line(pos: Position, counts: &[u64]) -> String {
    match win_fractions(counts) {
        Some(fractions) => format!("{pos} -> {counts:?} -> {fractions:?}"),
        None => format!("{pos} -> {counts:?} -> n/a"),
    }
}

/// Result lines for every position, in row-major order
pub fn format_win_stats(stats: &WinStats) -> Vec<String> {
    stats
        .iter()
        .map(|(&pos, counts)| format_win_line(pos, counts))
        .collect()
}
