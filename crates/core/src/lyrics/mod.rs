//! Timestamped lyric parsing.
//!
//! Input is the common `[MM:SS.ff]text` synchronised-lyrics subset. Each
//! usable line becomes a [`TimedEntry`] whose code snippet and category are
//! fixed by the line's position in the file, never by its position after
//! sorting.

mod category;
mod template;

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

pub use category::Category;
pub use template::CodeTemplate;

static TIMESTAMP_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[([0-9]{2}):([0-9]{2})\.([0-9]{2,3})\](.*)").expect("static lyric pattern")
});

/// One lyric line placed on the playback timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimedEntry {
    /// Seconds from the start of the track.
    pub time: f64,
    /// Trimmed lyric text.
    pub text: String,
    pub snippet: String,
    pub category: Category,
}

impl TimedEntry {
    /// Builds the entry for the lyric found on physical line `line_index`.
    pub fn new(time: f64, text: impl Into<String>, line_index: usize) -> Self {
        let text = text.into();
        let snippet = CodeTemplate::for_line(line_index).apply(&text);
        let category = Category::classify(&snippet);
        Self {
            time,
            text,
            snippet,
            category,
        }
    }
}

/// Parses a lyrics file into entries sorted by time.
///
/// Lines without a well-formed timestamp, and timestamped lines with no text,
/// are dropped silently. Entries sharing a timestamp keep their file order.
/// A leading UTF-8 byte order mark is ignored.
pub fn parse(raw: &str) -> Vec<TimedEntry> {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let mut lines = 0;
    let mut entries: Vec<TimedEntry> = raw
        .split('\n')
        .enumerate()
        .inspect(|_| lines += 1)
        .filter_map(|(index, line)| parse_line(line, index))
        .collect();

    entries.sort_by(|a, b| a.time.total_cmp(&b.time));

    tracing::debug!(
        entries = entries.len(),
        skipped = lines - entries.len(),
        "parsed lyrics"
    );
    entries
}

fn parse_line(line: &str, line_index: usize) -> Option<TimedEntry> {
    let caps = TIMESTAMP_LINE.captures(line)?;

    let text = caps[4].trim();
    if text.is_empty() {
        return None;
    }

    let minutes: u32 = caps[1].parse().ok()?;
    let seconds: u32 = caps[2].parse().ok()?;
    let fraction = &caps[3];
    let divisor = if fraction.len() == 3 { 1000.0 } else { 100.0 };
    let fraction: u32 = fraction.parse().ok()?;

    let time = f64::from(minutes) * 60.0 + f64::from(seconds) + f64::from(fraction) / divisor;
    Some(TimedEntry::new(time, text, line_index))
}
