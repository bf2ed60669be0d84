//! Replay of newline-delimited JSON events through the dashboard.
//!
//! Each input line is one [`Event`]. Blank lines and lines starting with `#`
//! are skipped. One outcome line is written per event, then a final line with
//! the full dashboard snapshot.

use crate::emit;
use gmd_dashboard::{Dashboard, Event, Outcome};
use serde::Serialize;
use std::io::{BufRead, Write};

/// Counts from one replay run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub events: usize,
    pub rejected: usize,
    pub unreadable: usize,
}

/// Written in place of an outcome when a line is not a valid event.
#[derive(Debug, Serialize)]
struct InvalidEvent {
    outcome: &'static str,
    line: usize,
    error: String,
}

pub fn run_replay<R, W>(
    dashboard: &mut Dashboard,
    input: R,
    out: &mut W,
    pretty: bool,
) -> anyhow::Result<ReplaySummary>
where
    R: BufRead,
    W: Write,
{
    let mut summary = ReplaySummary::default();

    // Split on raw bytes so a line that is not UTF-8 is reported, not fatal.
    for (index, line) in input.split(b'\n').enumerate() {
        let line = line?;
        let line_number = index + 1;

        let parsed = match std::str::from_utf8(&line) {
            Ok(text) => {
                let text = text.trim();
                if text.is_empty() || text.starts_with('#') {
                    continue;
                }
                serde_json::from_str::<Event>(text).map_err(|e| e.to_string())
            }
            Err(e) => Err(e.to_string()),
        };

        let event = match parsed {
            Ok(event) => event,
            Err(error) => {
                log::warn!("[GMD] replay: line {line_number} is not an event: {error}");
                summary.unreadable += 1;
                let invalid = InvalidEvent {
                    outcome: "invalid_event",
                    line: line_number,
                    error,
                };
                emit(out, &invalid, pretty)?;
                continue;
            }
        };

        summary.events += 1;
        let outcome = dashboard.dispatch(event);
        if matches!(outcome, Outcome::Rejected { .. }) {
            summary.rejected += 1;
        }
        emit(out, &outcome, pretty)?;
    }

    emit(out, &dashboard.snapshot(), pretty)?;
    Ok(summary)
}
