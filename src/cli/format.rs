//! Output formatting for CLI display.

use jiff::tz::TimeZone;

use crate::model::{ActionKind, LogEntry, LogKind};

/// Format the whole log, console style.
pub(super) fn format_log(entries: &[LogEntry]) -> String {
    if entries.is_empty() {
        return "Waiting for requests...".to_string();
    }
    entries
        .iter()
        .map(format_entry)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Format one entry: tag line, message, then the payload if any.
pub(super) fn format_entry(entry: &LogEntry) -> String {
    let time = entry
        .timestamp()
        .to_zoned(TimeZone::system())
        .strftime("%H:%M:%S")
        .to_string();

    let tag = match (entry.kind(), entry.status()) {
        (LogKind::Request, _) => "REQUEST".to_string(),
        (LogKind::Response, status) => {
            let status = status.map_or_else(|| "---".to_string(), |s| s.to_string());
            let verdict = if entry.is_success() { "ok" } else { "failed" };
            format!("RESPONSE {status} {verdict}")
        }
    };

    let mut out = format!("[{tag}] {time}\n  {}", entry.message());
    if let Some(payload) = entry.payload() {
        let json = serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string());
        for line in json.lines() {
            out.push_str("\n    ");
            out.push_str(line);
        }
    }
    out
}

/// One line per action: method, endpoint, and title.
pub(super) fn format_endpoints(base_url: &str) -> String {
    ActionKind::ALL
        .iter()
        .map(|k| {
            format!(
                "POST {:<48} {}\n     {}",
                k.endpoint(base_url),
                k.title(),
                k.description()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
