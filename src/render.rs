use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse the date strings found in the news feed.
/// Accepts plain dates ("2024-03-01"), naive timestamps with `T` or a space,
/// and RFC 3339 timestamps (normalized to UTC so they order correctly).
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw.trim()) {
        return Some(dt.naive_utc());
    }
    parse_naive(raw)
}

/// Same inputs as `parse_timestamp`, but an RFC 3339 timestamp keeps the
/// wall-clock time of its own offset. Used for display.
fn parse_local_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw.trim()) {
        return Some(dt.naive_local());
    }
    parse_naive(raw)
}

fn parse_naive(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0);
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S"))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .ok()
}

/// `2024.03.01`, used on news cards.
pub fn format_dotted_date(raw: &str) -> String {
    match parse_local_timestamp(raw) {
        Some(ts) => ts.format("%Y.%m.%d").to_string(),
        None => raw.to_string(),
    }
}

/// `2024年03月01日`, used on the news detail page.
pub fn format_long_date(raw: &str) -> String {
    match parse_local_timestamp(raw) {
        Some(ts) => ts.format("%Y年%m月%d日").to_string(),
        None => raw.to_string(),
    }
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
