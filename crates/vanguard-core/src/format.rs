use chrono::{DateTime, NaiveDateTime, Utc};

pub const DASH: &str = "—";

/// Scores are always shown with two decimals. Exact halves round away from
/// zero (`0.125` is `"0.13"`), not to even.
pub fn score(v: f64) -> String {
    format!("{:.2}", (v * 100.0).round() / 100.0)
}

/// Renders an upstream timestamp in UTC. The backend emits naive ISO-8601
/// (no offset), which is read as UTC; unparseable input is returned as-is.
pub fn timestamp(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| raw.to_string())
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(t) = DateTime::parse_from_rfc3339(raw) {
        return Some(t.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|n| n.and_utc())
}

pub fn pass_label(passed: bool) -> &'static str {
    if passed {
        "PASS"
    } else {
        "FAIL"
    }
}

pub fn overall_label(passed: bool) -> &'static str {
    if passed {
        "OVERALL PASS"
    } else {
        "OVERALL FAIL"
    }
}

pub fn expected_or_dash(expected: Option<&str>) -> &str {
    expected.unwrap_or(DASH)
}
