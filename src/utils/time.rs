use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

pub fn today() -> NaiveDate {
    now().date_naive()
}

/// Reads a stored date. Accepts `YYYY-MM-DD`, RFC 3339 timestamps and
/// ISO timestamps without an offset. Anything else yields `None`.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    None
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Whole days from `today` to `end`; negative once the deadline has passed.
pub fn days_left(end: NaiveDate, today: NaiveDate) -> i64 {
    (end - today).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn parses_supported_shapes() {
        assert_eq!(parse_date("2025-06-01"), Some(d("2025-06-01")));
        assert_eq!(parse_date(" 2025-06-01 "), Some(d("2025-06-01")));
        assert_eq!(parse_date("2025-06-01T10:00:00Z"), Some(d("2025-06-01")));
        assert_eq!(parse_date("2025-06-01T10:00:00.000"), Some(d("2025-06-01")));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("soon"), None);
        assert_eq!(parse_date("2025-02-30"), None);
    }

    #[test]
    fn counts_days_in_both_directions() {
        assert_eq!(days_left(d("2025-01-11"), d("2025-01-01")), 10);
        assert_eq!(days_left(d("2025-01-01"), d("2025-01-01")), 0);
        assert_eq!(days_left(d("2024-12-30"), d("2025-01-01")), -2);
    }
}
