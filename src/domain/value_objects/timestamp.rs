use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

/// Current UTC instant in the ISO-8601 form every record carries.
pub fn now_iso() -> String {
    format_instant(Utc::now())
}

pub fn format_instant(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Reads an RFC 3339 instant, or a bare `YYYY-MM-DD` date as midnight UTC.
pub fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Some(instant.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_iso_is_parseable() {
        let now = now_iso();
        assert!(now.ends_with('Z'));
        assert!(parse_instant(&now).is_some());
    }

    #[test]
    fn test_parse_accepts_offsets_and_dates() {
        let with_offset = parse_instant("2025-03-01T10:00:00+02:00").unwrap();
        assert_eq!(format_instant(with_offset), "2025-03-01T08:00:00.000Z");

        let date_only = parse_instant("2025-03-01").unwrap();
        assert_eq!(format_instant(date_only), "2025-03-01T00:00:00.000Z");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_instant("next tuesday").is_none());
        assert!(parse_instant("").is_none());
    }
}
