use chrono::{DateTime, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Formats an API timestamp for the "Last updated" line.
///
/// Accepts RFC 3339 as well as the `YYYY-MM-DD HH:MM:SS` form some
/// endpoints return. Anything else yields `None` and the line is hidden.
pub fn format_timestamp(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.format(DISPLAY_FORMAT).to_string());
    }
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|parsed| parsed.format(DISPLAY_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_rfc3339_and_sql_timestamps() {
        assert_eq!(
            format_timestamp("2024-03-05T09:15:00Z").as_deref(),
            Some("2024-03-05 09:15")
        );
        assert_eq!(
            format_timestamp("2024-03-05 09:15:42").as_deref(),
            Some("2024-03-05 09:15")
        );
        assert_eq!(
            format_timestamp("2024-03-05T09:15:42.000000").as_deref(),
            Some("2024-03-05 09:15")
        );
    }

    #[test]
    fn rejects_blank_and_garbage() {
        assert_eq!(format_timestamp("  "), None);
        assert_eq!(format_timestamp("yesterday"), None);
    }
}
