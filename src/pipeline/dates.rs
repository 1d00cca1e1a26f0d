use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parses the free-ish "updated" timestamp from the upstream export.
///
/// The search API emits ISO-8601 with fractional seconds and sometimes a
/// timezone offset; manual exports show up with space separators or as bare
/// dates. Anything unparsable is a `None` and the record is dropped by the
/// validity gate.
pub fn parse_posted_on(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.naive_utc());
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .or_else(|_| NaiveDate::parse_from_str(raw, "%m/%d/%Y"))
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}
