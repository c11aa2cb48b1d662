use chrono::{DateTime, FixedOffset};

use crate::kind::Kind;

/// Day, month and year, zero padded and separated by dots.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

pub fn describe(kind: Kind, timestamp: &DateTime<FixedOffset>) -> String {
    format!("{} on {}", kind.profile().label, timestamp.format(DATE_FORMAT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_kind_label_and_local_date() {
        let ts = DateTime::parse_from_rfc3339("2026-03-07T09:15:00+04:00").unwrap();
        assert_eq!(describe(Kind::Running, &ts), "Running session on 07.03.2026");
        assert_eq!(describe(Kind::Cycling, &ts), "Cycling session on 07.03.2026");
    }

    #[test]
    fn date_follows_the_timestamp_offset() {
        // 23:30 UTC on the 31st is already the 1st in UTC+4
        let ts = DateTime::parse_from_rfc3339("2026-12-31T23:30:00Z").unwrap();
        let shifted = ts.with_timezone(&FixedOffset::east_opt(4 * 3600).unwrap());
        assert_eq!(describe(Kind::Running, &shifted), "Running session on 01.01.2027");
    }
}
