use time::{format_description::FormatItem, macros::format_description, Date, OffsetDateTime, UtcOffset};

/// `YYYY-MM-DD`, the only date layout records and import files use.
pub const ISO_DATE: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Today's calendar date in the local time zone, falling back to UTC when the
/// offset cannot be determined.
pub fn today_local() -> Date {
    OffsetDateTime::now_utc()
        .to_offset(UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC))
        .date()
}

pub fn parse_iso_date(s: &str) -> Option<Date> {
    Date::parse(s.trim(), ISO_DATE).ok()
}

pub fn format_iso_date(date: Date) -> String {
    date.format(ISO_DATE)
        .unwrap_or_else(|_| format!("{:04}-{:02}-{:02}", date.year(), date.month() as u8, date.day()))
}

/// Renders an ISO date as `DD/MM/YYYY` for tables; unparsable values are shown as-is.
pub fn display_date(s: &str) -> String {
    match parse_iso_date(s) {
        Some(d) => format!("{:02}/{:02}/{:04}", d.day(), d.month() as u8, d.year()),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn parses_and_formats_iso_dates() {
        assert_eq!(parse_iso_date("2024-01-10"), Some(date!(2024 - 01 - 10)));
        assert_eq!(parse_iso_date(" 2024-01-10 "), Some(date!(2024 - 01 - 10)));
        assert_eq!(parse_iso_date("10/01/2024"), None);
        assert_eq!(format_iso_date(date!(2024 - 03 - 05)), "2024-03-05");
    }

    #[test]
    fn display_date_falls_back_to_raw_text() {
        assert_eq!(display_date("2024-03-05"), "05/03/2024");
        assert_eq!(display_date("soon"), "soon");
    }
}
