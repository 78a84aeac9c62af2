use chrono::{Months, NaiveDate, TimeDelta};

/// One `-`-separated part of a `Date` cell; a blank part counts as zero.
fn parse_part(part: &str) -> Option<i64> {
    match part.trim() {
        "" => Some(0),
        p => p.parse().ok(),
    }
}

/// Parse a sheet `Date` cell (`"YYYY-MM-DD"`) into a calendar date.
///
/// Out-of-range months and days roll over like a calendar would:
/// `2024-02-30` is 2024-03-01, `2024-06-00` is 2024-05-31, `2024-13-01` is 2025-01-01.
/// Two-digit years land in the 1900s. Parts beyond the third are ignored.
/// Missing or non-numeric parts give `None`.
pub fn parse_event_date(s: &str) -> Option<NaiveDate> {
    let mut parts = s.split('-');
    let mut year = parse_part(parts.next()?)?;
    let month = parse_part(parts.next()?)?;
    let day = parse_part(parts.next()?)?;

    if (0..=99).contains(&year) {
        year += 1900;
    }
    let january = NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, 1, 1)?;

    let month_offset = month.checked_sub(1)?;
    let months = Months::new(u32::try_from(month_offset.unsigned_abs()).ok()?);
    let first_of_month = if month_offset >= 0 {
        january.checked_add_months(months)?
    } else {
        january.checked_sub_months(months)?
    };

    first_of_month.checked_add_signed(TimeDelta::try_days(day.checked_sub(1)?)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn parses_iso_day() {
        assert_eq!(parse_event_date("2024-06-12"), day(2024, 6, 12));
        assert_eq!(parse_event_date("2024-6-1"), day(2024, 6, 1));
        assert_eq!(parse_event_date("2024-06-12-extra"), day(2024, 6, 12));
    }

    #[test]
    fn out_of_range_parts_roll_over() {
        assert_eq!(parse_event_date("2024-02-30"), day(2024, 3, 1));
        assert_eq!(parse_event_date("2023-02-29"), day(2023, 3, 1));
        assert_eq!(parse_event_date("2024-06-00"), day(2024, 5, 31));
        assert_eq!(parse_event_date("2024-13-01"), day(2025, 1, 1));
        assert_eq!(parse_event_date("2024-00-15"), day(2023, 12, 15));
        assert_eq!(parse_event_date("2024-01-32"), day(2024, 2, 1));
    }

    #[test]
    fn blank_part_is_zero_and_short_years_are_1900s() {
        assert_eq!(parse_event_date("2024--15"), day(2023, 12, 15));
        assert_eq!(parse_event_date("24-06-12"), day(1924, 6, 12));
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", "2024", "2024-06", "2024-xx-01", "12/06/2024", "2024-06-1.5"] {
            assert_eq!(parse_event_date(bad), None, "{bad:?} should be invalid");
        }
    }
}
