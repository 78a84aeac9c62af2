// src/process/mod.rs
use chrono::NaiveDate;
use tracing::{debug, trace};

pub mod date_parser;
pub mod utils;

use date_parser::parse_event_date;
use utils::{clean_field, split_quoted};

/// One data line of the sheet, keyed by the header row's column names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    /// (column, value) pairs in header order.
    fields: Vec<(String, String)>,
}

impl Row {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    /// Value of `column`; a repeated column name resolves to its last occurrence.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .rev()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Like [`Row::get`] but an absent column reads as `""`.
    pub fn field(&self, column: &str) -> &str {
        self.get(column).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// A [`Row`] plus the calendar date derived from its `Date` column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub row: Row,
    /// `None` when the `Date` cell is missing or not a valid `YYYY-MM-DD`.
    pub date: Option<NaiveDate>,
}

impl Event {
    pub fn from_row(row: Row) -> Self {
        let date = parse_event_date(row.field("Date"));
        if date.is_none() {
            debug!(date = row.field("Date"), "row has no usable date");
        }
        Self { row, date }
    }

    pub fn field(&self, column: &str) -> &str {
        self.row.field(column)
    }
}

/// Parse the sheet export into rows.
///
/// - the first line holds the column names (split on every comma, trimmed)
/// - blank data lines are skipped
/// - each value is trimmed and loses one outer quote on either side
/// - data lines shorter than the header fill the rest with `""`; extra tokens are dropped
/// - a leading UTF-8 byte order mark is ignored
pub fn parse_rows(text: &str) -> Vec<Row> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text.split('\n');
    let headers: Vec<String> = match lines.next() {
        Some(first) => first.split(',').map(|h| h.trim().to_string()).collect(),
        None => return Vec::new(),
    };
    trace!(?headers, "parsed header row");

    let rows: Vec<Row> = lines
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let values = split_quoted(line);
            let fields = headers
                .iter()
                .enumerate()
                .map(|(idx, header)| {
                    let value = values.get(idx).map(|v| clean_field(v)).unwrap_or_default();
                    (header.clone(), value)
                })
                .collect();
            Row::new(fields)
        })
        .collect();

    debug!(rows = rows.len(), columns = headers.len(), "parsed sheet");
    rows
}

/// Parse the export and derive each row's date.
pub fn parse_events(text: &str) -> Vec<Event> {
    parse_rows(text).into_iter().map(Event::from_row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET: &str = "Date,Time,Title,Description,Location,Type\n\
        2024-06-12,10:00,Claustro,\"Reunión, sala de profesores\",Aula 1,Reunión\n\
        \n   \n\
        2024-06-15,,Excursión\n";

    #[test]
    fn one_row_per_non_blank_line() {
        let rows = parse_rows(SHEET);
        assert_eq!(rows.len(), 2);
        for row in &rows {
            assert_eq!(row.len(), 6);
        }
    }

    #[test]
    fn quoted_comma_stays_in_one_field() {
        let rows = parse_rows("Date,Title,Time\n2024-01-01,\"Meeting, Room A\",10:00");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("Title"), Some("Meeting, Room A"));
        assert_eq!(rows[0].get("Time"), Some("10:00"));
    }

    #[test]
    fn missing_trailing_fields_are_empty() {
        let rows = parse_rows(SHEET);
        let short = &rows[1];
        assert_eq!(short.get("Title"), Some("Excursión"));
        assert_eq!(short.get("Description"), Some(""));
        assert_eq!(short.get("Type"), Some(""));
        assert_eq!(short.get("Nope"), None);
    }

    #[test]
    fn crlf_and_header_padding_are_trimmed() {
        let rows = parse_rows(" Date , Title \r\n2024-06-12,Fiesta\r\n");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("Date"), Some("2024-06-12"));
        assert_eq!(rows[0].get("Title"), Some("Fiesta"));
    }

    #[test]
    fn extra_tokens_are_ignored_and_columns_follow_header() {
        let rows = parse_rows("Title,Date\nA,2024-06-12,extra,more");
        let fields: Vec<_> = rows[0].iter().collect();
        assert_eq!(fields, vec![("Title", "A"), ("Date", "2024-06-12")]);
    }

    #[test]
    fn byte_order_mark_does_not_hide_first_column() {
        let rows = parse_rows("\u{feff}Date,Title\n2024-06-12,Claustro\n");
        let fields: Vec<_> = rows[0].iter().collect();
        assert_eq!(fields, vec![("Date", "2024-06-12"), ("Title", "Claustro")]);
    }

    #[test]
    fn empty_input_has_no_rows() {
        assert!(parse_rows("").is_empty());
        assert!(parse_rows("Date,Title\n").is_empty());
    }

    #[test]
    fn events_carry_derived_date() {
        let events = parse_events("Date,Title\n2024-06-12,A\n,B\n");
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].date, NaiveDate::from_ymd_opt(2024, 6, 12));
        assert_eq!(events[1].date, None);
        assert_eq!(events[1].field("Title"), "B");
    }

    #[test]
    fn missing_date_column_is_invalid_date() {
        let events = parse_events("Title\nSin fecha\n");
        assert_eq!(events[0].date, None);
    }
}
