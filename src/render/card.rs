use chrono::{Locale, NaiveDate, NaiveTime, TimeZone, Utc};
use maud::{html, Markup};

use crate::process::Event;

const DATE_LOCALE: Locale = Locale::es_ES;
const LONG_DATE: &str = "%A, %-d de %B de %Y";

/// "Miércoles, 12 de junio de 2024"
pub fn long_date(date: NaiveDate) -> String {
    let midnight = Utc.from_utc_datetime(&date.and_time(NaiveTime::default()));
    let text = midnight.format_localized(LONG_DATE, DATE_LOCALE).to_string();
    capitalize_first(&text)
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Date line of a card, with ` | 🕒 <Time>` when the event has a time.
pub fn date_line(event: &Event) -> String {
    // sections only hold dated events
    let date = event.date.map(long_date).unwrap_or_default();
    match event.field("Time") {
        "" => date,
        time => format!("{} | 🕒 {}", date, time),
    }
}

pub fn render_card(event: &Event) -> Markup {
    html! {
        div.event-card {
            div.event-date { (date_line(event)) }
            h3.event-title { (event.field("Title")) }
            p.event-desc { (event.field("Description")) }
            div.event-meta {
                "📍 " (event.field("Location")) " | 🏷️ " (event.field("Type"))
            }
        }
    }
}
