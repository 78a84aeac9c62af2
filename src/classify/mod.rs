// src/classify/mod.rs
use anyhow::{Context, Result};
use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use tracing::{debug, instrument};

use crate::process::Event;

/// How many past events the board keeps.
pub const PAST_LIMIT: usize = 3;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// The five sections of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Today,
    ThisWeek,
    NextWeek,
    Future,
    Past,
}

impl Bucket {
    pub const ALL: [Bucket; 5] = [
        Bucket::Today,
        Bucket::ThisWeek,
        Bucket::NextWeek,
        Bucket::Future,
        Bucket::Past,
    ];

    pub fn region_id(self) -> &'static str {
        match self {
            Bucket::Today => "today",
            Bucket::ThisWeek => "this-week",
            Bucket::NextWeek => "next-week",
            Bucket::Future => "future",
            Bucket::Past => "past",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Bucket::Today => "Hoy",
            Bucket::ThisWeek => "Esta semana",
            Bucket::NextWeek => "Próxima semana",
            Bucket::Future => "Más adelante",
            Bucket::Past => "Eventos pasados",
        }
    }
}

fn start_of_day(day: NaiveDate) -> NaiveDateTime {
    day.and_time(NaiveTime::default())
}

/// 23:59:59.999 on `day`.
fn end_of_day(day: NaiveDate) -> NaiveDateTime {
    start_of_day(day) + TimeDelta::milliseconds(MILLIS_PER_DAY - 1)
}

/// Week edges relative to one local calendar day. Weeks end on Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundaries {
    pub today: NaiveDateTime,
    pub end_of_this_week: NaiveDateTime,
    pub start_of_next_week: NaiveDateTime,
    pub end_of_next_week: NaiveDateTime,
}

impl Boundaries {
    /// `None` only when the week runs past the last representable date.
    pub fn for_day(today: NaiveDate) -> Option<Self> {
        let weekday = match today.weekday().num_days_from_sunday() {
            0 => 7,
            n => n,
        };
        let this_sunday = today.checked_add_days(Days::new(u64::from(7 - weekday)))?;
        let next_monday = this_sunday.checked_add_days(Days::new(1))?;
        let next_sunday = next_monday.checked_add_days(Days::new(6))?;

        Some(Self {
            today: start_of_day(today),
            end_of_this_week: end_of_day(this_sunday),
            start_of_next_week: start_of_day(next_monday),
            end_of_next_week: end_of_day(next_sunday),
        })
    }

    /// Section for an event on `date`.
    ///
    /// Every valid date maps to exactly one bucket; `Past` only marks the date as a
    /// candidate, the past section itself is trimmed by [`classify`].
    pub fn bucket_for(&self, date: NaiveDate) -> Bucket {
        let t = start_of_day(date);
        if t == self.today {
            Bucket::Today
        } else if t > self.today && t <= self.end_of_this_week {
            Bucket::ThisWeek
        } else if t >= self.start_of_next_week && t <= self.end_of_next_week {
            Bucket::NextWeek
        } else if t > self.end_of_next_week {
            Bucket::Future
        } else {
            Bucket::Past
        }
    }
}

/// Events grouped into the board's sections, each in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub today: Vec<Event>,
    pub this_week: Vec<Event>,
    pub next_week: Vec<Event>,
    pub future: Vec<Event>,
    /// At most [`PAST_LIMIT`] events, newest first.
    pub past: Vec<Event>,
    pub has_today: bool,
    /// Events left out because their date could not be derived.
    pub dropped: usize,
}

impl Classification {
    pub fn bucket(&self, bucket: Bucket) -> &[Event] {
        match bucket {
            Bucket::Today => &self.today,
            Bucket::ThisWeek => &self.this_week,
            Bucket::NextWeek => &self.next_week,
            Bucket::Future => &self.future,
            Bucket::Past => &self.past,
        }
    }
}

/// Sort events by date and sort them into sections relative to `today`.
///
/// Events without a valid date end up in no section at all.
#[instrument(level = "debug", skip(events), fields(events = events.len()))]
pub fn classify(events: Vec<Event>, today: NaiveDate) -> Result<Classification> {
    let bounds = Boundaries::for_day(today)
        .with_context(|| format!("computing week boundaries for {}", today))?;

    let mut out = Classification::default();
    let mut dated: Vec<(NaiveDate, Event)> = Vec::with_capacity(events.len());
    for event in events {
        match event.date {
            Some(date) => dated.push((date, event)),
            None => out.dropped += 1,
        }
    }
    dated.sort_by_key(|(date, _)| *date);

    let mut past = Vec::new();
    for (date, event) in dated {
        match bounds.bucket_for(date) {
            Bucket::Today => out.today.push(event),
            Bucket::ThisWeek => out.this_week.push(event),
            Bucket::NextWeek => out.next_week.push(event),
            Bucket::Future => out.future.push(event),
            Bucket::Past => past.push((date, event)),
        }
    }

    past.sort_by(|(a, _), (b, _)| b.cmp(a));
    out.past = past
        .into_iter()
        .take(PAST_LIMIT)
        .map(|(_, event)| event)
        .collect();
    out.has_today = !out.today.is_empty();

    debug!(
        today = out.today.len(),
        this_week = out.this_week.len(),
        next_week = out.next_week.len(),
        future = out.future.len(),
        past = out.past.len(),
        dropped = out.dropped,
        "classified events"
    );
    Ok(out)
}
