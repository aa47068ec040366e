//! Time-overlap rules for bookings.
//!
//! Dates and times are compared as text tokens, so callers must hand in a
//! sortable representation (`YYYY-MM-DD`, zero-padded 24-hour `HH:MM`).

use serde::Serialize;
use uuid::Uuid;

/// A `[start, end)` pair of time tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval<'a> {
    pub start: &'a str,
    pub end: &'a str,
}

impl<'a> Interval<'a> {
    pub fn new(start: &'a str, end: &'a str) -> Self {
        Self { start, end }
    }
}

/// A requested booking: one room, one date, one interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub room_id: Uuid,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

impl Slot {
    pub fn interval(&self) -> Interval<'_> {
        Interval::new(&self.start_time, &self.end_time)
    }
}

/// Conflict rule applied when a booking is created.
///
/// The candidate `(s1, e1)` conflicts with an existing `(s2, e2)` when the
/// candidate starts strictly inside the existing interval, ends strictly
/// inside it, or covers it entirely. Bookings that only touch at a boundary
/// do not conflict.
pub fn conflicts(candidate: Interval<'_>, existing: Interval<'_>) -> bool {
    let (s1, e1) = (candidate.start, candidate.end);
    let (s2, e2) = (existing.start, existing.end);

    (s2 < s1 && s1 < e2) || (s2 < e1 && e1 < e2) || (s1 <= s2 && e1 >= e2)
}

/// Rule used by the customer booking history to flag a row as booked.
///
/// Unlike [`conflicts`] it keys on where the *other* booking starts and is
/// inclusive at both ends of the row's interval, so a booking that begins
/// exactly when the row ends still counts.
pub fn history_overlaps(row: Interval<'_>, other: Interval<'_>) -> bool {
    let (s, e) = (row.start, row.end);
    let (bs, be) = (other.start, other.end);

    (bs >= s && bs < e) || (bs > s && bs <= e) || (bs <= s && be >= e)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BookedStatus {
    Booked,
    Available,
}

impl From<bool> for BookedStatus {
    fn from(booked: bool) -> Self {
        if booked {
            BookedStatus::Booked
        } else {
            BookedStatus::Available
        }
    }
}
