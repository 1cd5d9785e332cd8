use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Half-open date range `[start, end)` over whole nights; no time-of-day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateSpan {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        debug_assert!(start < end, "DateSpan start must be before end");
        Self { start, end }
    }

    pub fn nights(&self) -> i64 {
        self.end.signed_duration_since(self.start).num_days()
    }

    /// Half-open overlap: a stay ending on the day another begins does not conflict.
    pub fn overlaps(&self, other: &DateSpan) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// `[start, end)` covers `d` iff `start <= d < end`.
    pub fn covers(&self, d: NaiveDate) -> bool {
        self.start <= d && d < self.end
    }
}

/// A bookable room. Created and removed by the catalog provider; the
/// engine only ever reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: Ulid,
    pub name: String,
}

impl Room {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Ulid::new(),
            name: name.into(),
        }
    }
}

/// A persisted reservation. `id` is assigned by the reservation store on
/// append; `room_id` is always the room resolved at booking time.
/// Inactive records are cancelled history and never block availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: Ulid,
    pub customer_id: Ulid,
    pub room_id: Ulid,
    pub span: DateSpan,
    pub active: bool,
}

/// What the store is asked to append: everything but the identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReservation {
    pub customer_id: Ulid,
    pub room_id: Ulid,
    pub span: DateSpan,
    pub active: bool,
}

/// A booking attempt as submitted by a caller: no room yet, dates not
/// yet validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingRequest {
    pub customer_id: Ulid,
    pub start: NaiveDate,
    pub end: NaiveDate,
}
