use chrono::NaiveDate;
use ulid::Ulid;

use crate::model::*;

// ── Availability Algorithm ────────────────────────────────────────

/// Find one room free for the whole of `query`.
///
/// Rooms are scanned in snapshot order and the first free one wins: a
/// stable, deterministic pick, neither lowest-id nor load-balanced. A room
/// is free iff no reservation that is active, belongs to it, and overlaps
/// the query exists; reservations on other rooms never affect it. The
/// snapshot may be unfiltered and unordered: inactive records are skipped
/// here. O(rooms × reservations).
pub fn find_available_room(
    query: &DateSpan,
    rooms: &[Room],
    reservations: &[Reservation],
) -> Option<Ulid> {
    rooms
        .iter()
        .find(|room| room_is_free(room.id, query, reservations))
        .map(|room| room.id)
}

/// True iff no active reservation on `room_id` overlaps `query`.
pub fn room_is_free(room_id: Ulid, query: &DateSpan, reservations: &[Reservation]) -> bool {
    !reservations
        .iter()
        .any(|r| r.active && r.room_id == room_id && r.span.overlaps(query))
}

/// Ascending dates in the inclusive range `[start, end]` on which every
/// room has an active reservation covering the date.
///
/// An empty catalog yields an empty result: "all rooms occupied" over zero
/// rooms is vacuously true but operationally meaningless, so it is treated
/// as not occupied.
pub fn fully_occupied_dates(
    start: NaiveDate,
    end: NaiveDate,
    rooms: &[Room],
    reservations: &[Reservation],
) -> Vec<NaiveDate> {
    if rooms.is_empty() {
        return Vec::new();
    }
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .filter(|d| {
            rooms.iter().all(|room| {
                reservations
                    .iter()
                    .any(|r| r.active && r.room_id == room.id && r.span.covers(*d))
            })
        })
        .collect()
}
