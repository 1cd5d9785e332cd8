use async_trait::async_trait;
use tokio::sync::RwLock;
use ulid::Ulid;

use crate::model::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Compare-and-append lost: the room already holds an overlapping
    /// active reservation.
    Conflict,
    /// Opaque backend failure (I/O, timeout). Not interpreted by the engine.
    Backend(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Conflict => write!(f, "conflicting reservation on append"),
            StoreError::Backend(e) => write!(f, "backend: {e}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Room catalog collaborator. Read-only from the engine's side; room
/// creation and removal belong to the catalog provider.
#[async_trait]
pub trait RoomStore: Send + Sync {
    /// Full catalog snapshot, in stable iteration order.
    async fn get_all(&self) -> Result<Vec<Room>, StoreError>;
}

/// Reservation store collaborator.
#[async_trait]
pub trait ReservationStore: Send + Sync {
    /// Full snapshot — active and inactive records alike. Callers filter
    /// by the active flag.
    async fn get_all(&self) -> Result<Vec<Reservation>, StoreError>;

    /// Append one record, assigning its identity. Compare-and-append: an
    /// active record overlapping another active record on the same room
    /// is rejected with [`StoreError::Conflict`].
    async fn add(&self, new: NewReservation) -> Result<Reservation, StoreError>;
}

// ── In-memory reference implementations ──────────────────────────

/// Ordered in-memory room catalog.
#[derive(Default)]
pub struct InMemoryRoomStore {
    rooms: RwLock<Vec<Room>>,
}

impl InMemoryRoomStore {
    pub fn new(rooms: Vec<Room>) -> Self {
        Self {
            rooms: RwLock::new(rooms),
        }
    }

    pub async fn push(&self, room: Room) {
        self.rooms.write().await.push(room);
    }
}

#[async_trait]
impl RoomStore for InMemoryRoomStore {
    async fn get_all(&self) -> Result<Vec<Room>, StoreError> {
        Ok(self.rooms.read().await.clone())
    }
}

/// Append-only in-memory reservation store. All writes pass through one
/// write lock, which is where the single-writer discipline lives: the
/// overlap re-check in `add` runs under the same exclusion as the append.
#[derive(Default)]
pub struct InMemoryReservationStore {
    records: RwLock<Vec<Reservation>>,
}

impl InMemoryReservationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl ReservationStore for InMemoryReservationStore {
    async fn get_all(&self) -> Result<Vec<Reservation>, StoreError> {
        Ok(self.records.read().await.clone())
    }

    async fn add(&self, new: NewReservation) -> Result<Reservation, StoreError> {
        let mut records = self.records.write().await;
        if new.active
            && records
                .iter()
                .any(|r| r.active && r.room_id == new.room_id && r.span.overlaps(&new.span))
        {
            return Err(StoreError::Conflict);
        }
        let stored = Reservation {
            id: Ulid::new(),
            customer_id: new.customer_id,
            room_id: new.room_id,
            span: new.span,
            active: new.active,
        };
        records.push(stored.clone());
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, day).unwrap()
    }

    fn new_rsvp(room_id: Ulid, start: u32, end: u32, active: bool) -> NewReservation {
        NewReservation {
            customer_id: Ulid::new(),
            room_id,
            span: DateSpan::new(d(start), d(end)),
            active,
        }
    }

    #[tokio::test]
    async fn add_assigns_identity() {
        let store = InMemoryReservationStore::new();
        let room = Ulid::new();
        let a = store.add(new_rsvp(room, 1, 5, true)).await.unwrap();
        let b = store.add(new_rsvp(room, 5, 9, true)).await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(store.count().await, 2);
    }

    #[tokio::test]
    async fn add_rejects_overlap_on_same_room() {
        let store = InMemoryReservationStore::new();
        let room = Ulid::new();
        store.add(new_rsvp(room, 1, 5, true)).await.unwrap();
        let err = store.add(new_rsvp(room, 4, 8, true)).await.unwrap_err();
        assert_eq!(err, StoreError::Conflict);
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test]
    async fn add_allows_overlap_on_other_room() {
        let store = InMemoryReservationStore::new();
        store.add(new_rsvp(Ulid::new(), 1, 5, true)).await.unwrap();
        store.add(new_rsvp(Ulid::new(), 1, 5, true)).await.unwrap();
        assert_eq!(store.count().await, 2);
    }

    #[tokio::test]
    async fn add_allows_inactive_over_active() {
        // Cancelled history may overlap anything.
        let store = InMemoryReservationStore::new();
        let room = Ulid::new();
        store.add(new_rsvp(room, 1, 5, true)).await.unwrap();
        store.add(new_rsvp(room, 1, 5, false)).await.unwrap();
        assert_eq!(store.count().await, 2);
    }

    #[tokio::test]
    async fn get_all_returns_inactive_records_too() {
        let store = InMemoryReservationStore::new();
        let room = Ulid::new();
        store.add(new_rsvp(room, 1, 5, false)).await.unwrap();
        let all = store.get_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert!(!all[0].active);
    }

    #[tokio::test]
    async fn room_catalog_preserves_order() {
        let rooms = vec![Room::new("1"), Room::new("2"), Room::new("3")];
        let ids: Vec<Ulid> = rooms.iter().map(|r| r.id).collect();
        let store = InMemoryRoomStore::new(rooms);
        store.push(Room::new("4")).await;
        let all = store.get_all().await.unwrap();
        assert_eq!(all.len(), 4);
        assert_eq!(all[0].id, ids[0]);
        assert_eq!(all[1].id, ids[1]);
        assert_eq!(all[2].id, ids[2]);
    }
}
