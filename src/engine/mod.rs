mod availability;
mod error;
mod mutations;
mod queries;
mod store;
mod validate;

pub use availability::{find_available_room, fully_occupied_dates, room_is_free};
pub use error::EngineError;
pub use store::{
    InMemoryReservationStore, InMemoryRoomStore, ReservationStore, RoomStore, StoreError,
};

use std::sync::Arc;

use crate::clock::Clock;
use crate::notify::NotifyHub;

/// Booking coordinator. Stateless between calls: every operation fetches a
/// fresh snapshot from both store collaborators and retains nothing past
/// the call. Writes are serialized per room by the reservation store's
/// compare-and-append contract, not here.
pub struct Engine {
    rooms: Arc<dyn RoomStore>,
    reservations: Arc<dyn ReservationStore>,
    clock: Arc<dyn Clock>,
    notify: Arc<NotifyHub>,
}

impl Engine {
    pub fn new(
        rooms: Arc<dyn RoomStore>,
        reservations: Arc<dyn ReservationStore>,
        clock: Arc<dyn Clock>,
        notify: Arc<NotifyHub>,
    ) -> Self {
        Self {
            rooms,
            reservations,
            clock,
            notify,
        }
    }
}
