use dashmap::DashMap;
use tokio::sync::broadcast;
use ulid::Ulid;

use crate::model::Reservation;

const CHANNEL_CAPACITY: usize = 256;

/// Broadcast hub for booking notifications, one channel per room.
pub struct NotifyHub {
    channels: DashMap<Ulid, broadcast::Sender<Reservation>>,
}

impl NotifyHub {
    pub fn new() -> Self {
        Self {
            channels: DashMap::new(),
        }
    }

    /// Subscribe to bookings landing on a room. Creates the channel if needed.
    pub fn subscribe(&self, room_id: Ulid) -> broadcast::Receiver<Reservation> {
        let sender = self
            .channels
            .entry(room_id)
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0);
        sender.subscribe()
    }

    /// Publish a persisted reservation. No-op if nobody is listening.
    pub fn send(&self, room_id: Ulid, reservation: &Reservation) {
        if let Some(sender) = self.channels.get(&room_id) {
            let _ = sender.send(reservation.clone());
        }
    }

    /// Remove a channel (e.g. when the room leaves the catalog).
    pub fn remove(&self, room_id: &Ulid) {
        self.channels.remove(room_id);
    }
}

impl Default for NotifyHub {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DateSpan;
    use chrono::NaiveDate;

    fn reservation(room_id: Ulid) -> Reservation {
        Reservation {
            id: Ulid::new(),
            customer_id: Ulid::new(),
            room_id,
            span: DateSpan::new(
                NaiveDate::from_ymd_opt(2026, 9, 10).unwrap(),
                NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
            ),
            active: true,
        }
    }

    #[tokio::test]
    async fn subscribe_and_receive() {
        let hub = NotifyHub::new();
        let room = Ulid::new();
        let mut rx = hub.subscribe(room);

        let rsvp = reservation(room);
        hub.send(room, &rsvp);

        let received = rx.recv().await.unwrap();
        assert_eq!(received, rsvp);
    }

    #[tokio::test]
    async fn send_without_subscribers_is_noop() {
        let hub = NotifyHub::new();
        let room = Ulid::new();
        // No subscriber — should not panic
        hub.send(room, &reservation(room));
    }

    #[tokio::test]
    async fn channels_are_per_room() {
        let hub = NotifyHub::new();
        let watched = Ulid::new();
        let other = Ulid::new();
        let mut rx = hub.subscribe(watched);

        hub.send(other, &reservation(other));
        assert!(rx.try_recv().is_err());
    }
}
