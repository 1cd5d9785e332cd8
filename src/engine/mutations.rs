use tracing::debug;

use crate::model::{BookingRequest, NewReservation};
use crate::observability;

use super::validate::validate_stay;
use super::{Engine, EngineError, StoreError, availability};

impl Engine {
    /// Book a stay. `Ok(false)` means the dates were valid but no room was
    /// free; nothing is persisted in that case.
    ///
    /// The store re-checks the room for overlap under its own write
    /// exclusion. A reported conflict means a concurrent writer took the
    /// room between snapshot and append; resolution is retried once on
    /// fresh snapshots before the attempt is given up as full.
    pub async fn create_booking(&self, request: BookingRequest) -> Result<bool, EngineError> {
        let span = validate_stay(request.start, request.end, self.clock.today())?;

        for attempt in 0..2 {
            let rooms = self.rooms.get_all().await?;
            let reservations = self.reservations.get_all().await?;

            let Some(room_id) = availability::find_available_room(&span, &rooms, &reservations)
            else {
                metrics::counter!(observability::BOOKINGS_REJECTED_TOTAL).increment(1);
                debug!(customer = %request.customer_id, "no room free for requested stay");
                return Ok(false);
            };

            let new = NewReservation {
                customer_id: request.customer_id,
                room_id,
                span,
                active: true,
            };
            match self.reservations.add(new).await {
                Ok(stored) => {
                    metrics::counter!(observability::BOOKINGS_CREATED_TOTAL).increment(1);
                    debug!(reservation = %stored.id, room = %room_id, "booking created");
                    self.notify.send(room_id, &stored);
                    return Ok(true);
                }
                Err(StoreError::Conflict) => {
                    debug!(room = %room_id, attempt, "append conflict, re-resolving");
                    continue;
                }
                Err(e) => return Err(e.into()),
            }
        }

        metrics::counter!(observability::BOOKINGS_REJECTED_TOTAL).increment(1);
        Ok(false)
    }
}
