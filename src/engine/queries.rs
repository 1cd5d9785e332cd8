use std::time::Instant;

use chrono::NaiveDate;
use ulid::Ulid;

use crate::observability;

use super::validate::{validate_report_window, validate_stay};
use super::{Engine, EngineError, availability};

impl Engine {
    /// Find a room free for the whole stay `[start, end)`.
    ///
    /// `Ok(None)` means every room conflicts somewhere in the range; it is
    /// a normal answer, not an error.
    pub async fn find_available_room(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Option<Ulid>, EngineError> {
        let span = validate_stay(start, end, self.clock.today())?;
        let rooms = self.rooms.get_all().await?;
        let reservations = self.reservations.get_all().await?;

        let t = Instant::now();
        let found = availability::find_available_room(&span, &rooms, &reservations);
        metrics::histogram!(observability::RESOLVE_DURATION_SECONDS)
            .record(t.elapsed().as_secs_f64());
        metrics::counter!(observability::AVAILABILITY_QUERIES_TOTAL).increment(1);
        Ok(found)
    }

    /// Dates in the inclusive window `[start, end]` on which every room in
    /// the catalog is taken.
    pub async fn fully_occupied_dates(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<NaiveDate>, EngineError> {
        validate_report_window(start, end)?;
        let rooms = self.rooms.get_all().await?;
        let reservations = self.reservations.get_all().await?;
        metrics::counter!(observability::OCCUPANCY_QUERIES_TOTAL).increment(1);
        Ok(availability::fully_occupied_dates(
            start,
            end,
            &rooms,
            &reservations,
        ))
    }
}
