use chrono::{Days, NaiveDate};
use serde::Deserialize;
use tracing::info;
use ulid::Ulid;

use crate::engine::{InMemoryReservationStore, InMemoryRoomStore, ReservationStore};
use crate::model::{DateSpan, NewReservation, Room};

/// Fixture format for the scenario runner. Reservation dates are day
/// offsets from today, so a checked-in fixture file never goes stale.
#[derive(Debug, Deserialize)]
pub struct SeedSpec {
    pub rooms: Vec<RoomSeed>,
    #[serde(default)]
    pub reservations: Vec<ReservationSeed>,
}

#[derive(Debug, Deserialize)]
pub struct RoomSeed {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ReservationSeed {
    /// Index into `rooms`.
    pub room: usize,
    pub start_in_days: u64,
    pub nights: u64,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl SeedSpec {
    pub fn from_path(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Two rooms with one pre-booked window ten days out.
    pub fn default_scenario() -> Self {
        Self {
            rooms: vec![
                RoomSeed { name: "101".into() },
                RoomSeed { name: "102".into() },
            ],
            reservations: vec![ReservationSeed {
                room: 0,
                start_in_days: 10,
                nights: 10,
                active: true,
            }],
        }
    }

    /// Materialize the fixture into freshly built in-memory stores.
    pub async fn build_stores(
        &self,
        today: NaiveDate,
    ) -> Result<(InMemoryRoomStore, InMemoryReservationStore), Box<dyn std::error::Error>> {
        let rooms: Vec<Room> = self.rooms.iter().map(|r| Room::new(r.name.clone())).collect();
        let reservations = InMemoryReservationStore::new();

        for seed in &self.reservations {
            let room = rooms
                .get(seed.room)
                .ok_or("reservation references unknown room index")?;
            if seed.nights == 0 {
                return Err("reservation must span at least one night".into());
            }
            let start = today + Days::new(seed.start_in_days);
            let end = start + Days::new(seed.nights);
            reservations
                .add(NewReservation {
                    customer_id: Ulid::new(),
                    room_id: room.id,
                    span: DateSpan::new(start, end),
                    active: seed.active,
                })
                .await?;
        }

        info!(
            rooms = rooms.len(),
            reservations = self.reservations.len(),
            "seeded stores"
        );
        Ok((InMemoryRoomStore::new(rooms), reservations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::RoomStore;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    #[test]
    fn parses_fixture_json() {
        let text = r#"{
            "rooms": [{"name": "101"}, {"name": "102"}],
            "reservations": [
                {"room": 0, "start_in_days": 10, "nights": 10},
                {"room": 1, "start_in_days": 3, "nights": 2, "active": false}
            ]
        }"#;
        let spec: SeedSpec = serde_json::from_str(text).unwrap();
        assert_eq!(spec.rooms.len(), 2);
        assert!(spec.reservations[0].active); // defaulted
        assert!(!spec.reservations[1].active);
    }

    #[tokio::test]
    async fn default_scenario_builds() {
        let spec = SeedSpec::default_scenario();
        let (rooms, reservations) = spec.build_stores(today()).await.unwrap();
        assert_eq!(rooms.get_all().await.unwrap().len(), 2);
        assert_eq!(reservations.count().await, 1);
    }

    #[tokio::test]
    async fn unknown_room_index_is_an_error() {
        let spec = SeedSpec {
            rooms: vec![RoomSeed { name: "101".into() }],
            reservations: vec![ReservationSeed {
                room: 7,
                start_in_days: 1,
                nights: 1,
                active: true,
            }],
        };
        assert!(spec.build_stores(today()).await.is_err());
    }

    #[tokio::test]
    async fn zero_night_seed_is_an_error() {
        let spec = SeedSpec {
            rooms: vec![RoomSeed { name: "101".into() }],
            reservations: vec![ReservationSeed {
                room: 0,
                start_in_days: 1,
                nights: 0,
                active: true,
            }],
        };
        assert!(spec.build_stores(today()).await.is_err());
    }
}
