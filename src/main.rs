use std::sync::Arc;

use chrono::Days;
use tracing::info;
use ulid::Ulid;

use innkeep::clock::{Clock, SystemClock};
use innkeep::engine::Engine;
use innkeep::model::BookingRequest;
use innkeep::notify::NotifyHub;
use innkeep::seed::SeedSpec;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let metrics_port: Option<u16> = std::env::var("INNKEEP_METRICS_PORT")
        .ok()
        .and_then(|s| s.parse().ok());
    innkeep::observability::init(metrics_port);

    let horizon_days: u64 = std::env::var("INNKEEP_HORIZON_DAYS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(30)
        .max(1);

    let seed = match std::env::var("INNKEEP_SEED") {
        Ok(path) => {
            info!("loading seed fixture from {path}");
            SeedSpec::from_path(&path)?
        }
        Err(_) => SeedSpec::default_scenario(),
    };

    let clock = Arc::new(SystemClock);
    let today = clock.today();
    let (rooms, reservations) = seed.build_stores(today).await?;
    let reservations = Arc::new(reservations);
    let notify = Arc::new(NotifyHub::new());
    let engine = Engine::new(
        Arc::new(rooms),
        reservations.clone(),
        clock,
        notify.clone(),
    );

    info!("innkeep scenario starting, horizon {horizon_days} days");

    let report_start = today + Days::new(1);
    let report_end = today + Days::new(horizon_days);
    let occupied = engine.fully_occupied_dates(report_start, report_end).await?;
    if occupied.is_empty() {
        info!("no fully occupied dates in the next {horizon_days} days");
    } else {
        info!("fully occupied dates: {occupied:?}");
    }

    // Walk booking attempts over one window until the hotel turns one away.
    let stay_start = today + Days::new(4);
    let stay_end = today + Days::new(7);
    let mut placed = 0usize;
    loop {
        let accepted = engine
            .create_booking(BookingRequest {
                customer_id: Ulid::new(),
                start: stay_start,
                end: stay_end,
            })
            .await?;
        info!(accepted, "booking attempt for [{stay_start}, {stay_end})");
        if !accepted {
            break;
        }
        placed += 1;
    }
    let total_records = reservations.count().await;
    info!(placed, total_records, "window [{stay_start}, {stay_end}) is now full");

    let occupied = engine.fully_occupied_dates(report_start, report_end).await?;
    info!("fully occupied dates after booking run: {occupied:?}");

    Ok(())
}
