use std::net::SocketAddr;

// ── RED metrics (request-driven) ────────────────────────────────

/// Counter: bookings persisted.
pub const BOOKINGS_CREATED_TOTAL: &str = "innkeep_bookings_created_total";

/// Counter: booking attempts turned away with no free room.
pub const BOOKINGS_REJECTED_TOTAL: &str = "innkeep_bookings_rejected_total";

/// Counter: availability lookups served.
pub const AVAILABILITY_QUERIES_TOTAL: &str = "innkeep_availability_queries_total";

/// Counter: fully-occupied-date reports served.
pub const OCCUPANCY_QUERIES_TOTAL: &str = "innkeep_occupancy_queries_total";

/// Histogram: room-resolution latency in seconds.
pub const RESOLVE_DURATION_SECONDS: &str = "innkeep_resolve_duration_seconds";

/// Install Prometheus metrics exporter on the given port. No-op if port is None.
pub fn init(port: Option<u16>) {
    let Some(port) = port else { return };
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();
    metrics_exporter_prometheus::PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .expect("failed to install Prometheus metrics exporter");
    tracing::info!("metrics endpoint: http://0.0.0.0:{port}/metrics");
}
