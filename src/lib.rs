//! Room-reservation availability engine: resolves a free room for a
//! half-open date range against snapshot-fetched room and reservation
//! stores, and guards the booking append with a store-side re-check.

pub mod clock;
pub mod engine;
pub mod limits;
pub mod model;
pub mod notify;
pub mod observability;
pub mod seed;
