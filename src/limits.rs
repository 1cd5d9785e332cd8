//! Hard bounds on caller-supplied date ranges. Violations surface as
//! `EngineError::InvalidArgument`.

/// Longest bookable stay, in nights.
pub const MAX_STAY_NIGHTS: i64 = 365;

/// Widest inclusive window accepted by the occupancy report, in days.
pub const MAX_OCCUPANCY_WINDOW_DAYS: i64 = 1096;
