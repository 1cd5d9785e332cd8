use chrono::NaiveDate;

use crate::limits::*;
use crate::model::DateSpan;

use super::EngineError;

/// Preconditions shared by booking and availability search. The today
/// boundary is exclusive: same-day and past-dated stays are rejected.
pub(crate) fn validate_stay(
    start: NaiveDate,
    end: NaiveDate,
    today: NaiveDate,
) -> Result<DateSpan, EngineError> {
    if start <= today {
        return Err(EngineError::InvalidArgument(
            "start date must be after today",
        ));
    }
    if start >= end {
        return Err(EngineError::InvalidArgument(
            "start date must be before end date",
        ));
    }
    let span = DateSpan::new(start, end);
    if span.nights() > MAX_STAY_NIGHTS {
        return Err(EngineError::InvalidArgument("stay too long"));
    }
    Ok(span)
}

/// Preconditions for the occupancy report: inclusive range, bounded window.
pub(crate) fn validate_report_window(
    start: NaiveDate,
    end: NaiveDate,
) -> Result<(), EngineError> {
    if start > end {
        return Err(EngineError::InvalidArgument(
            "start date must not be after end date",
        ));
    }
    if end.signed_duration_since(start).num_days() >= MAX_OCCUPANCY_WINDOW_DAYS {
        return Err(EngineError::InvalidArgument("report window too wide"));
    }
    Ok(())
}
