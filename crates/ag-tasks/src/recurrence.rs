//! Default end dates for recurring tasks.

use crate::task::RecurrenceType;
use ag_core::errors::Result;
use ag_time::{Date, TimeUnit};

/// Suggested last day of a recurrence starting on `start`.
///
/// Daily tasks run a week, weekly tasks four weeks, monthly and yearly tasks
/// one period. Month and year steps clamp to the end of a shorter month, so
/// January 31 monthly ends on the last day of February.
pub fn suggest_recurrence_end(start: Date, kind: RecurrenceType) -> Result<Date> {
    match kind {
        RecurrenceType::Daily => start.advance(7, TimeUnit::Days),
        RecurrenceType::Weekly => start.advance(4, TimeUnit::Weeks),
        RecurrenceType::Monthly => start.advance(1, TimeUnit::Months),
        RecurrenceType::Yearly => start.advance(1, TimeUnit::Years),
    }
}
