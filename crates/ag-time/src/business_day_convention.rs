//! Business-day convention.

/// How to move a date that falls on a closed day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BusinessDayConvention {
    /// Choose the first open day after the given date.
    Following,
    /// Choose the first open day after the given date unless it belongs to a
    /// different month; in that case choose the first open day before it.
    ModifiedFollowing,
    /// Choose the first open day before the given date.
    Preceding,
    /// Do not adjust (keep the original date).
    Unadjusted,
}

impl std::fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "Modified Following",
            BusinessDayConvention::Preceding => "Preceding",
            BusinessDayConvention::Unadjusted => "Unadjusted",
        };
        write!(f, "{s}")
    }
}
