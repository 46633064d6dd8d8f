//! Concrete holiday calendars and their rule tables.

/// Colombian holidays.
pub mod colombia;

/// Union of several calendars.
pub mod joint_calendar;

/// United States federal holidays.
pub mod united_states;

pub use colombia::Colombia;
pub use joint_calendar::JointCalendar;
pub use united_states::UnitedStates;
