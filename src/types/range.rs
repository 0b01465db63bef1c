use std::fmt;

/// Day-range window for the time-series query.
///
/// The backend accepts a closed enumeration of windows; there are no
/// arbitrary ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayRange {
    SevenDays,
    ThirtyDays,
    SixtyDays,
    NinetyDays,
}

impl DayRange {
    /// All accepted windows, in ascending order.
    pub const ALL: [DayRange; 4] = [
        DayRange::SevenDays,
        DayRange::ThirtyDays,
        DayRange::SixtyDays,
        DayRange::NinetyDays,
    ];

    /// Number of days in this window.
    pub fn as_days(&self) -> u32 {
        match self {
            DayRange::SevenDays => 7,
            DayRange::ThirtyDays => 30,
            DayRange::SixtyDays => 60,
            DayRange::NinetyDays => 90,
        }
    }

    /// Parse a day count into a window, if it is one of the accepted values.
    pub fn from_days(days: u32) -> Option<Self> {
        match days {
            7 => Some(DayRange::SevenDays),
            30 => Some(DayRange::ThirtyDays),
            60 => Some(DayRange::SixtyDays),
            90 => Some(DayRange::NinetyDays),
            _ => None,
        }
    }
}

impl Default for DayRange {
    fn default() -> Self {
        DayRange::ThirtyDays
    }
}

impl fmt::Display for DayRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_days())
    }
}
