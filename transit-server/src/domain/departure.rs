//! Departure slots on an intercity timetable.

use super::TimeOfDay;

/// One departure slot for an intercity coach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Departure {
    /// Departure time of day.
    pub time: TimeOfDay,

    /// Ticket price in whole euros.
    pub price_eur: u32,

    /// Total journey time in minutes, including breaks and any border
    /// crossing.
    pub duration_mins: u32,

    /// Seats still available on this slot.
    pub available_seats: u8,
}

impl Departure {
    /// Price formatted for display: `"€22"`.
    pub fn price_label(&self) -> String {
        format!("€{}", self.price_eur)
    }

    /// Duration formatted for display: `"3h 15m"`, with the minutes term
    /// omitted when zero (`"3h"`).
    pub fn duration_label(&self) -> String {
        format_journey_minutes(self.duration_mins)
    }
}

/// Format a journey duration in minutes as `"{h}h {m}m"`, omitting the
/// minutes term when it is zero.
pub fn format_journey_minutes(total_mins: u32) -> String {
    let hours = total_mins / 60;
    let minutes = total_mins % 60;

    if minutes > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{hours}h")
    }
}
