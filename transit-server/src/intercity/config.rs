//! Configuration for the intercity departure board.

/// Parameters for ranking destinations and synthesising timetables.
#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    /// Destinations further than this from the reference point are not
    /// shown (kilometres).
    pub radius_km: f64,

    /// Distance used for pricing and frequency when no reference point is
    /// available (kilometres).
    pub fallback_distance_km: f64,

    /// Fare per kilometre in euros.
    pub price_per_km_eur: f64,

    /// Minimum fare in whole euros.
    pub min_price_eur: u32,

    /// Hour of the first departure slot (inclusive).
    pub first_departure_hour: u32,

    /// Hour of the last departure slot (inclusive).
    pub last_departure_hour: u32,

    /// A rest break is scheduled for every full interval of this many
    /// minutes of base travel time.
    pub break_interval_mins: u32,

    /// Length of each rest break (minutes).
    pub break_mins: u32,

    /// Allowance added once for routes crossing out of the home country
    /// (minutes).
    pub border_crossing_mins: u32,

    /// Country whose destinations skip the border allowance and lead the
    /// grouped board.
    pub home_country: String,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            radius_km: 500.0,
            fallback_distance_km: 100.0,
            price_per_km_eur: 0.12,
            min_price_eur: 5,
            first_departure_hour: 6,  // first coach at 6 AM
            last_departure_hour: 20,  // last coach at 8 PM
            break_interval_mins: 120, // 15-min break every 2 hours
            break_mins: 15,
            border_crossing_mins: 30,
            home_country: "Albania".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ScheduleConfig::default();

        assert_eq!(config.radius_km, 500.0);
        assert_eq!(config.fallback_distance_km, 100.0);
        assert_eq!(config.price_per_km_eur, 0.12);
        assert_eq!(config.min_price_eur, 5);
        assert_eq!(config.first_departure_hour, 6);
        assert_eq!(config.last_departure_hour, 20);
        assert_eq!(config.break_interval_mins, 120);
        assert_eq!(config.break_mins, 15);
        assert_eq!(config.border_crossing_mins, 30);
        assert_eq!(config.home_country, "Albania");
    }

    #[test]
    fn custom_config_via_struct_update() {
        let config = ScheduleConfig {
            radius_km: 200.0,
            home_country: "Greece".to_string(),
            ..ScheduleConfig::default()
        };

        assert_eq!(config.radius_km, 200.0);
        assert_eq!(config.home_country, "Greece");
        assert_eq!(config.min_price_eur, 5);
    }
}
