//! Planner configuration.

use chrono::Duration;

/// Configuration parameters for route planning.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Minutes added to the estimated travel time for each stop.
    /// Illustrative only; not calibrated against timetables.
    pub minutes_per_stop: i64,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(minutes_per_stop: i64) -> Self {
        Self { minutes_per_stop }
    }

    /// Returns the time per stop as a Duration.
    pub fn time_per_stop(&self) -> Duration {
        minutes(self.minutes_per_stop)
    }

    /// Estimated travel time for a route with the given number of stops.
    ///
    /// Saturates at [`Duration::MAX`].
    pub fn estimated_time(&self, stops: usize) -> Duration {
        let stops = i64::try_from(stops).unwrap_or(i64::MAX);
        minutes(self.minutes_per_stop.saturating_mul(stops))
    }
}

fn minutes(mins: i64) -> Duration {
    Duration::try_minutes(mins).unwrap_or(Duration::MAX)
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            minutes_per_stop: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlannerConfig::default();
        assert_eq!(config.minutes_per_stop, 2);
        assert_eq!(config.time_per_stop(), Duration::minutes(2));
    }

    #[test]
    fn estimated_time_scales_with_stops() {
        let config = PlannerConfig::default();
        assert_eq!(config.estimated_time(0), Duration::zero());
        assert_eq!(config.estimated_time(3), Duration::minutes(6));
        assert_eq!(config.estimated_time(25), Duration::minutes(50));
    }

    #[test]
    fn custom_config() {
        let config = PlannerConfig::new(3);
        assert_eq!(config.time_per_stop(), Duration::minutes(3));
        assert_eq!(config.estimated_time(4), Duration::minutes(12));
    }

    #[test]
    fn estimated_time_saturates() {
        let config = PlannerConfig::new(i64::MAX);
        assert_eq!(config.estimated_time(2), Duration::MAX);
        assert_eq!(config.time_per_stop(), Duration::MAX);
    }
}
