//! Tunable constants for the journey engine.

/// Configuration for a journey.
///
/// Delays are in hours; the defaults pace the duck for roughly one scenario
/// every couple of minutes of real time.
#[derive(Debug, Clone)]
pub struct JourneyConfig {
    /// Walking speed the duck resets to at every scenario resolution, km/h.
    pub base_speed_kmh: f64,
    /// The smallest possible delay between scenarios, hours.
    pub delay_minimum_hours: f64,
    /// Difference between the smallest and largest delays, hours.
    pub delay_variance_hours: f64,
    /// How long voters get before a pending scenario auto-plays, hours.
    pub autoplay_delay_hours: f64,
    /// Motivation a fresh duck starts with.
    pub starting_motivation: i32,
    /// Experience lost on giving up.
    pub failure_experience_penalty: i32,
    /// RNG seed for reproducible journeys.
    pub seed: u64,
}

impl Default for JourneyConfig {
    fn default() -> Self {
        Self {
            base_speed_kmh: 5.0,
            delay_minimum_hours: 1.0 / 30.0,
            delay_variance_hours: 1.0 / 60.0,
            autoplay_delay_hours: 1.0 / 30.0,
            starting_motivation: 10,
            failure_experience_penalty: 2,
            seed: 42,
        }
    }
}

impl JourneyConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the base walking speed in km/h (floored at 1).
    pub fn with_base_speed(mut self, kmh: f64) -> Self {
        self.base_speed_kmh = kmh.max(1.0);
        self
    }

    /// Set the delay window between scenarios, in hours.
    pub fn with_delays(mut self, minimum: f64, variance: f64) -> Self {
        self.delay_minimum_hours = minimum.max(0.0);
        self.delay_variance_hours = variance.max(0.0);
        self
    }

    /// Set the auto-play delay in hours.
    pub fn with_autoplay_delay(mut self, hours: f64) -> Self {
        self.autoplay_delay_hours = hours.max(0.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = JourneyConfig::default();
        assert_eq!(cfg.base_speed_kmh, 5.0);
        assert_eq!(cfg.starting_motivation, 10);
        assert_eq!(cfg.seed, 42);
    }

    #[test]
    fn builder_methods() {
        let cfg = JourneyConfig::default()
            .with_seed(7)
            .with_base_speed(12.0)
            .with_delays(0.5, 0.25)
            .with_autoplay_delay(0.1);
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.base_speed_kmh, 12.0);
        assert_eq!(cfg.delay_minimum_hours, 0.5);
        assert_eq!(cfg.delay_variance_hours, 0.25);
        assert_eq!(cfg.autoplay_delay_hours, 0.1);
    }

    #[test]
    fn base_speed_floored() {
        let cfg = JourneyConfig::default().with_base_speed(0.0);
        assert_eq!(cfg.base_speed_kmh, 1.0);
    }
}
