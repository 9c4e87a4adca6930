//! The persisted duck state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use wd_route::{GeoPoint, Route};
use wd_scenario::Scenario;

use crate::config::JourneyConfig;
use crate::error::{JourneyError, JourneyResult};

/// How a finished journey ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JourneyOutcome {
    /// The duck walked the whole route.
    Succeeded,
    /// Motivation ran out.
    Failed,
}

/// Where the duck is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No active scenario and the timer has not elapsed.
    Waiting,
    /// No active scenario and the timer has elapsed.
    Ready,
    /// A scenario is awaiting resolution.
    Deciding,
    /// Terminal: the route is complete.
    Succeeded,
    /// Terminal: the duck gave up.
    Failed,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Waiting => write!(f, "waiting"),
            Self::Ready => write!(f, "ready"),
            Self::Deciding => write!(f, "deciding"),
            Self::Succeeded => write!(f, "succeeded"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// The travelling character. Everything here persists across invocations;
/// mutate it only through [`crate::Journey::advance`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Duck {
    /// Identity of this duck.
    pub id: Uuid,
    /// The finished duck this one hatched from, if any.
    pub predecessor: Option<Uuid>,
    /// The route being walked; serialized as an encoded polyline.
    pub route: Route,
    /// Distance travelled so far, km. Never negative.
    pub progress: f64,
    /// Current walking speed, km/h. Never below 1.
    pub speed: f64,
    /// Will to carry on; the journey fails at or below zero.
    pub motivation: i32,
    /// Accumulated experience. Can dip slightly negative on failure.
    pub experience: i32,
    /// The scenario currently awaiting resolution, if any.
    pub scenario: Option<Scenario>,
    /// Source name of the previous scenario, to avoid immediate repeats.
    pub last_scenario: Option<String>,
    /// How the journey ended; `None` while still travelling.
    pub outcome: Option<JourneyOutcome>,
    /// No action may occur before this instant.
    pub next_action_at: DateTime<Utc>,
}

impl Duck {
    /// A fresh duck at the start of `route`, ready to act immediately.
    pub fn new(route: Route, config: &JourneyConfig, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            predecessor: None,
            route,
            progress: 0.0,
            speed: config.base_speed_kmh,
            motivation: config.starting_motivation,
            experience: 0,
            scenario: None,
            last_scenario: None,
            outcome: None,
            next_action_at: now,
        }
    }

    /// Where the duck is in its lifecycle at `now`.
    pub fn phase(&self, now: DateTime<Utc>) -> Phase {
        match self.outcome {
            Some(JourneyOutcome::Succeeded) => Phase::Succeeded,
            Some(JourneyOutcome::Failed) => Phase::Failed,
            None if self.scenario.is_some() => Phase::Deciding,
            None if now < self.next_action_at => Phase::Waiting,
            None => Phase::Ready,
        }
    }

    /// Whether the journey is over, either way.
    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// The duck's current position along the route.
    pub fn position(&self) -> GeoPoint {
        self.route.position(self.progress)
    }

    /// The walked prefix of the route.
    pub fn travelled(&self) -> &[GeoPoint] {
        self.route.travelled(self.progress)
    }

    /// A human-readable stats block.
    pub fn progress_summary(&self) -> String {
        let status = match self.outcome {
            Some(JourneyOutcome::Succeeded) => "arrived",
            Some(JourneyOutcome::Failed) => "gave up",
            None if self.scenario.is_some() => "deciding",
            None => "walking",
        };
        format!(
            "{:.1} of {:.1} km ({status}) | speed {:.1} km/h | motivation {} | experience {}",
            self.progress.min(self.route.total_km()),
            self.route.total_km(),
            self.speed,
            self.motivation,
            self.experience,
        )
    }

    /// Hatch a successor: fresh stats on a new route, carrying this duck's
    /// experience. Only a finished duck can hatch.
    pub fn successor(
        &self,
        route: Route,
        config: &JourneyConfig,
        now: DateTime<Utc>,
    ) -> JourneyResult<Self> {
        if !self.is_finished() {
            return Err(JourneyError::NotFinished);
        }

        let mut duck = Self::new(route, config, now);
        duck.predecessor = Some(self.id);
        duck.experience = self.experience;
        Ok(duck)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn test_route() -> Route {
        Route::from_points(vec![
            GeoPoint::new(51.5, -0.1),
            GeoPoint::new(51.6, -0.1),
            GeoPoint::new(51.7, -0.1),
        ])
        .unwrap()
    }

    fn test_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn fresh_duck_is_ready_at_the_first_point() {
        let duck = Duck::new(test_route(), &JourneyConfig::default(), test_now());
        assert_eq!(duck.phase(test_now()), Phase::Ready);
        assert_eq!(duck.position(), GeoPoint::new(51.5, -0.1));
        assert_eq!(duck.motivation, 10);
        assert_eq!(duck.experience, 0);
    }

    #[test]
    fn waiting_before_the_timer() {
        let mut duck = Duck::new(test_route(), &JourneyConfig::default(), test_now());
        duck.next_action_at = test_now() + chrono::Duration::hours(1);
        assert_eq!(duck.phase(test_now()), Phase::Waiting);
    }

    #[test]
    fn succeeded_duck_sits_on_the_last_point() {
        let mut duck = Duck::new(test_route(), &JourneyConfig::default(), test_now());
        duck.progress = duck.route.total_km() + 1.0;
        duck.outcome = Some(JourneyOutcome::Succeeded);
        assert_eq!(duck.phase(test_now()), Phase::Succeeded);
        assert_eq!(duck.position(), *duck.route.points().last().unwrap());
    }

    #[test]
    fn successor_requires_a_finished_duck() {
        let duck = Duck::new(test_route(), &JourneyConfig::default(), test_now());
        assert!(matches!(
            duck.successor(test_route(), &JourneyConfig::default(), test_now()),
            Err(JourneyError::NotFinished)
        ));
    }

    #[test]
    fn successor_carries_experience_and_lineage() {
        let mut duck = Duck::new(test_route(), &JourneyConfig::default(), test_now());
        duck.experience = 7;
        duck.outcome = Some(JourneyOutcome::Succeeded);

        let next = duck
            .successor(test_route(), &JourneyConfig::default(), test_now())
            .unwrap();
        assert_eq!(next.predecessor, Some(duck.id));
        assert_eq!(next.experience, 7);
        assert_eq!(next.motivation, 10);
        assert_eq!(next.progress, 0.0);
        assert!(next.outcome.is_none());
    }

    #[test]
    fn snapshot_round_trips() {
        let mut duck = Duck::new(test_route(), &JourneyConfig::default(), test_now());
        duck.progress = 3.25;
        duck.speed = 6.5;
        duck.motivation = 8;
        duck.experience = 4;
        duck.last_scenario = Some("fork".to_string());

        let json = serde_json::to_string_pretty(&duck).unwrap();
        let back: Duck = serde_json::from_str(&json).unwrap();

        assert_eq!(back, duck);
        assert_eq!(back.progress, 3.25);
        assert_eq!(back.speed, 6.5);
        assert_eq!(back.next_action_at, duck.next_action_at);
        assert_eq!(back.route, duck.route);
    }

    #[test]
    fn timestamps_serialize_as_iso_8601() {
        let duck = Duck::new(test_route(), &JourneyConfig::default(), test_now());
        let json = serde_json::to_string(&duck).unwrap();
        assert!(json.contains("2026-03-01T12:00:00Z"));
    }
}
