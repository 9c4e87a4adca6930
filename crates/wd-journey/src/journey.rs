//! The advance state machine.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use wd_scenario::{Catalog, Effect, EffectKind, Outcome};

use crate::clock::Clock;
use crate::config::JourneyConfig;
use crate::duck::{Duck, JourneyOutcome};
use crate::error::{JourneyError, JourneyResult};

/// A duck together with its non-persistent collaborators.
///
/// Each call to [`Journey::advance`] performs at most one action: initiate
/// a scenario, resolve one, or nothing. Narrative lines are returned
/// eagerly, in order, for the caller to render; `Ok(None)` means nothing
/// happened and nothing needs rendering.
pub struct Journey {
    duck: Duck,
    catalog: Catalog,
    clock: Box<dyn Clock>,
    rng: StdRng,
    config: JourneyConfig,
}

impl Journey {
    /// Wrap an existing duck. The RNG is seeded from the config.
    pub fn new(duck: Duck, catalog: Catalog, clock: Box<dyn Clock>, config: JourneyConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self {
            duck,
            catalog,
            clock,
            rng,
            config,
        }
    }

    /// The duck being advanced.
    pub fn duck(&self) -> &Duck {
        &self.duck
    }

    /// Consume the journey and return the duck for persisting.
    pub fn into_duck(self) -> Duck {
        self.duck
    }

    /// Answer texts of the active scenario, for re-prompting after a
    /// response that matched nothing.
    pub fn acceptable_answers(&self) -> Vec<String> {
        self.duck
            .scenario
            .as_ref()
            .map(|s| s.answers.iter().map(|a| a.text.clone()).collect())
            .unwrap_or_default()
    }

    /// How long until the duck may act again. Zero once the timer elapsed.
    pub fn time_remaining(&self) -> Duration {
        (self.duck.next_action_at - self.clock.now()).max(Duration::zero())
    }

    /// Advance the journey by one action.
    ///
    /// With no active scenario: a no-op before the timer elapses, otherwise
    /// either terminal success (route complete) or a fresh scenario prompt.
    /// With an active scenario: an explicit `response` resolves it if it
    /// matches an answer (`Ok(None)` if it matches nothing, so the caller
    /// can re-prompt); without a response the scenario auto-plays once the
    /// re-poll timer elapses.
    ///
    /// Fails with [`JourneyError::AlreadyFinished`] on a finished duck;
    /// callers must check the phase first.
    pub fn advance(&mut self, response: Option<&str>) -> JourneyResult<Option<Vec<String>>> {
        if self.duck.is_finished() {
            return Err(JourneyError::AlreadyFinished);
        }

        let now = self.clock.now();
        if self.duck.scenario.is_some() {
            self.resolve(response, now)
        } else {
            if now < self.duck.next_action_at {
                return Ok(None);
            }
            self.initiate(now)
        }
    }

    fn initiate(&mut self, now: DateTime<Utc>) -> JourneyResult<Option<Vec<String>>> {
        if self.duck.progress > self.duck.route.total_km() {
            self.duck.outcome = Some(JourneyOutcome::Succeeded);
            return Ok(Some(vec![format!(
                "After {:.1} km, the journey is complete. What a duck.",
                self.duck.route.total_km(),
            )]));
        }

        let scenario = self
            .catalog
            .get_random(&mut self.rng, self.duck.last_scenario.as_deref())?;

        let mut lines = vec![scenario.prompt.clone()];
        for answer in &scenario.answers {
            lines.push(format!("> {}", answer.text));
        }

        self.duck.scenario = Some(scenario);
        self.duck.next_action_at = now + hours(self.config.autoplay_delay_hours);
        Ok(Some(lines))
    }

    fn resolve(
        &mut self,
        response: Option<&str>,
        now: DateTime<Utc>,
    ) -> JourneyResult<Option<Vec<String>>> {
        // The caller checked scenario.is_some().
        let Some(scenario) = self.duck.scenario.as_ref() else {
            return Ok(None);
        };

        let outcome: Outcome = if let Some(response) = response {
            match scenario.outcome_for(response, &mut self.rng) {
                Some(outcome) => outcome.clone(),
                None => return Ok(None),
            }
        } else if now >= self.duck.next_action_at {
            // Auto-play: nobody answered in time, so pick an answer at
            // random and roll its own weighted outcomes.
            let answer = &scenario.answers[self.rng.random_range(0..scenario.answers.len())];
            answer.pick_outcome(&mut self.rng).clone()
        } else {
            return Ok(None);
        };

        if let Some(scenario) = self.duck.scenario.take() {
            self.duck.last_scenario = Some(scenario.source);
        }

        let mut lines = vec![narrate(&outcome)];

        self.duck.speed = self.config.base_speed_kmh;
        for effect in &outcome.effects {
            self.apply_effect(effect);
            if self.duck.motivation <= 0 {
                self.duck.outcome = Some(JourneyOutcome::Failed);
                self.duck.experience -= self.config.failure_experience_penalty;
                lines.push("The duck has lost all motivation and given up.".to_string());
                break;
            }
        }

        if self.duck.outcome.is_none() {
            let delay = self.draw_delay();
            self.duck.next_action_at = now + hours(delay);
            self.duck.progress += self.duck.speed * delay;
        }

        Ok(Some(lines))
    }

    /// Apply one effect. Policy for `speed` is flat additive with a 1 km/h
    /// floor; `distance` moves the duck by `speed * magnitude` over the
    /// minimum delay, floored at the route start.
    fn apply_effect(&mut self, effect: &Effect) {
        let signed = effect.signed_magnitude();
        match effect.kind {
            EffectKind::Motivation => self.duck.motivation += signed,
            EffectKind::Experience => self.duck.experience += signed,
            EffectKind::Speed => {
                self.duck.speed = (self.duck.speed + f64::from(signed)).max(1.0);
            }
            EffectKind::Distance => {
                let shift = self.duck.speed * f64::from(signed) * self.config.delay_minimum_hours;
                self.duck.progress = (self.duck.progress + shift).max(0.0);
            }
        }
    }

    fn draw_delay(&mut self) -> f64 {
        let variance = self.config.delay_variance_hours;
        let jitter = if variance > 0.0 {
            self.rng.random_range(0.0..variance)
        } else {
            0.0
        };
        self.config.delay_minimum_hours + jitter
    }
}

/// The outcome's flavour with its effect tokens echoed after it.
fn narrate(outcome: &Outcome) -> String {
    if outcome.effects.is_empty() {
        return outcome.flavour.clone();
    }
    let tokens: Vec<&str> = outcome.effects.iter().map(|e| e.token.as_str()).collect();
    format!("{} {}", outcome.flavour, tokens.join(" "))
}

/// A fractional-hour `Duration`, to millisecond precision.
fn hours(h: f64) -> Duration {
    Duration::milliseconds((h * 3_600_000.0).round() as i64)
}
