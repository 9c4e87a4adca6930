//! Scenario, answer, and outcome types, plus resolution of free-text
//! responses to weighted-random outcomes.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::effect::Effect;
use crate::error::{ScenarioError, ScenarioResult};

/// One weighted resolution of a chosen answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    /// Relative weight, not normalized. Zero is parseable but degenerate.
    pub probability: u32,
    /// Narrative text shown on resolution.
    pub flavour: String,
    /// Effects applied in order on resolution.
    pub effects: Vec<Effect>,
}

/// An answer the player can give, with its possible outcomes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    /// The trigger phrase, matched case-insensitively as a substring.
    pub text: String,
    /// Outcomes in declaration order, for cumulative-weight sampling.
    pub outcomes: Vec<Outcome>,
}

impl Answer {
    /// Whether this answer's trigger phrase occurs in the response.
    pub fn matches(&self, response: &str) -> bool {
        response.to_lowercase().contains(&self.text.to_lowercase())
    }

    /// Weighted-random outcome selection.
    ///
    /// Draws uniformly in `[0, total_weight)` and walks outcomes in
    /// declaration order, returning the first whose cumulative weight
    /// exceeds the draw. If every weight is zero the pick is uniform.
    pub fn pick_outcome(&self, rng: &mut StdRng) -> &Outcome {
        let total: u32 = self.outcomes.iter().map(|o| o.probability).sum();
        if total == 0 {
            return &self.outcomes[rng.random_range(0..self.outcomes.len())];
        }

        let draw = rng.random_range(0.0..f64::from(total));
        let mut cumulative = 0.0;
        for outcome in &self.outcomes {
            cumulative += f64::from(outcome.probability);
            if cumulative > draw {
                return outcome;
            }
        }

        // Unreachable while total > 0; fall back to the last outcome.
        &self.outcomes[self.outcomes.len() - 1]
    }
}

/// A parsed narrative decision point.
///
/// Immutable once constructed; `source` is the identity used for
/// avoid-repeat selection and for reconstructing snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Name of the originating source.
    pub source: String,
    /// The narrative question shown to the player.
    pub prompt: String,
    /// Answers in declaration order; first match wins during resolution.
    pub answers: Vec<Answer>,
}

impl Scenario {
    /// Build a scenario, validating that the prompt is present, at least one
    /// answer exists, and every answer has at least one outcome.
    pub fn new(source: String, prompt: String, answers: Vec<Answer>) -> ScenarioResult<Self> {
        if prompt.is_empty() {
            return Err(ScenarioError::MissingPrompt {
                source_name: source,
            });
        }
        if answers.is_empty() {
            return Err(ScenarioError::NoAnswers {
                source_name: source,
            });
        }
        if let Some(empty) = answers.iter().find(|a| a.outcomes.is_empty()) {
            return Err(ScenarioError::EmptyAnswer {
                answer: empty.text.clone(),
                source_name: source,
            });
        }

        Ok(Self {
            source,
            prompt,
            answers,
        })
    }

    /// The first declared answer whose trigger phrase occurs in the
    /// response, case-insensitively. `None` when nothing matches, which is
    /// a normal result, not an error.
    pub fn answer_for(&self, response: &str) -> Option<&Answer> {
        self.answers.iter().find(|a| a.matches(response))
    }

    /// Resolve a free-text response to a weighted-random outcome of the
    /// matching answer. `None` when no answer matches.
    pub fn outcome_for(&self, response: &str, rng: &mut StdRng) -> Option<&Outcome> {
        Some(self.answer_for(response)?.pick_outcome(rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn outcome(probability: u32, flavour: &str) -> Outcome {
        Outcome {
            probability,
            flavour: flavour.to_string(),
            effects: Vec::new(),
        }
    }

    fn path_scenario() -> Scenario {
        Scenario::new(
            "path".to_string(),
            "Find the path".to_string(),
            vec![
                Answer {
                    text: "go left".to_string(),
                    outcomes: vec![outcome(10, "You succeed"), outcome(1, "You fail")],
                },
                Answer {
                    text: "go right".to_string(),
                    outcomes: vec![outcome(1, "A wall")],
                },
            ],
        )
        .unwrap()
    }

    #[test]
    fn construction_validates_shape() {
        assert!(matches!(
            Scenario::new("s".into(), String::new(), Vec::new()),
            Err(ScenarioError::MissingPrompt { .. })
        ));
        assert!(matches!(
            Scenario::new("s".into(), "Prompt".into(), Vec::new()),
            Err(ScenarioError::NoAnswers { .. })
        ));
        assert!(matches!(
            Scenario::new(
                "s".into(),
                "Prompt".into(),
                vec![Answer {
                    text: "yes".into(),
                    outcomes: Vec::new(),
                }],
            ),
            Err(ScenarioError::EmptyAnswer { .. })
        ));
    }

    #[test]
    fn matching_is_substring_and_case_insensitive() {
        let scenario = path_scenario();
        let answer = scenario.answer_for("I think we should GO LEFT here").unwrap();
        assert_eq!(answer.text, "go left");
        assert!(scenario.answer_for("go straight on").is_none());
    }

    #[test]
    fn first_declared_match_wins() {
        let scenario = Scenario::new(
            "s".into(),
            "Prompt".into(),
            vec![
                Answer {
                    text: "go".into(),
                    outcomes: vec![outcome(1, "first")],
                },
                Answer {
                    text: "go left".into(),
                    outcomes: vec![outcome(1, "second")],
                },
            ],
        )
        .unwrap();
        assert_eq!(scenario.answer_for("go left").unwrap().text, "go");
    }

    #[test]
    fn outcomes_never_cross_answers() {
        let scenario = path_scenario();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let outcome = scenario.outcome_for("go left", &mut rng).unwrap();
            assert!(
                outcome.flavour == "You succeed" || outcome.flavour == "You fail",
                "picked another answer's outcome: {:?}",
                outcome.flavour
            );
        }
    }

    #[test]
    fn single_outcome_is_always_chosen() {
        let scenario = path_scenario();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let outcome = scenario.outcome_for("go right", &mut rng).unwrap();
            assert_eq!(outcome.flavour, "A wall");
        }
    }

    #[test]
    fn weighted_frequencies_match_weights() {
        let answer = Answer {
            text: "roll".to_string(),
            outcomes: vec![outcome(70, "a"), outcome(20, "b"), outcome(10, "c")],
        };
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts = [0u32; 3];

        for _ in 0..10_000 {
            match answer.pick_outcome(&mut rng).flavour.as_str() {
                "a" => counts[0] += 1,
                "b" => counts[1] += 1,
                _ => counts[2] += 1,
            }
        }

        let expected = [0.7, 0.2, 0.1];
        for (count, want) in counts.iter().zip(expected) {
            let got = f64::from(*count) / 10_000.0;
            assert!(
                (got - want).abs() < 0.03,
                "frequency {got} too far from {want}"
            );
        }
    }

    #[test]
    fn all_zero_weights_fall_back_to_uniform() {
        let answer = Answer {
            text: "roll".to_string(),
            outcomes: vec![outcome(0, "a"), outcome(0, "b")],
        };
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen_b = false;
        for _ in 0..100 {
            seen_b |= answer.pick_outcome(&mut rng).flavour == "b";
        }
        assert!(seen_b);
    }

    #[test]
    fn round_trips_through_json() {
        let scenario = path_scenario();
        let json = serde_json::to_string(&scenario).unwrap();
        let back: Scenario = serde_json::from_str(&json).unwrap();
        assert_eq!(back, scenario);
    }
}
