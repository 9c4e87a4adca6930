//! Typed stat-change descriptors.
//!
//! Effects appear in outcome lines as compact tokens: one or more identical
//! sign characters followed by a kind word, e.g. `+experience`, `--speed`.
//! Stacking the sign character raises the magnitude.

use serde::{Deserialize, Serialize};

/// Which stat an effect mutates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    /// Accumulated experience.
    Experience,
    /// Walking speed in km/h.
    Speed,
    /// Progress along the route in km.
    Distance,
    /// Will to carry on; the journey fails when it reaches zero.
    Motivation,
}

impl EffectKind {
    /// Parse a lowercased kind word.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "experience" => Some(Self::Experience),
            "speed" => Some(Self::Speed),
            "distance" => Some(Self::Distance),
            "motivation" => Some(Self::Motivation),
            _ => None,
        }
    }

    /// The kind word as it appears in tokens.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Experience => "experience",
            Self::Speed => "speed",
            Self::Distance => "distance",
            Self::Motivation => "motivation",
        }
    }
}

impl std::fmt::Display for EffectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Why an effect token failed to parse.
///
/// The line parser wraps these into [`crate::ScenarioError`] variants that
/// carry the source name and line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// The token mixed `+` and `-` sign characters.
    MixedSigns,
    /// The kind word was not one of the four known kinds.
    UnknownKind(String),
}

/// A signed, magnitude-scaled mutation to one stat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effect {
    /// Which stat this mutates.
    pub kind: EffectKind,
    /// Whether the change is an increase.
    pub positive: bool,
    /// How many sign characters were stacked; always at least 1.
    pub magnitude: u32,
    /// The original token text, echoed back in narrative output.
    pub token: String,
}

impl Effect {
    /// Parse a token such as `++speed` or `-motivation`.
    ///
    /// The caller guarantees the token starts with a sign character.
    pub fn parse(token: &str) -> Result<Self, TokenError> {
        let sign = token.chars().next().filter(|c| matches!(c, '+' | '-'));
        let Some(sign) = sign else {
            return Err(TokenError::UnknownKind(token.to_string()));
        };

        let rest = token.trim_start_matches(sign);
        let magnitude = (token.len() - rest.len()) as u32;

        if rest.starts_with(['+', '-']) {
            return Err(TokenError::MixedSigns);
        }

        let kind_word = rest.to_lowercase();
        let Some(kind) = EffectKind::parse(&kind_word) else {
            return Err(TokenError::UnknownKind(kind_word));
        };

        Ok(Self {
            kind,
            positive: sign == '+',
            magnitude,
            token: token.to_string(),
        })
    }

    /// The magnitude with its sign applied.
    pub fn signed_magnitude(&self) -> i32 {
        let magnitude = self.magnitude as i32;
        if self.positive { magnitude } else { -magnitude }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_plus_speed() {
        let effect = Effect::parse("++speed").unwrap();
        assert_eq!(effect.kind, EffectKind::Speed);
        assert!(effect.positive);
        assert_eq!(effect.magnitude, 2);
        assert_eq!(effect.token, "++speed");
        assert_eq!(effect.signed_magnitude(), 2);
    }

    #[test]
    fn single_minus_distance() {
        let effect = Effect::parse("-distance").unwrap();
        assert_eq!(effect.kind, EffectKind::Distance);
        assert!(!effect.positive);
        assert_eq!(effect.magnitude, 1);
        assert_eq!(effect.signed_magnitude(), -1);
    }

    #[test]
    fn kind_word_is_case_insensitive() {
        let effect = Effect::parse("+Motivation").unwrap();
        assert_eq!(effect.kind, EffectKind::Motivation);
        assert_eq!(effect.token, "+Motivation");
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert_eq!(
            Effect::parse("+bogus"),
            Err(TokenError::UnknownKind("bogus".to_string()))
        );
    }

    #[test]
    fn mixed_signs_are_rejected() {
        assert_eq!(Effect::parse("+-speed"), Err(TokenError::MixedSigns));
        assert_eq!(Effect::parse("-+speed"), Err(TokenError::MixedSigns));
    }

    #[test]
    fn bare_sign_is_rejected() {
        assert!(matches!(
            Effect::parse("++"),
            Err(TokenError::UnknownKind(_))
        ));
    }
}
