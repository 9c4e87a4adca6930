//! Line parser for the scenario text format.
//!
//! The grammar is line-oriented:
//!
//! ```text
//! You come to a fork in the road. Which way?
//! <go left>
//! 10 You skip merrily down the leftward path ++speed
//! 1 The left path is a bog -motivation -speed
//! <go right>
//! 5 The right path is fine
//! ```
//!
//! The first non-marker line is the prompt. `<...>` lines start answers.
//! Outcome lines are a weight, flavour text, and a trailing run of effect
//! tokens. Anything else, once an answer exists, is a fatal parse error;
//! the engine never skips broken lines.

use std::ops::Range;

use crate::effect::{Effect, TokenError};
use crate::error::{ScenarioError, ScenarioResult};
use crate::scenario::{Answer, Outcome, Scenario};

/// Parse a scenario source into a validated [`Scenario`].
///
/// Byte spans in errors are relative to `text` with any leading BOM
/// stripped; strip it the same way before rendering diagnostics.
pub fn parse_scenario(source_name: &str, text: &str) -> ScenarioResult<Scenario> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut prompt: Option<String> = None;
    let mut answers: Vec<Answer> = Vec::new();
    let mut offset = 0usize;

    for (idx, raw) in text.split('\n').enumerate() {
        let line_start = offset;
        offset += raw.len() + 1;

        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let span_start = line_start + (raw.len() - raw.trim_start().len());
        let span = span_start..span_start + line.len();
        let lineno = idx + 1;

        if line.eq_ignore_ascii_case("<scenario>") {
            // Legacy header, safely skippable.
            continue;
        }

        if prompt.is_none() {
            prompt = Some(line.to_string());
            continue;
        }

        if let Some(answer_text) = answer_header(line) {
            answers.push(Answer {
                text: answer_text.to_string(),
                outcomes: Vec::new(),
            });
            continue;
        }

        // Lines between the prompt and the first answer are ignored.
        let Some(current) = answers.last_mut() else {
            continue;
        };

        match outcome_line(line) {
            Some(Ok(outcome)) => current.outcomes.push(outcome),
            Some(Err(token_err)) => {
                return Err(locate_token_error(token_err, source_name, lineno, span));
            }
            None => {
                return Err(ScenarioError::UnparseableLine {
                    source_name: source_name.to_string(),
                    line: lineno,
                    text: line.to_string(),
                    span,
                });
            }
        }
    }

    Scenario::new(
        source_name.to_string(),
        prompt.unwrap_or_default(),
        answers,
    )
}

/// `<answer text>`: bracket contents verbatim, including inner whitespace.
fn answer_header(line: &str) -> Option<&str> {
    line.strip_prefix('<')?.strip_suffix('>')
}

/// A failed effect token, carrying the token text for the error message.
struct BadToken {
    token: String,
    error: TokenError,
}

/// `N flavour text +token -token...`: weight, non-greedy flavour, then a
/// suffix of whitespace-separated sign-led effect tokens.
fn outcome_line(line: &str) -> Option<Result<Outcome, BadToken>> {
    let digits_end = line.find(|c: char| !c.is_ascii_digit())?;
    if digits_end == 0 {
        return None;
    }
    let probability: u32 = line[..digits_end].parse().ok()?;
    let rest = line[digits_end..].strip_prefix(' ')?;

    // Peel effect tokens off the end; the flavour is what remains.
    let mut flavour_end = rest.len();
    let mut tokens: Vec<&str> = Vec::new();
    loop {
        let head = rest[..flavour_end].trim_end();
        let Some(word_start) = head.rfind(char::is_whitespace) else {
            break;
        };
        let word = head[word_start..].trim_start();
        if !word.starts_with(['+', '-']) {
            break;
        }
        tokens.push(word);
        flavour_end = word_start;
    }
    tokens.reverse();

    let mut effects = Vec::with_capacity(tokens.len());
    for token in tokens {
        match Effect::parse(token) {
            Ok(effect) => effects.push(effect),
            Err(error) => {
                return Some(Err(BadToken {
                    token: token.to_string(),
                    error,
                }));
            }
        }
    }

    Some(Ok(Outcome {
        probability,
        flavour: rest[..flavour_end].trim().to_string(),
        effects,
    }))
}

fn locate_token_error(
    bad: BadToken,
    source_name: &str,
    line: usize,
    span: Range<usize>,
) -> ScenarioError {
    match bad.error {
        TokenError::MixedSigns => ScenarioError::MixedSigns {
            source_name: source_name.to_string(),
            line,
            token: bad.token,
            span,
        },
        TokenError::UnknownKind(kind) => ScenarioError::UnknownEffect {
            source_name: source_name.to_string(),
            line,
            token: bad.token,
            kind,
            span,
        },
    }
}
