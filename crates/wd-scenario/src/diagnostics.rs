//! Ariadne rendering of scenario parse errors for terminal output.

use ariadne::{Color, Label, Report, ReportKind, Source};

use crate::error::ScenarioError;

/// Render a parse error as an ariadne report over the source text.
///
/// `source_text` must be the same text the parser saw (leading BOM
/// stripped). Errors without a span render a plain one-line message.
pub fn render_parse_error(source_text: &str, filename: &str, err: &ScenarioError) -> String {
    let source_text = source_text.strip_prefix('\u{feff}').unwrap_or(source_text);

    let Some(span) = err.span() else {
        return format!("error: {err}\n");
    };

    let mut output = Vec::new();
    Report::build(ReportKind::Error, (filename, span.clone()))
        .with_message(err.to_string())
        .with_label(
            Label::new((filename, span))
                .with_message(label_for(err))
                .with_color(Color::Red),
        )
        .finish()
        .write((filename, Source::from(source_text)), &mut output)
        .ok();

    String::from_utf8(output).unwrap_or_default()
}

fn label_for(err: &ScenarioError) -> &'static str {
    match err {
        ScenarioError::UnparseableLine { .. } => "not an answer or outcome line",
        ScenarioError::UnknownEffect { .. } => "not a known effect kind",
        ScenarioError::MixedSigns { .. } => "signs must be all + or all -",
        _ => "here",
    }
}
