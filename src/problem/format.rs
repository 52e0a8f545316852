use super::messages::generate_error_message;
use owo_colors::OwoColorize;
use perceptor::{language::LoadingError, parsing::ParsingError};
use std::path::Path;

/// Format a diagnostic with full details including the offending part of
/// the message. `line` is the zero-origin line of the capture file the
/// message was read from.
pub fn full_parsing_error<'i>(
    error: &ParsingError,
    filename: &'i Path,
    line: usize,
    source: &'i str,
) -> String {
    let (problem, details) = generate_error_message(error);

    let (excerpt, j) = excerpt(source, error.offset());
    let line = line + 1;
    let column = calculate_column_number(source, error.offset()) + 1;
    let caret = j + 1;
    let width = 3.max(
        line.to_string()
            .len(),
    );

    format!(
        r#"
{}: {}:{}:{} {}

{:width$} {}
{:width$} {} {}
{:width$} {} {:>caret$}

{}
        "#,
        "warning".bright_yellow(),
        filename.to_string_lossy(),
        line,
        column,
        problem.bold(),
        ' ',
        '|'.bright_blue(),
        line.bright_blue(),
        '|'.bright_blue(),
        excerpt,
        ' ',
        '|'.bright_blue(),
        '^'.bright_red(),
        details
    )
    .trim_ascii()
    .to_string()
}

/// Format a diagnostic with concise single-line output
pub fn concise_parsing_error<'i>(
    error: &ParsingError,
    filename: &'i Path,
    line: usize,
    source: &'i str,
) -> String {
    let (problem, _) = generate_error_message(error);
    let column = calculate_column_number(source, error.offset()) + 1;

    format!(
        "{}: {}:{}:{} {}",
        "warning".bright_yellow(),
        filename.to_string_lossy(),
        line + 1,
        column,
        problem.bold(),
    )
}

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error<'i>(error: &LoadingError<'i>) -> String {
    format!(
        "{}: {}:{}",
        "error".bright_red(),
        error
            .filename
            .display(),
        error
            .problem
            .bold()
    )
}

// Perceptor messages run to a couple of kilobytes on one line, so only a
// window around the offset is shown. Returns the window and the zero-origin
// column of the offset within it.
fn excerpt(source: &str, offset: usize) -> (String, usize) {
    const BEFORE: usize = 40;
    const AFTER: usize = 40;

    let column = calculate_column_number(source, offset);
    let chars = source
        .chars()
        .collect::<Vec<_>>();

    let start = column.saturating_sub(BEFORE);
    let end = chars
        .len()
        .min(column + AFTER);

    let mut text = chars[start..end]
        .iter()
        .collect::<String>();
    let mut j = column - start;

    if start > 0 {
        text.insert_str(0, "...");
        j += 3;
    }
    if end < chars.len() {
        text.push_str("...");
    }

    (text, j)
}

// Zero-origin count of characters before the offset.
fn calculate_column_number(content: &str, offset: usize) -> usize {
    let offset = offset.min(content.len());
    content
        .get(..offset)
        .map(|before| {
            before
                .chars()
                .count()
        })
        .unwrap_or(offset)
}
