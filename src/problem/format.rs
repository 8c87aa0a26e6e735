use super::messages::generate_error_message;
use owo_colors::OwoColorize;
use std::path::Path;
use formwork::language::{IntegrityError, LoadingError};
use formwork::templating::TemplateError;

/// Format an integrity error with full details, including where in the form
/// it was detected
pub fn full_integrity_error(error: &IntegrityError, filename: &Path) -> String {
    let (problem, details) = generate_error_message(error);

    let location = match error.path() {
        Some(path) => path.to_string(),
        None => "[]".to_string(),
    };

    format!(
        r#"
{}: {} {}

{} {}

{}
        "#,
        "error".bright_red(),
        filename.to_string_lossy(),
        problem.bold(),
        '|'.bright_blue(),
        location.bright_blue(),
        details
    )
    .trim_ascii()
    .to_string()
}

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error<'i>(error: &LoadingError<'i>) -> String {
    format!(
        "{}: {}: {}",
        "error".bright_red(),
        error
            .filename
            .display(),
        error
            .problem
            .bold()
    )
}

/// Format a LoadingError including the underlying cause
pub fn full_loading_error<'i>(error: &LoadingError<'i>) -> String {
    if error
        .details
        .is_empty()
    {
        return concise_loading_error(error);
    }

    format!(
        "{}\n\n{}",
        concise_loading_error(error),
        error.details
    )
}

/// Format a failure filling in a page template
pub fn concise_template_error(error: &TemplateError) -> String {
    format!("{}: {}", "error".bright_red(), error)
}

/// Format a failure writing output or running Typst
pub fn concise_output_error(filename: &Path, error: &std::io::Error) -> String {
    format!(
        "{}: {}: {}",
        "error".bright_red(),
        filename.display(),
        error
            .to_string()
            .bold()
    )
}
