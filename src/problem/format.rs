use owo_colors::OwoColorize;
use std::path::Path;

use crate::language::{LoadingError, MarkupError};

/// Format a strict-mode abort with concise single-line output
pub fn concise_markup_error(error: &MarkupError, filename: &Path) -> String {
    format!(
        "{}: {}: {}",
        "error".bright_red(),
        filename.display(),
        error
            .problem
            .bold(),
    )
}

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error(error: &LoadingError) -> String {
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
