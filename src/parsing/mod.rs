//! Parsing for the Brackish markup language.

use std::path::Path;
use tracing::debug;

use crate::language::diagnostics::Diagnostics;
use crate::language::fonts::FontCatalog;
use crate::language::{LoadingError, Segment};

pub mod parser;
pub mod shorthand;
pub mod tokenizer;

/// Read a file and return an owned String. Ownership passes back to the
/// caller so everything derived from the content can borrow from one place.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Interpret markup into segments: the tokenizer and interpreter run under
/// the given diagnostics sink, with shorthand expansion enabled when a font
/// catalog is present.
pub fn parse(
    content: &str,
    catalog: Option<&dyn FontCatalog>,
    diagnostics: &mut Diagnostics,
) -> Vec<Segment> {
    let mut interpreter = parser::Interpreter::new(diagnostics, catalog);
    let segments = interpreter.interpret(content);

    debug!(
        "{} segment{}",
        segments.len(),
        if segments.len() == 1 { "" } else { "s" }
    );
    segments
}
