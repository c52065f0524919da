//! Element synthesis and serialization for parsed markup.

pub mod color;
pub mod html;
pub mod synthesizer;

pub use synthesizer::Synthesizer;

use crate::language::diagnostics::Diagnostics;
use crate::language::fonts::FontCatalog;
use crate::language::{MarkupError, RenderableNode};
use crate::parsing;

/// The whole pipeline in one step: markup text in, element tree out.
pub fn render(
    content: &str,
    catalog: Option<&dyn FontCatalog>,
    diagnostics: &mut Diagnostics,
) -> Result<Vec<RenderableNode>, MarkupError> {
    let segments = parsing::parse(content, catalog, diagnostics);
    let mut synthesizer = Synthesizer::new(diagnostics, catalog);
    synthesizer.synthesize_tree(&segments)
}
