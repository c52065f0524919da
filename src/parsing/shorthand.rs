//! Shorthand expansion: literal emoticon triggers become glyph markup
//! before interpretation begins.

use crate::language::diagnostics::Diagnostics;
use crate::language::fonts::FontCatalog;
use crate::language::registry;
use std::collections::HashSet;
use tracing::debug;

/// Replace every registered trigger with its tag-sequence expansion, in
/// registration order, until no trigger remains. A trigger whose glyph font
/// is not registered is skipped entirely, with one warning per distinct
/// missing font; with no catalog to consult this is a passthrough.
pub fn expand(
    text: &str,
    catalog: Option<&dyn FontCatalog>,
    diagnostics: &mut Diagnostics,
) -> String {
    let catalog = match catalog {
        Some(catalog) => catalog,
        None => return text.to_string(),
    };

    let mut output = text.to_string();
    let mut missing: HashSet<&str> = HashSet::new();

    for shorthand in registry::shorthands() {
        if catalog
            .resolve(shorthand.font)
            .is_none()
        {
            if missing.insert(shorthand.font) {
                diagnostics.warning(&format!(
                    "glyph font '{}' is not registered, skipping shorthand expansion",
                    shorthand.font
                ));
            }
            continue;
        }
        while output.contains(shorthand.trigger) {
            debug!("expanding {}", shorthand.trigger);
            output = output.replace(shorthand.trigger, shorthand.expansion);
        }
    }

    output
}
