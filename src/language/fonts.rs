//! Font resolution: the capability a host supplies so shorthand glyphs and
//! the font-family variable can check which fonts actually exist.

/// A font known to the host renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Font {
    pub family: String,
    /// Generic family to fall back on: serif, sans-serif, monospace, ...
    pub generic: &'static str,
}

/// The CSS generic families, which resolve without any catalog.
pub const GENERIC_FAMILIES: &[&str] = &["serif", "sans-serif", "monospace", "cursive", "fantasy"];

/// Supplied by the host. When no catalog is present at all, shorthand
/// expansion is disabled and font names pass through unresolved.
pub trait FontCatalog {
    fn resolve(&self, name: &str) -> Option<Font>;
}

/// A fixed catalog, sufficient for the command line and for tests.
#[derive(Debug, Default)]
pub struct StaticFontCatalog {
    fonts: Vec<Font>,
}

impl StaticFontCatalog {
    pub fn new() -> StaticFontCatalog {
        StaticFontCatalog::default()
    }

    pub fn register(mut self, family: &str, generic: &'static str) -> StaticFontCatalog {
        self.fonts
            .push(Font {
                family: family.to_string(),
                generic,
            });
        self
    }
}

impl FontCatalog for StaticFontCatalog {
    fn resolve(&self, name: &str) -> Option<Font> {
        self.fonts
            .iter()
            .find(|font| {
                font.family
                    .eq_ignore_ascii_case(name)
            })
            .cloned()
    }
}

#[cfg(test)]
mod verify {
    use super::*;

    #[test]
    fn resolution_ignores_case() {
        let catalog = StaticFontCatalog::new().register("Inconsolata", "monospace");

        let font = catalog.resolve("inconsolata");
        assert_eq!(
            font,
            Some(Font {
                family: "Inconsolata".to_string(),
                generic: "monospace"
            })
        );
        assert_eq!(catalog.resolve("Comic Sans"), None);
    }
}
