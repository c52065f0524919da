//! The tag registry: a static, case-insensitive table of tag behaviors, and
//! the shorthand trigger table.

use crate::language::TagDescriptor;

/// Construct a plain inline tag.
const fn flat(
    name: &'static str,
    element: &'static str,
    styles: &'static [(&'static str, &'static str)],
) -> TagDescriptor {
    TagDescriptor {
        name,
        element,
        accepts_closing: true,
        self_closing: false,
        suppresses_text: false,
        container: false,
        verbatim: false,
        styles,
        bindings: &[],
    }
}

/// Construct a point tag: no range, no closing tag.
const fn point(name: &'static str, element: &'static str) -> TagDescriptor {
    TagDescriptor {
        name,
        element,
        accepts_closing: false,
        self_closing: true,
        suppresses_text: false,
        container: false,
        verbatim: false,
        styles: &[],
        bindings: &[],
    }
}

/// Construct a container tag: content is recursively parsed as markup.
const fn block(
    name: &'static str,
    element: &'static str,
    styles: &'static [(&'static str, &'static str)],
) -> TagDescriptor {
    TagDescriptor {
        name,
        element,
        accepts_closing: true,
        self_closing: false,
        suppresses_text: false,
        container: true,
        verbatim: false,
        styles,
        bindings: &[],
    }
}

/// Construct a verbatim tag: content is never interpreted as markup.
const fn verbatim(
    name: &'static str,
    element: &'static str,
    styles: &'static [(&'static str, &'static str)],
) -> TagDescriptor {
    TagDescriptor {
        name,
        element,
        accepts_closing: true,
        self_closing: false,
        suppresses_text: false,
        container: false,
        verbatim: true,
        styles,
        bindings: &[],
    }
}

/// Construct a tag carrying variable bindings onto output attributes.
const fn linked(
    name: &'static str,
    element: &'static str,
    bindings: &'static [(&'static str, &'static str)],
) -> TagDescriptor {
    TagDescriptor {
        name,
        element,
        accepts_closing: true,
        self_closing: false,
        suppresses_text: false,
        container: false,
        verbatim: false,
        styles: &[],
        bindings,
    }
}

/// All registered tags, sorted by name in descending lexical order. Scans
/// that need first-match-wins semantics iterate this table as-is: a shorter
/// name that is a prefix of a longer one must never match first, so the
/// ordering is a correctness requirement, not cosmetic.
static TAGS: &[TagDescriptor] = &[
    linked("url", "a", &[("href", "href"), ("url", "href")]),
    flat("u", "span", &[("textDecoration", "underline")]),
    block("sup", "sup", &[]),
    block("sub", "sub", &[]),
    flat("size", "span", &[]),
    flat("s", "span", &[("textDecoration", "line-through")]),
    block("right", "div", &[("textAlign", "right")]),
    block("quote", "blockquote", &[]),
    verbatim("nomarkup", "span", &[]),
    TagDescriptor {
        name: "list",
        element: "ul",
        accepts_closing: true,
        self_closing: false,
        // stray text between items is discarded
        suppresses_text: true,
        container: true,
        verbatim: false,
        styles: &[],
        bindings: &[],
    },
    block("left", "div", &[("textAlign", "left")]),
    block("item", "li", &[]),
    flat("i", "span", &[("fontStyle", "italic")]),
    point("hr", "hr"),
    block("h6", "h6", &[]),
    block("h5", "h5", &[]),
    block("h4", "h4", &[]),
    block("h3", "h3", &[]),
    block("h2", "h2", &[]),
    block("h1", "h1", &[]),
    flat("font", "span", &[]),
    flat("color", "span", &[]),
    verbatim("code", "code", &[("fontFamily", "monospace")]),
    block("center", "div", &[("textAlign", "center")]),
    point("br", "br"),
    flat("b", "span", &[("fontWeight", "bold")]),
];

/// Case-insensitive descriptor lookup.
pub fn lookup(name: &str) -> Option<&'static TagDescriptor> {
    let name = name.to_ascii_lowercase();
    TAGS.iter()
        .find(|descriptor| descriptor.name == name)
}

/// The full table, most specific name first.
pub fn descriptors() -> &'static [TagDescriptor] {
    TAGS
}

/// A literal trigger substituted before interpretation begins, and the glyph
/// font its expansion depends on.
#[derive(Debug, PartialEq, Eq)]
pub struct Shorthand {
    pub trigger: &'static str,
    pub expansion: &'static str,
    pub font: &'static str,
}

/// Emoticon shorthands, in registration order. Expansions must not contain
/// any trigger, or a single expansion pass would not terminate.
static SHORTHANDS: &[Shorthand] = &[
    Shorthand {
        trigger: "[:)]",
        expansion: "[font=\"Pictoglyph\"]☺[/font]",
        font: "Pictoglyph",
    },
    Shorthand {
        trigger: "[:(]",
        expansion: "[font=\"Pictoglyph\"]☹[/font]",
        font: "Pictoglyph",
    },
    Shorthand {
        trigger: "[;)]",
        expansion: "[font=\"Pictoglyph\"]😉[/font]",
        font: "Pictoglyph",
    },
    Shorthand {
        trigger: "[:D]",
        expansion: "[font=\"Pictoglyph\"]😄[/font]",
        font: "Pictoglyph",
    },
    Shorthand {
        trigger: "[:P]",
        expansion: "[font=\"Pictoglyph\"]😛[/font]",
        font: "Pictoglyph",
    },
];

pub fn shorthands() -> &'static [Shorthand] {
    SHORTHANDS
}
