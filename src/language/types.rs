//! Types representing Brackish markup: tag descriptors, parse segments, and
//! the renderable element descriptors handed to the host renderer.

use serde::Serialize;
use std::collections::BTreeMap;
use std::{fmt, path::Path};

/// Static description of one registered tag's behavior. Descriptors are
/// constructed once in the registry and never mutated; every open tag on the
/// parse stack resolves to one of these.
#[derive(Debug, PartialEq, Eq)]
pub struct TagDescriptor {
    /// Unique name, lowercase.
    pub name: &'static str,
    /// Element kind the synthesizer emits for this tag.
    pub element: &'static str,
    /// Whether a matching closing tag is expected. False for point tags.
    pub accepts_closing: bool,
    /// Affects a single point rather than a range; popped immediately.
    pub self_closing: bool,
    /// Literal text directly inside this tag is discarded.
    pub suppresses_text: bool,
    /// Content is recursively parsed as nested markup.
    pub container: bool,
    /// Content is taken verbatim; nested tags are not interpreted.
    pub verbatim: bool,
    /// Style properties this tag contributes, camelCase keys.
    pub styles: &'static [(&'static str, &'static str)],
    /// Supplied variable name to output attribute name, in resolution order.
    pub bindings: &'static [(&'static str, &'static str)],
}

/// One entry of the active tag stack: a tag currently open at the scan
/// position, together with the variables supplied on its opening bracket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenTag {
    pub name: String,
    pub descriptor: &'static TagDescriptor,
    pub variables: Vec<(String, String)>,
}

impl OpenTag {
    /// The value supplied for a variable on this tag, if any. Keys were
    /// lowercased by the tokenizer.
    pub fn variable(&self, key: &str) -> Option<&str> {
        self.variables
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether this tag was opened with an explicit no-markup marker
    /// variable, as opposed to being a verbatim tag by descriptor.
    pub fn has_suppression_marker(&self) -> bool {
        self.variables
            .iter()
            .any(|(key, _)| key == "nomarkup" || key == "notags")
    }

    /// Whether the content of this tag must not be interpreted as markup,
    /// for either reason.
    pub fn suppresses_markup(&self) -> bool {
        self.descriptor
            .verbatim
            || self.has_suppression_marker()
    }
}

/// A maximal run of text sharing one active tag stack. Consecutive segments
/// partition the non-markup text of the parsed range; a segment carrying
/// children holds a container tag's recursively parsed content and its own
/// text is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    /// Snapshot of the active tag stack at this point, outermost first.
    pub tags: Vec<OpenTag>,
    pub children: Vec<Segment>,
}

/// A renderable element descriptor: the unit the host renderer materializes.
/// Immutable once synthesized. Maps are ordered so serialized output is
/// deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderableNode {
    pub element: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub style: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RenderableNode>,
}

impl RenderableNode {
    pub fn new(element: &str, text: &str) -> RenderableNode {
        RenderableNode {
            element: element.to_string(),
            text: text.to_string(),
            style: BTreeMap::new(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }
}

/// A hard failure. Only raised when a strict-mode diagnostics sink escalates
/// an error-class report; the default sink recovers from everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupError {
    pub problem: String,
}

impl fmt::Display for MarkupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.problem)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingError<'i> {
    pub problem: String,
    pub details: String,
    pub filename: &'i Path,
}

impl<'i> fmt::Display for LoadingError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.problem, self.details)
    }
}
