//! The node synthesizer: segments plus their active tag stacks become
//! renderable element descriptors.

use std::collections::BTreeMap;

use crate::language::diagnostics::Diagnostics;
use crate::language::fonts::{FontCatalog, GENERIC_FAMILIES};
use crate::language::{MarkupError, OpenTag, RenderableNode, Segment};
use crate::rendering::color::normalize_color;

pub struct Synthesizer<'c> {
    diagnostics: &'c mut Diagnostics,
    catalog: Option<&'c dyn FontCatalog>,
}

impl<'c> Synthesizer<'c> {
    pub fn new(
        diagnostics: &'c mut Diagnostics,
        catalog: Option<&'c dyn FontCatalog>,
    ) -> Synthesizer<'c> {
        Synthesizer {
            diagnostics,
            catalog,
        }
    }

    /// Synthesize one node per segment, recursing into container children.
    pub fn synthesize_tree(
        &mut self,
        segments: &[Segment],
    ) -> Result<Vec<RenderableNode>, MarkupError> {
        let mut nodes = Vec::with_capacity(segments.len());
        for segment in segments {
            nodes.push(self.synthesize(segment)?);
        }
        Ok(nodes)
    }

    /// Synthesize one segment. Tags apply outermost first: structure always,
    /// bindings and formatting variables until a tag carrying a no-markup
    /// marker shuts variable resolution off for everything inward of it.
    pub fn synthesize(&mut self, segment: &Segment) -> Result<RenderableNode, MarkupError> {
        let mut node = RenderableNode::new("span", &segment.text);

        let mut resolve = true;
        for tag in &segment.tags {
            self.apply_structure(&mut node, tag);
            if resolve {
                self.apply_bindings(&mut node, tag, &segment.text);
                self.apply_variables(&mut node, tag)?;
            }
            if tag.has_suppression_marker() {
                resolve = false;
            }
        }

        // Stray text directly inside a text-suppressing tag is dropped.
        if segment
            .tags
            .last()
            .map(|tag| {
                tag.descriptor
                    .suppresses_text
            })
            .unwrap_or(false)
        {
            node.text
                .clear();
        }

        if !segment
            .children
            .is_empty()
        {
            node.text
                .clear();
            node.children = self.synthesize_tree(&segment.children)?;
        }

        Ok(node)
    }

    fn apply_structure(&mut self, node: &mut RenderableNode, tag: &OpenTag) {
        node.element = tag
            .descriptor
            .element
            .to_string();
        for (key, value) in tag
            .descriptor
            .styles
        {
            merge_style(&mut node.style, key, value);
        }
    }

    /// Bind supplied variables onto output attributes. An internal name left
    /// unbound falls back to the segment text, which is how a hyperlink tag
    /// consumes its own content as the link target.
    fn apply_bindings(&mut self, node: &mut RenderableNode, tag: &OpenTag, fallback: &str) {
        if tag
            .descriptor
            .bindings
            .is_empty()
        {
            return;
        }

        for (external, internal) in tag
            .descriptor
            .bindings
        {
            if let Some(value) = tag.variable(external) {
                node.attributes
                    .insert(internal.to_string(), value.to_string());
            }
        }
        for (_, internal) in tag
            .descriptor
            .bindings
        {
            if !node
                .attributes
                .contains_key(*internal)
            {
                node.attributes
                    .insert(internal.to_string(), fallback.to_string());
            }
        }

        // The external-link marker applies only to resolved http targets.
        let external_link = node
            .attributes
            .get("href")
            .map(|href| href.starts_with("http"))
            .unwrap_or(false);
        if external_link {
            node.attributes
                .insert("target".to_string(), "_blank".to_string());
        }
    }

    /// The global formatting variables, recognized on any tag.
    fn apply_variables(&mut self, node: &mut RenderableNode, tag: &OpenTag) -> Result<(), MarkupError> {
        for (key, value) in &tag.variables {
            match key.as_str() {
                "fg" | "fgcolor" | "color" | "text" => {
                    let hex = normalize_color(value, self.diagnostics);
                    node.style
                        .insert("color".to_string(), format!("#{}", hex));
                }
                "bg" | "bgcolor" | "backgroundcolor" | "highlight" => {
                    let hex = normalize_color(value, self.diagnostics);
                    node.style
                        .insert("backgroundColor".to_string(), format!("#{}", hex));
                }
                "font" | "fontfamily" | "font-family" | "type" => {
                    node.style
                        .insert("fontFamily".to_string(), self.resolve_family(value));
                }
                "size" | "fontsize" => match value.parse::<f64>() {
                    Ok(percent) => {
                        let percent = percent.clamp(10.0, 500.0);
                        node.style
                            .insert("fontSize".to_string(), format!("{}em", percent / 100.0));
                    }
                    Err(_) => {
                        self.diagnostics
                            .error(&format!("font size '{}' is not a number", value))?;
                    }
                },
                _ => {}
            }
        }
        Ok(())
    }

    /// Resolve a font-family value. Generic families pass through bare; a
    /// catalog font is emitted quoted with its generic fallback appended;
    /// anything else is used verbatim.
    fn resolve_family(&self, name: &str) -> String {
        let lowered = name.to_ascii_lowercase();
        if GENERIC_FAMILIES.contains(&lowered.as_str()) {
            return lowered;
        }
        match self
            .catalog
            .and_then(|catalog| catalog.resolve(name))
        {
            Some(font) => format!("\"{}\", {}", font.family, font.generic),
            None => name.to_string(),
        }
    }
}

/// Declared styles accumulate: a key already set gains the new value
/// appended, so [u][s] yields "underline line-through".
fn merge_style(style: &mut BTreeMap<String, String>, key: &str, value: &str) {
    match style.get_mut(key) {
        Some(existing) => {
            existing.push(' ');
            existing.push_str(value);
        }
        None => {
            style.insert(key.to_string(), value.to_string());
        }
    }
}
