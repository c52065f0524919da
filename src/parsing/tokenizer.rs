//! Tokenizer for bracketed tags.
//!
//! Locates and classifies one `[...]` occurrence in raw text. Anything that
//! does not form a well-formed, registered tag is NotATag (`None` here): the
//! interpreter treats the bracket as literal text and keeps scanning from
//! the next position.

use crate::language::registry;
use crate::language::TagDescriptor;

/// A classified tag occurrence. `end` is the byte offset just past the
/// closing `]` in the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScannedTag {
    Opening {
        name: String,
        descriptor: &'static TagDescriptor,
        /// Supplied `key=value` parameters, keys lowercased. Bare keys are
        /// stored with an empty value; that is how marker variables like
        /// `nomarkup` arrive.
        variables: Vec<(String, String)>,
        end: usize,
    },
    Closing {
        name: String,
        end: usize,
    },
}

/// Scan the tag starting at `offset`, which must point at a `[`. Whether a
/// closing tag actually matches anything open is the interpreter's decision,
/// not ours.
pub fn scan_tag(text: &str, offset: usize) -> Option<ScannedTag> {
    debug_assert_eq!(text[offset..].chars().next(), Some('['));

    // Skip whitespace and redundant opening brackets after the `[`.
    let mut start = offset + 1;
    for (i, c) in text[offset + 1..].char_indices() {
        if c == '[' || c.is_whitespace() {
            continue;
        }
        start = offset + 1 + i;
        break;
    }

    if text[start..].starts_with('/') {
        return scan_closing_tag(text, start + 1);
    }
    scan_opening_tag(text, start)
}

fn scan_closing_tag(text: &str, start: usize) -> Option<ScannedTag> {
    let close = text[start..]
        .find(']')
        .map(|i| start + i)?;

    let name = text[start..close]
        .trim()
        .to_ascii_lowercase();

    Some(ScannedTag::Closing {
        name,
        end: close + 1,
    })
}

fn scan_opening_tag(text: &str, start: usize) -> Option<ScannedTag> {
    // Find the closing bracket, skipping over quoted parameter values and
    // backslash escapes.
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut close = None;
    for (i, c) in text[start..].char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '\'' | '"' => match quote {
                None => quote = Some(c),
                Some(q) if q == c => quote = None,
                Some(_) => {}
            },
            ']' if quote.is_none() => {
                close = Some(start + i);
                break;
            }
            _ => {}
        }
    }

    // Unterminated tag: reached end of text before `]`.
    let close = close?;

    let mut tokens = split_parameters(&text[start..close]);
    if tokens.is_empty() {
        return None;
    }

    // The first token names the tag, possibly carrying a value of its own:
    // [color=f00] supplies the variable color=f00 on the tag named color.
    let first = tokens.remove(0);
    let (name, value) = match first.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (first.as_str(), None),
    };
    let name = name
        .trim()
        .to_ascii_lowercase();
    let descriptor = registry::lookup(&name)?;

    let mut variables = Vec::new();
    if let Some(value) = value {
        variables.push((name.clone(), unquote(value)));
    }
    for token in &tokens {
        match token.split_once('=') {
            Some((key, value)) => {
                variables.push((key.to_ascii_lowercase(), unquote(value)));
            }
            None => {
                variables.push((token.to_ascii_lowercase(), String::new()));
            }
        }
    }

    Some(ScannedTag::Opening {
        name,
        descriptor,
        variables,
        end: close + 1,
    })
}

/// Split a tag's interior on unquoted whitespace. Quote characters and
/// escapes are preserved for unquote() to resolve.
fn split_parameters(raw: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for c in raw.chars() {
        if escaped {
            current.push('\\');
            current.push(c);
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '\'' | '"' => {
                match quote {
                    None => quote = Some(c),
                    Some(q) if q == c => quote = None,
                    Some(_) => {}
                }
                current.push(c);
            }
            c if c.is_whitespace() && quote.is_none() => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(c),
        }
    }
    if escaped {
        current.push('\\');
    }
    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

/// Strip a matching pair of surrounding quotes, then resolve backslash
/// escapes. A trailing quote preceded by a backslash is content, not a
/// delimiter, so `"abc\"` stays unterminated and keeps its quotes.
fn unquote(value: &str) -> String {
    let value = value.trim();
    let mut inner = value;

    if value.len() >= 2 {
        let open = value
            .chars()
            .next()
            .unwrap();
        if (open == '\'' || open == '"')
            && value.ends_with(open)
            && !value[..value.len() - 1].ends_with('\\')
        {
            inner = &value[1..value.len() - 1];
        }
    }

    let mut output = String::with_capacity(inner.len());
    let mut escaped = false;
    for c in inner.chars() {
        if escaped {
            output.push(c);
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else {
            output.push(c);
        }
    }
    if escaped {
        output.push('\\');
    }

    output
}
