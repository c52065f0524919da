//! The markup interpreter: a recursive scanner that partitions input text
//! into segments, each tagged with the stack of markup active at that point.

use crate::language::diagnostics::Diagnostics;
use crate::language::fonts::FontCatalog;
use crate::language::{OpenTag, Segment};
use crate::parsing::shorthand;
use crate::parsing::tokenizer::{scan_tag, ScannedTag};

macro_rules! regex {
    ($pattern:expr) => {{
        use std::sync::OnceLock;
        static REGEX: OnceLock<regex::Regex> = OnceLock::new();
        REGEX.get_or_init(|| regex::Regex::new($pattern).unwrap_or_else(|e| panic!("{}", e)))
    }};
}

/// Nesting ceiling for container tags. Pathological input degrades to flat
/// parsing past this depth instead of exhausting the call stack.
const DEPTH_LIMIT: usize = 64;

pub struct Interpreter<'c> {
    diagnostics: &'c mut Diagnostics,
    catalog: Option<&'c dyn FontCatalog>,
}

impl<'c> Interpreter<'c> {
    pub fn new(
        diagnostics: &'c mut Diagnostics,
        catalog: Option<&'c dyn FontCatalog>,
    ) -> Interpreter<'c> {
        Interpreter {
            diagnostics,
            catalog,
        }
    }

    /// Interpret a whole document. Line breaks are normalized to [br] and
    /// shorthand triggers expanded before scanning begins; the recursive
    /// re-entries made for container tags run neither pre-pass, so already
    /// expanded content is never expanded twice.
    pub fn interpret(&mut self, content: &str) -> Vec<Segment> {
        let re = regex!(r"\r\n|\r|\n");
        let content = re.replace_all(content, "[br]");
        let content = shorthand::expand(&content, self.catalog, self.diagnostics);

        let mut stack: Vec<OpenTag> = Vec::new();
        let (segments, _) = self.walk(&content, 0, &mut stack, None, 0);
        segments
    }

    /// One scanning pass over `text` from `start`. Returns the accumulated
    /// segments and the offset just past the consumed range: past the
    /// matched terminator for a recursive sub-parse, or the end of the text.
    ///
    /// The stack is owned by the outermost call and borrowed down the
    /// recursion; a sub-parse pushes and pops only on behalf of tags it
    /// encounters itself, and closing its terminator restores the depth the
    /// caller expects.
    fn walk(
        &mut self,
        text: &str,
        start: usize,
        stack: &mut Vec<OpenTag>,
        terminator: Option<&str>,
        depth: usize,
    ) -> (Vec<Segment>, usize) {
        let mut segments = Vec::new();
        let mut run = start; // where the current segment's text began
        let mut pos = start; // scan position
        let mut suppressed = false;

        loop {
            let bracket = match text[pos..].find('[') {
                Some(i) => pos + i,
                None => {
                    flush(&mut segments, &text[run..], stack);
                    return (segments, text.len());
                }
            };

            let scanned = scan_tag(text, bracket);

            if suppressed {
                // Verbatim content. The only bracket that means anything
                // here is the closing tag of the suppressing entry at the
                // top of the stack; everything else stays literal.
                match scanned {
                    Some(ScannedTag::Closing { ref name, end })
                        if stack
                            .last()
                            .map(|tag| tag.name.as_str())
                            == Some(name.as_str()) =>
                    {
                        flush(&mut segments, &text[run..bracket], stack);
                        stack.pop();
                        suppressed = false;
                        if terminator == Some(name.as_str()) {
                            return (segments, end);
                        }
                        run = end;
                        pos = end;
                    }
                    _ => pos = bracket + 1,
                }
                continue;
            }

            match scanned {
                None => {
                    // Not a tag. The bracket stays in the running text.
                    pos = bracket + 1;
                }
                Some(ScannedTag::Closing { name, end }) => {
                    match stack
                        .iter()
                        .rposition(|tag| tag.name == name)
                    {
                        Some(index) => {
                            flush(&mut segments, &text[run..bracket], stack);
                            // Closing a tag below the top implicitly closes
                            // everything opened inside it.
                            stack.truncate(index);
                            if terminator == Some(name.as_str()) {
                                return (segments, end);
                            }
                            run = end;
                            pos = end;
                        }
                        None => {
                            // Unmatched closing tag: it stays in the text.
                            pos = end;
                        }
                    }
                }
                Some(ScannedTag::Opening {
                    name,
                    descriptor,
                    variables,
                    end,
                }) => {
                    flush(&mut segments, &text[run..bracket], stack);
                    stack.push(OpenTag {
                        name: name.clone(),
                        descriptor,
                        variables,
                    });
                    run = end;
                    pos = end;

                    let suppressing = stack
                        .last()
                        .map(OpenTag::suppresses_markup)
                        .unwrap_or(false);
                    if suppressing {
                        suppressed = true;
                    } else if descriptor.self_closing {
                        // A point, not a range: emit its segment and pop.
                        segments.push(Segment {
                            text: String::new(),
                            tags: stack.clone(),
                            children: Vec::new(),
                        });
                        stack.pop();
                    } else if descriptor.container {
                        if depth >= DEPTH_LIMIT {
                            self.diagnostics
                                .warning(&format!(
                                    "[{}] nested deeper than {} levels, parsing its content flat",
                                    name, DEPTH_LIMIT
                                ));
                            continue;
                        }
                        let snapshot = stack.clone();
                        let (children, resume) =
                            self.walk(text, end, stack, Some(name.as_str()), depth + 1);
                        if stack.len() >= snapshot.len() {
                            // The sub-parse never found its closing tag and
                            // consumed the rest of the text.
                            self.diagnostics
                                .warning(&format!("[{}] is never closed", name));
                            stack.truncate(snapshot.len() - 1);
                        }
                        segments.push(Segment {
                            text: String::new(),
                            tags: snapshot,
                            children,
                        });
                        run = resume;
                        pos = resume;
                    }
                }
            }
        }
    }
}

/// End the running segment. Empty text runs produce no segment; point tags
/// and containers push their own segments directly.
fn flush(segments: &mut Vec<Segment>, text: &str, stack: &[OpenTag]) {
    if text.is_empty() {
        return;
    }
    segments.push(Segment {
        text: text.to_string(),
        tags: stack.to_vec(),
        children: Vec::new(),
    });
}
