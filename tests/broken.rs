use std::fs;
use std::path::Path;

use brackish::language::diagnostics::Diagnostics;
use brackish::rendering;

/// Adversarial markup must degrade, never halt: every fixture in
/// tests/broken/ has to parse and synthesize without panicking, without
/// error-class diagnostics, and without losing the ability to produce nodes.
#[test]
fn ensure_recovery() {
    let dir = Path::new("tests/broken/");

    assert!(dir.exists(), "broken directory missing");

    let entries = fs::read_dir(dir).expect("Failed to read broken directory");

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.expect("Failed to read directory entry");
        let path = entry.path();

        if path
            .extension()
            .and_then(|s| s.to_str())
            == Some("bk")
        {
            files.push(path);
        }
    }

    assert!(!files.is_empty(), "No .bk files found in broken directory");

    for file in &files {
        let content = fs::read_to_string(file)
            .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

        let mut diagnostics = Diagnostics::new();
        let nodes = rendering::render(&content, None, &mut diagnostics)
            .unwrap_or_else(|e| panic!("File {:?} aborted under the default sink: {}", file, e));

        assert!(
            !nodes.is_empty(),
            "File {:?} produced no output at all",
            file
        );
        assert_eq!(
            diagnostics.errors(),
            0,
            "File {:?} raised error-class diagnostics for malformed markup",
            file
        );
    }
}

/// The original text of a stray closing tag is preserved, character for
/// character, rather than dropped.
#[test]
fn stray_closers_lose_nothing() {
    let mut diagnostics = Diagnostics::new();
    let nodes = rendering::render("hello[/b]world", None, &mut diagnostics).unwrap();

    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].text, "hello[/b]world");
}
