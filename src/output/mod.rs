//! Output generation for the Brackish CLI.

use serde::Serialize;
use tinytemplate::TinyTemplate;
use tracing::debug;

use crate::language::RenderableNode;

static PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
{body}
</body>
</html>
"#;

#[derive(Serialize)]
struct Context {
    title: String,
    body: String,
}

/// Wrap a rendered HTML fragment in a minimal page shell. The fragment is
/// already escaped, so the template must not escape it again.
pub fn html_page(title: &str, body: &str) -> String {
    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&tinytemplate::format_unescaped);
    tt.add_template("page", PAGE)
        .unwrap();

    let context = Context {
        title: title.to_string(),
        body: body.to_string(),
    };

    let rendered = tt
        .render("page", &context)
        .unwrap();
    debug!("page shell is {} bytes", rendered.len());
    rendered
}

/// Serialize the node tree as pretty-printed JSON.
pub fn json(nodes: &[RenderableNode]) -> String {
    serde_json::to_string_pretty(nodes).expect("node trees always serialize")
}
