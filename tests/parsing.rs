#[cfg(test)]
mod verify {
    use brackish::language::diagnostics::Diagnostics;
    use brackish::language::fonts::StaticFontCatalog;
    use brackish::language::{registry, Segment};
    use brackish::parsing;

    fn parse(content: &str) -> Vec<Segment> {
        let mut diagnostics = Diagnostics::new();
        parsing::parse(content, None, &mut diagnostics)
    }

    /// Collapse segments into (text, active tag names) pairs.
    fn shape(segments: &[Segment]) -> Vec<(String, Vec<String>)> {
        segments
            .iter()
            .map(|segment| {
                (
                    segment
                        .text
                        .clone(),
                    segment
                        .tags
                        .iter()
                        .map(|tag| {
                            tag.name
                                .clone()
                        })
                        .collect(),
                )
            })
            .collect()
    }

    fn pairs(entries: &[(&str, &[&str])]) -> Vec<(String, Vec<String>)> {
        entries
            .iter()
            .map(|(text, tags)| {
                (
                    text.to_string(),
                    tags.iter()
                        .map(|tag| tag.to_string())
                        .collect(),
                )
            })
            .collect()
    }

    /// Walk every segment, including container children, collecting text.
    fn collect_text(segments: &[Segment], output: &mut String) {
        for segment in segments {
            output.push_str(&segment.text);
            collect_text(&segment.children, output);
        }
    }

    #[test]
    fn registry_table_is_descending_and_prefix_safe() {
        let descriptors = registry::descriptors();
        for pair in descriptors.windows(2) {
            assert!(pair[0].name > pair[1].name);
        }
        // the longer name must come first wherever one name prefixes another
        let u = descriptors
            .iter()
            .position(|d| d.name == "u")
            .unwrap();
        let url = descriptors
            .iter()
            .position(|d| d.name == "url")
            .unwrap();
        assert!(url < u);
    }

    #[test]
    fn simple_range() {
        let segments = parse("[b]hi[/b]");
        assert_eq!(shape(&segments), pairs(&[("hi", &["b"])]));
    }

    #[test]
    fn unregistered_tag_name_is_literal_text() {
        let segments = parse("[fg=f00]red[/fg]");
        assert_eq!(shape(&segments), pairs(&[("[fg=f00]red[/fg]", &[])]));
    }

    #[test]
    fn unmatched_closing_tag_is_literal_text() {
        let segments = parse("hello[/b]world");
        assert_eq!(shape(&segments), pairs(&[("hello[/b]world", &[])]));
    }

    #[test]
    fn nested_same_tag_produces_three_segments() {
        let segments = parse("[b]a[b]b[/b]c[/b]");
        assert_eq!(
            shape(&segments),
            pairs(&[("a", &["b"]), ("b", &["b", "b"]), ("c", &["b"])])
        );
    }

    #[test]
    fn verbatim_code_is_one_uninterpreted_segment() {
        let segments = parse("[code]<b>not markup</b>[/code]");
        assert_eq!(
            shape(&segments),
            pairs(&[("<b>not markup</b>", &["code"])])
        );
    }

    #[test]
    fn nomarkup_tag_keeps_brackets_verbatim() {
        let segments = parse("[nomarkup][b]x[/b][/nomarkup]");
        assert_eq!(shape(&segments), pairs(&[("[b]x[/b]", &["nomarkup"])]));
    }

    #[test]
    fn headings_are_containers() {
        let segments = parse("[h1]title[/h1]rest");

        assert_eq!(segments.len(), 2);
        assert_eq!(
            shape(&segments[0].children),
            pairs(&[("title", &["h1"])])
        );
        assert_eq!(segments[1].text, "rest");
    }

    #[test]
    fn quote_blocks_nest_recursively() {
        let segments = parse("[quote]a[quote]b[/quote][/quote]");

        assert_eq!(segments.len(), 1);
        let outer = &segments[0].children;
        assert_eq!(outer[0].text, "a");
        assert_eq!(
            shape(&outer[1].children),
            pairs(&[("b", &["quote", "quote"])])
        );
    }

    #[test]
    fn segments_partition_all_literal_text() {
        let content = "a[b]b[i]c[/i]d[/b]e[center]f[/center]g";
        let segments = parse(content);

        let mut collected = String::new();
        collect_text(&segments, &mut collected);
        assert_eq!(collected, "abcdefg");
    }

    #[test]
    fn newlines_inside_verbatim_content_stay_literal() {
        // line breaks normalize to [br] before scanning, so a verbatim body
        // shows the normalized marker rather than interpreting it
        let segments = parse("[code]a\nb[/code]");
        assert_eq!(shape(&segments), pairs(&[("a[br]b", &["code"])]));
    }

    #[test]
    fn shorthand_expands_once_and_only_once() {
        let catalog = StaticFontCatalog::new().register("Pictoglyph", "sans-serif");
        let mut diagnostics = Diagnostics::new();
        let segments = parsing::parse("hi [:)]", Some(&catalog), &mut diagnostics);

        assert_eq!(
            shape(&segments),
            pairs(&[("hi ", &[]), ("☺", &["font"])])
        );
        assert_eq!(
            segments[1]
                .tags[0]
                .variable("font"),
            Some("Pictoglyph")
        );
        assert_eq!(diagnostics.warnings(), 0);
    }

    #[test]
    fn shorthand_without_catalog_is_inert() {
        let segments = parse("hi [:)]");
        assert_eq!(shape(&segments), pairs(&[("hi [:)]", &[])]));
    }

    #[test]
    fn quoted_parameters_may_contain_brackets() {
        let segments = parse("[url href=\"a ] b\"]x[/url]");

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text, "x");
        assert_eq!(
            segments[0]
                .tags[0]
                .variable("href"),
            Some("a ] b")
        );
    }

    #[test]
    fn case_of_tag_names_never_matters() {
        let segments = parse("[B]x[/b]");
        assert_eq!(shape(&segments), pairs(&[("x", &["b"])]));

        let segments = parse("[b]x[/B]");
        assert_eq!(shape(&segments), pairs(&[("x", &["b"])]));
    }
}
