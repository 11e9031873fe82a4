//! Markdown segmentation for the knowledge-base views.
//!
//! Parsing is delegated to `pulldown-cmark`; this module only decides where
//! a document switches between ordinary markdown and embedded diagram
//! notation. Fenced code blocks tagged `mermaid` become [`Segment::Diagram`]
//! carrying the raw source for the diagram renderer; everything else is
//! rendered to HTML in place.

use pulldown_cmark::{html, CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

/// One run of a segmented markdown document, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Rendered HTML for a run of ordinary markdown.
    Html(String),
    /// Raw source of a `mermaid` fenced block.
    Diagram(String),
}

fn is_mermaid_fence(info: &str) -> bool {
    info.split_whitespace().next() == Some("mermaid")
}

/// Split `source` into HTML runs and diagram blocks.
///
/// Non-mermaid fences stay inside the surrounding HTML run; an empty
/// document yields no segments.
pub fn segment_markdown(source: &str) -> Vec<Segment> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut segments = Vec::new();
    let mut pending: Vec<Event> = Vec::new();
    let mut diagram: Option<String> = None;

    for event in Parser::new_ext(source, options) {
        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(ref info)))
                if is_mermaid_fence(info) =>
            {
                flush_html(&mut segments, &mut pending);
                diagram = Some(String::new());
            }
            Event::End(TagEnd::CodeBlock) if diagram.is_some() => {
                let text = diagram.take().unwrap_or_default();
                segments.push(Segment::Diagram(text.trim_end().to_string()));
            }
            Event::Text(ref text) if diagram.is_some() => {
                if let Some(buf) = diagram.as_mut() {
                    buf.push_str(text);
                }
            }
            other => pending.push(other),
        }
    }
    flush_html(&mut segments, &mut pending);
    segments
}

fn flush_html(segments: &mut Vec<Segment>, pending: &mut Vec<Event>) {
    if pending.is_empty() {
        return;
    }
    let mut out = String::new();
    html::push_html(&mut out, pending.drain(..));
    if !out.trim().is_empty() {
        segments.push(Segment::Html(out));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_no_segments() {
        assert!(segment_markdown("").is_empty());
    }

    #[test]
    fn plain_markdown_is_one_html_segment() {
        let segments = segment_markdown("# Title\n\nSome *emphasis*.");
        assert_eq!(segments.len(), 1);
        let Segment::Html(html) = &segments[0] else {
            panic!("expected html segment");
        };
        assert!(html.contains("<h1>"));
        assert!(html.contains("<em>emphasis</em>"));
    }

    #[test]
    fn mermaid_fence_becomes_diagram_segment() {
        let source = "Intro\n\n```mermaid\ngraph TD\n  A --> B\n```\n\nOutro";
        let segments = segment_markdown(source);
        assert_eq!(segments.len(), 3);
        assert!(matches!(&segments[0], Segment::Html(h) if h.contains("Intro")));
        assert_eq!(
            segments[1],
            Segment::Diagram("graph TD\n  A --> B".to_string())
        );
        assert!(matches!(&segments[2], Segment::Html(h) if h.contains("Outro")));
    }

    #[test]
    fn non_mermaid_fence_stays_in_html() {
        let source = "```rust\nfn main() {}\n```";
        let segments = segment_markdown(source);
        assert_eq!(segments.len(), 1);
        let Segment::Html(html) = &segments[0] else {
            panic!("expected html segment");
        };
        assert!(html.contains("<code"));
        assert!(html.contains("fn main()"));
    }

    #[test]
    fn document_starting_with_diagram_keeps_order() {
        let source = "```mermaid\nflowchart LR\n```\ntail";
        let segments = segment_markdown(source);
        assert_eq!(segments.len(), 2);
        assert!(matches!(&segments[0], Segment::Diagram(_)));
        assert!(matches!(&segments[1], Segment::Html(_)));
    }

    #[test]
    fn multiple_diagrams_each_get_a_segment() {
        let source = "```mermaid\na\n```\n\nmiddle\n\n```mermaid\nb\n```";
        let segments = segment_markdown(source);
        let diagrams: Vec<_> = segments
            .iter()
            .filter(|s| matches!(s, Segment::Diagram(_)))
            .collect();
        assert_eq!(diagrams.len(), 2);
    }

    #[test]
    fn fence_info_with_attributes_still_matches() {
        let source = "```mermaid theme=dark\ngraph TD\n```";
        let segments = segment_markdown(source);
        assert!(matches!(&segments[0], Segment::Diagram(_)));
    }

    #[test]
    fn table_markdown_renders_as_html() {
        let source = "| a | b |\n|---|---|\n| 1 | 2 |";
        let segments = segment_markdown(source);
        assert_eq!(segments.len(), 1);
        assert!(matches!(&segments[0], Segment::Html(h) if h.contains("<table>")));
    }
}
