//! Markup-to-preview projection with comrak.

use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::{Arena, Options, parse_document};

use super::{InlineMarks, LineKind, PreviewLine, PreviewSpan};

/// Render serialized markup into preview lines.
///
/// Never fails: arbitrary input parses as some Markdown document. Empty
/// markup yields no lines; the view layer shows the empty-entry
/// placeholder in that case.
pub fn render_markup(markup: &str) -> Vec<PreviewLine> {
    let arena = Arena::new();
    let root = parse_document(&arena, markup, &Options::default());

    let mut lines = Vec::new();
    for block in root.children() {
        render_block(block, &mut lines);
        lines.push(PreviewLine::blank());
    }
    // Drop the spacer after the final block.
    while lines.last().is_some_and(|l| l.kind == LineKind::Blank) {
        lines.pop();
    }
    lines
}

fn render_block<'a>(node: &'a AstNode<'a>, lines: &mut Vec<PreviewLine>) {
    match &node.data.borrow().value {
        NodeValue::Heading(heading) => {
            lines.push(PreviewLine::new(
                LineKind::Heading(heading.level),
                collect_inline_spans(node),
            ));
        }
        NodeValue::Paragraph => {
            lines.push(PreviewLine::new(
                LineKind::Paragraph,
                collect_inline_spans(node),
            ));
        }
        NodeValue::List(list) => {
            let ordered = list.list_type == ListType::Ordered;
            let mut index = list.start;
            for item in node.children() {
                let marker = if ordered {
                    let m = format!("{index}. ");
                    index += 1;
                    m
                } else {
                    "• ".to_string()
                };
                let mut spans = vec![PreviewSpan::plain(marker)];
                spans.extend(collect_inline_spans(item));
                lines.push(PreviewLine::new(LineKind::ListItem, spans));
            }
        }
        NodeValue::BlockQuote => {
            for child in node.children() {
                let mut spans = vec![PreviewSpan::plain("▌ ")];
                spans.extend(collect_inline_spans(child));
                lines.push(PreviewLine::new(LineKind::Quote, spans));
            }
        }
        NodeValue::CodeBlock(code_block) => {
            for line in code_block.literal.trim_end_matches('\n').split('\n') {
                lines.push(PreviewLine::new(
                    LineKind::CodeBlock,
                    vec![PreviewSpan::plain(line)],
                ));
            }
        }
        NodeValue::ThematicBreak => {
            lines.push(PreviewLine::new(
                LineKind::Rule,
                vec![PreviewSpan::plain("────────")],
            ));
        }
        _ => {
            // Anything else (raw HTML, unknown blocks) renders as plain text.
            let text = extract_text(node);
            if !text.is_empty() {
                lines.push(PreviewLine::new(
                    LineKind::Paragraph,
                    vec![PreviewSpan::plain(text)],
                ));
            }
        }
    }
}

fn collect_inline_spans<'a>(node: &'a AstNode<'a>) -> Vec<PreviewSpan> {
    let mut spans = Vec::new();
    collect_inline_recursive(node, InlineMarks::default(), &mut spans);
    spans
}

fn collect_inline_recursive<'a>(
    node: &'a AstNode<'a>,
    marks: InlineMarks,
    spans: &mut Vec<PreviewSpan>,
) {
    match &node.data.borrow().value {
        // Nested lists are rendered by their own item pass.
        NodeValue::List(_) => {}
        NodeValue::Text(t) => {
            spans.push(PreviewSpan::new(t.clone(), marks));
        }
        NodeValue::Code(code) => {
            let mut code_marks = marks;
            code_marks.code = true;
            spans.push(PreviewSpan::new(code.literal.clone(), code_marks));
        }
        NodeValue::Emph => {
            let mut next = marks;
            next.emphasis = true;
            for child in node.children() {
                collect_inline_recursive(child, next, spans);
            }
        }
        NodeValue::Strong => {
            let mut next = marks;
            next.strong = true;
            for child in node.children() {
                collect_inline_recursive(child, next, spans);
            }
        }
        NodeValue::SoftBreak | NodeValue::LineBreak => {
            spans.push(PreviewSpan::new(" ", marks));
        }
        _ => {
            for child in node.children() {
                collect_inline_recursive(child, marks, spans);
            }
        }
    }
}

fn extract_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    extract_text_recursive(node, &mut text);
    text
}

fn extract_text_recursive<'a>(node: &'a AstNode<'a>, out: &mut String) {
    match &node.data.borrow().value {
        NodeValue::Text(t) => out.push_str(t),
        NodeValue::Code(code) => out.push_str(&code.literal),
        NodeValue::SoftBreak | NodeValue::LineBreak => out.push(' '),
        NodeValue::HtmlBlock(html) => out.push_str(html.literal.trim_end()),
        NodeValue::HtmlInline(html) => out.push_str(html),
        _ => {
            for child in node.children() {
                extract_text_recursive(child, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_markup_renders_no_lines() {
        assert!(render_markup("").is_empty());
    }

    #[test]
    fn test_heading_keeps_level() {
        let lines = render_markup("## Tuesday");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].kind, LineKind::Heading(2));
        assert_eq!(lines[0].text(), "Tuesday");
    }

    #[test]
    fn test_paragraph_inline_marks() {
        let lines = render_markup("plain **bold** and *soft* and `code`");
        assert_eq!(lines[0].kind, LineKind::Paragraph);
        let bold = lines[0].spans.iter().find(|s| s.text == "bold").unwrap();
        assert!(bold.marks.strong);
        let soft = lines[0].spans.iter().find(|s| s.text == "soft").unwrap();
        assert!(soft.marks.emphasis);
        let code = lines[0].spans.iter().find(|s| s.text == "code").unwrap();
        assert!(code.marks.code);
    }

    #[test]
    fn test_blocks_are_separated_by_blank_lines() {
        let lines = render_markup("# Title\n\nBody text.");
        let kinds: Vec<_> = lines.iter().map(|l| l.kind).collect();
        assert_eq!(
            kinds,
            [LineKind::Heading(1), LineKind::Blank, LineKind::Paragraph]
        );
    }

    #[test]
    fn test_bullet_list_items() {
        let lines = render_markup("- tea\n- toast");
        let items: Vec<_> = lines
            .iter()
            .filter(|l| l.kind == LineKind::ListItem)
            .map(super::super::PreviewLine::text)
            .collect();
        assert_eq!(items, ["• tea", "• toast"]);
    }

    #[test]
    fn test_ordered_list_numbers_from_start() {
        let lines = render_markup("3. third\n4. fourth");
        let items: Vec<_> = lines
            .iter()
            .filter(|l| l.kind == LineKind::ListItem)
            .map(super::super::PreviewLine::text)
            .collect();
        assert_eq!(items, ["3. third", "4. fourth"]);
    }

    #[test]
    fn test_block_quote_prefix() {
        let lines = render_markup("> remember this");
        assert_eq!(lines[0].kind, LineKind::Quote);
        assert_eq!(lines[0].text(), "▌ remember this");
    }

    #[test]
    fn test_code_block_lines_kept_verbatim() {
        let lines = render_markup("```\nlet x = 1;\nlet y = 2;\n```");
        let code: Vec<_> = lines
            .iter()
            .filter(|l| l.kind == LineKind::CodeBlock)
            .map(super::super::PreviewLine::text)
            .collect();
        assert_eq!(code, ["let x = 1;", "let y = 2;"]);
    }

    #[test]
    fn test_thematic_break_renders_rule() {
        let lines = render_markup("before\n\n---\n\nafter");
        assert!(lines.iter().any(|l| l.kind == LineKind::Rule));
    }

    #[test]
    fn test_malformed_markup_never_panics() {
        // Unterminated constructs are passed through unvalidated.
        let lines = render_markup("**open [broken](  \n``` \n<div>");
        assert!(!lines.is_empty());
    }

    #[test]
    fn test_softbreak_becomes_space() {
        let lines = render_markup("first\nsecond");
        assert_eq!(lines[0].text(), "first second");
    }
}
