//! HTML fragment rendering.
//!
//! Produces an embeddable fragment, not a full page; page chrome and CSS
//! belong to the hosting harness. Style tags become class names and all
//! literal text is escaped, so values from the record can never be
//! interpreted as markup.

use std::fmt::Write;

use crate::doc::{Block, Document, ListLayout, MatrixBlock, Span};

/// Renders a document as an HTML fragment.
///
/// The empty document renders to `""`.
#[must_use]
pub fn render_web(doc: &Document) -> String {
    let mut out = String::new();
    for block in doc.blocks() {
        match block {
            Block::Text(text) => {
                out.push_str("<p>");
                for span in &text.spans {
                    out.push_str(&span_html(span));
                }
                out.push_str("</p>\n");
            }
            Block::List(list) => {
                match list.layout {
                    ListLayout::Compact => out.push_str("<ul class=\"compact\">\n"),
                    ListLayout::Default => out.push_str("<ul>\n"),
                }
                for item in &list.items {
                    out.push_str("<li>");
                    for span in item {
                        out.push_str(&span_html(span));
                    }
                    out.push_str("</li>\n");
                }
                out.push_str("</ul>\n");
            }
            Block::Matrix(matrix) => render_matrix(&mut out, matrix),
        }
    }
    out
}

fn render_matrix(out: &mut String, matrix: &MatrixBlock) {
    let (rows, cols) = matrix.shape();
    out.push_str("<table class=\"matrix\">\n");
    for y in 0..rows {
        out.push_str("<tr>");
        for x in 0..cols {
            let cell = matrix.cell(y, x);
            match &cell.style {
                Some(style) => {
                    let _ = write!(out, "<td class=\"{}\">{}</td>", escape(style), escape(&cell.text));
                }
                None => {
                    let _ = write!(out, "<td>{}</td>", escape(&cell.text));
                }
            }
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</table>\n");
}

fn span_html(span: &Span) -> String {
    // Escape first, then map newlines to explicit breaks; the record's
    // prose keeps its line structure inside the paragraph.
    let text = escape(&span.text).replace('\n', "<br>");
    match &span.style {
        Some(style) => format!("<span class=\"{}\">{text}</span>", escape(style)),
        None => text,
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc::{style, DocumentBuilder};

    #[test]
    fn test_empty_document_renders_empty_string() {
        assert_eq!(render_web(&DocumentBuilder::new().build()), "");
    }

    #[test]
    fn test_text_block_becomes_paragraph() {
        let mut doc = DocumentBuilder::new();
        doc.text(|t| t.plain("hello\n"));
        assert_eq!(render_web(&doc.build()), "<p>hello<br></p>\n");
    }

    #[test]
    fn test_styled_span_carries_class() {
        let mut doc = DocumentBuilder::new();
        doc.text(|t| t.styled("×", style::TILE_VERYWRONG));
        let out = render_web(&doc.build());
        assert!(out.contains("<span class=\"tile verywrong\">×</span>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut doc = DocumentBuilder::new();
        doc.text(|t| t.plain("<script>&\"'"));
        let out = render_web(&doc.build());
        assert!(out.contains("&lt;script&gt;&amp;&quot;&#39;"));
        assert!(!out.contains("<script>"));
    }

    #[test]
    fn test_compact_list_class() {
        let mut doc = DocumentBuilder::new();
        doc.list(ListLayout::Compact, |l| l.item("m = 2"));
        let out = render_web(&doc.build());
        assert!(out.contains("<ul class=\"compact\">"));
        assert!(out.contains("<li>m = 2</li>"));
    }

    #[test]
    fn test_default_list_has_no_class() {
        let mut doc = DocumentBuilder::new();
        doc.list(ListLayout::Default, |l| l.item("a"));
        assert!(render_web(&doc.build()).contains("<ul>\n"));
    }

    #[test]
    fn test_matrix_becomes_table_grid() {
        let mut doc = DocumentBuilder::new();
        doc.matrix(1, 2, |mat| {
            mat.entry(0, 0, "1");
            mat.entry_styled(0, 1, "2", style::VERYWRONG);
        });
        let out = render_web(&doc.build());
        assert!(out.contains("<table class=\"matrix\">"));
        assert!(out.contains("<td>1</td>"));
        assert!(out.contains("<td class=\"verywrong\">2</td>"));
        assert!(out.contains("</table>"));
    }

    #[test]
    fn test_matrix_cell_values_escaped() {
        let mut doc = DocumentBuilder::new();
        doc.matrix(1, 1, |mat| {
            mat.entry(0, 0, "<1>");
        });
        assert!(render_web(&doc.build()).contains("<td>&lt;1&gt;</td>"));
    }
}
