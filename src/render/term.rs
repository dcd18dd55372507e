//! Plain and ANSI-colored terminal rendering.

use std::collections::HashMap;
use std::fmt::Write;

use crate::doc::{Block, Document, ListLayout, MatrixBlock, Span};

mod colors {
    pub const RED_BOLD: &str = "\x1b[31;1m";
    pub const BLUE_BOLD: &str = "\x1b[34;1m";
    pub const RESET: &str = "\x1b[0m";
}

const LIST_INDENT: &str = "  ";

/// Mapping from style tag to a prefix/suffix pair wrapped around styled
/// fragments.
///
/// This is an explicit value passed into [`render_terminal`] at call time,
/// so concurrent or repeated renders never share styling state. Unmapped
/// tags render their text bare.
///
/// # Examples
///
/// ```
/// use calificar::render::StyleMap;
///
/// let mut styles = StyleMap::new();
/// styles.set_format("correct", ">", "<");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StyleMap {
    formats: HashMap<String, (String, String)>,
}

impl StyleMap {
    /// An empty map: styled fragments render as their bare text.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the wrapping pair for one style tag.
    pub fn set_format(&mut self, style: &str, prefix: &str, suffix: &str) {
        self.formats
            .insert(style.to_string(), (prefix.to_string(), suffix.to_string()));
    }

    /// The default color mapping: correct cells blue, wrong cells red.
    #[must_use]
    pub fn ansi() -> Self {
        let mut map = Self::new();
        for style in ["correct", "tile correct"] {
            map.set_format(style, colors::BLUE_BOLD, colors::RESET);
        }
        for style in ["verywrong", "tile verywrong"] {
            map.set_format(style, colors::RED_BOLD, colors::RESET);
        }
        map
    }

    /// The default colorless mapping: wrong cells in brackets, correct
    /// pattern glyphs padded with spaces.
    #[must_use]
    pub fn plain() -> Self {
        let mut map = Self::new();
        map.set_format("tile correct", " ", " ");
        map.set_format("tile verywrong", "[", "]");
        map.set_format("verywrong", "[", "]");
        map
    }

    fn wrap(&self, span: &Span) -> String {
        match span.style.as_deref().and_then(|s| self.formats.get(s)) {
            Some((prefix, suffix)) => format!("{prefix}{}{suffix}", span.text),
            None => span.text.clone(),
        }
    }
}

/// Renders a document as terminal text.
///
/// Styled fragments are wrapped per the style map, list items are indented
/// by two spaces, matrices are laid out as right-aligned space-separated
/// columns. The empty document renders to `""`.
#[must_use]
pub fn render_terminal(doc: &Document, styles: &StyleMap) -> String {
    let mut out = String::new();
    for block in doc.blocks() {
        match block {
            Block::Text(text) => {
                for span in &text.spans {
                    out.push_str(&styles.wrap(span));
                }
            }
            Block::List(list) => {
                for item in &list.items {
                    out.push_str(LIST_INDENT);
                    for span in item {
                        out.push_str(&styles.wrap(span));
                    }
                    out.push('\n');
                    if list.layout == ListLayout::Default {
                        out.push('\n');
                    }
                }
            }
            Block::Matrix(matrix) => render_matrix(&mut out, matrix, styles),
        }
    }
    out
}

fn render_matrix(out: &mut String, matrix: &MatrixBlock, styles: &StyleMap) {
    let (rows, cols) = matrix.shape();
    let widths: Vec<usize> = (0..cols)
        .map(|x| (0..rows).map(|y| matrix.cell(y, x).text.len()).max().unwrap_or(0))
        .collect();
    for y in 0..rows {
        for x in 0..cols {
            if x > 0 {
                out.push(' ');
            }
            let cell = matrix.cell(y, x);
            let padded = format!("{:>width$}", cell.text, width = widths[x]);
            let _ = write!(
                out,
                "{}",
                styles.wrap(&Span {
                    text: padded,
                    style: cell.style.clone(),
                })
            );
        }
        out.push('\n');
    }
}
