//! Target-independent document model for test-outcome explanations.
//!
//! A [`Document`] is an ordered sequence of blocks: free text, item lists,
//! and two-dimensional matrices of styled cells. The report builder
//! produces one per explanation request and the renderers consume it; the
//! model itself knows nothing about terminals or HTML.
//!
//! Documents are immutable once built. The closed [`Block`] variant set is
//! matched exhaustively by both renderers; no third node kind or renderer
//! is expected to appear independently of this crate.

use serde::{Deserialize, Serialize};

/// Style tags attached to spans and matrix cells.
///
/// Renderers translate these into ANSI sequences or CSS class names.
pub mod style {
    /// A result cell whose value matched the reference.
    pub const CORRECT: &str = "correct";
    /// A result cell whose value was wrong.
    pub const VERYWRONG: &str = "verywrong";
    /// A glyph in the compact correctness pattern marking a correct cell.
    pub const TILE_CORRECT: &str = "tile correct";
    /// A glyph in the compact correctness pattern marking a wrong cell.
    pub const TILE_VERYWRONG: &str = "tile verywrong";
}

/// An inline fragment: a string with an optional style tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    pub style: Option<String>,
}

impl Span {
    /// An unstyled fragment.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: None,
        }
    }

    /// A fragment carrying a named style tag.
    pub fn styled(text: impl Into<String>, style: &str) -> Self {
        Self {
            text: text.into(),
            style: Some(style.to_string()),
        }
    }
}

/// Ordered sequence of inline fragments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlock {
    pub spans: Vec<Span>,
}

/// Layout hint for lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListLayout {
    /// Items packed on consecutive lines.
    Compact,
    /// Items separated by blank lines.
    Default,
}

/// Itemized list; each item is a span sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListBlock {
    pub items: Vec<Vec<Span>>,
    pub layout: ListLayout,
}

/// A fully-populated `rows × cols` grid of styled cells (row-major).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixBlock {
    rows: usize,
    cols: usize,
    cells: Vec<Span>,
}

impl MatrixBlock {
    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the cell at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> &Span {
        &self.cells[row * self.cols + col]
    }
}

/// One presentation node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    Text(TextBlock),
    List(ListBlock),
    Matrix(MatrixBlock),
}

/// An ordered sequence of blocks; the unit handed to a renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    /// The blocks in presentation order.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// True when the document has no blocks at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Accumulates blocks for one document.
///
/// Sub-builders are driven through closures; a text or list block that
/// ends up empty is dropped rather than pushed.
///
/// # Examples
///
/// ```
/// use calificar::doc::{DocumentBuilder, ListLayout};
///
/// let mut doc = DocumentBuilder::new();
/// doc.text(|t| t.plain("hello\n"));
/// doc.list(ListLayout::Compact, |l| l.item("first"));
/// assert_eq!(doc.build().blocks().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    blocks: Vec<Block>,
}

impl DocumentBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a text block.
    pub fn text(&mut self, f: impl FnOnce(&mut TextBuilder)) {
        let mut builder = TextBuilder::default();
        f(&mut builder);
        if !builder.spans.is_empty() {
            self.blocks.push(Block::Text(TextBlock {
                spans: builder.spans,
            }));
        }
    }

    /// Appends a list block with the given layout hint.
    pub fn list(&mut self, layout: ListLayout, f: impl FnOnce(&mut ListBuilder)) {
        let mut builder = ListBuilder::default();
        f(&mut builder);
        if !builder.items.is_empty() {
            self.blocks.push(Block::List(ListBlock {
                items: builder.items,
                layout,
            }));
        }
    }

    /// Appends a `rows × cols` matrix block.
    ///
    /// The closure must populate every coordinate in
    /// `[0, rows) × [0, cols)`; unfilled cells become empty spans (and
    /// trip a debug assertion).
    pub fn matrix(&mut self, rows: usize, cols: usize, f: impl FnOnce(&mut MatrixBuilder)) {
        let mut builder = MatrixBuilder {
            rows,
            cols,
            cells: vec![None; rows * cols],
        };
        f(&mut builder);
        debug_assert!(
            builder.cells.iter().all(Option::is_some),
            "matrix block left cells unpopulated"
        );
        let cells = builder
            .cells
            .into_iter()
            .map(|cell| cell.unwrap_or_else(|| Span::plain("")))
            .collect();
        self.blocks.push(Block::Matrix(MatrixBlock { rows, cols, cells }));
    }

    /// Finalizes the document.
    #[must_use]
    pub fn build(self) -> Document {
        Document {
            blocks: self.blocks,
        }
    }
}

/// Builds one text block.
#[derive(Debug, Default)]
pub struct TextBuilder {
    spans: Vec<Span>,
}

impl TextBuilder {
    /// Appends an unstyled fragment.
    pub fn plain(&mut self, text: impl Into<String>) {
        self.spans.push(Span::plain(text));
    }

    /// Appends a styled fragment.
    pub fn styled(&mut self, text: impl Into<String>, style: &str) {
        self.spans.push(Span::styled(text, style));
    }
}

/// Builds one list block.
#[derive(Debug, Default)]
pub struct ListBuilder {
    items: Vec<Vec<Span>>,
}

impl ListBuilder {
    /// Appends a plain-text item.
    pub fn item(&mut self, text: impl Into<String>) {
        self.items.push(vec![Span::plain(text)]);
    }

    /// Appends an item built from pre-styled fragments.
    pub fn item_spans(&mut self, spans: Vec<Span>) {
        self.items.push(spans);
    }
}

/// Builds one matrix block.
#[derive(Debug)]
pub struct MatrixBuilder {
    rows: usize,
    cols: usize,
    cells: Vec<Option<Span>>,
}

impl MatrixBuilder {
    /// Sets the cell at (row, col) to an unstyled value.
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    pub fn entry(&mut self, row: usize, col: usize, text: impl Into<String>) {
        assert!(row < self.rows && col < self.cols);
        self.cells[row * self.cols + col] = Some(Span::plain(text));
    }

    /// Sets the cell at (row, col) to a styled value.
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    pub fn entry_styled(&mut self, row: usize, col: usize, text: impl Into<String>, style: &str) {
        assert!(row < self.rows && col < self.cols);
        self.cells[row * self.cols + col] = Some(Span::styled(text, style));
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
