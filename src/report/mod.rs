//! Builds explanation documents from parsed records.
//!
//! The builder walks a [`TestRecord`] and emits a [`Document`] describing
//! what happened in the test case. Every optional field that is absent
//! simply shrinks the document; the builder itself never fails, down to a
//! record carrying nothing but a status line (which yields an empty
//! document).

use crate::doc::{style, Document, DocumentBuilder, ListLayout, Span};
use crate::record::{IntMatrix, TestRecord};

/// Which host will render the resulting document.
///
/// The one target-dependent decision lives in the locations-only branch: a
/// terminal gets a dense glyph grid as text lines, the web gets a real
/// matrix block. Everything else is target-independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderTarget {
    Terminal,
    Web,
}

/// Glyph marking a correct cell in the compact correctness pattern.
pub const GLYPH_CORRECT: &str = "·";

/// Glyph marking a wrong cell in the compact correctness pattern.
pub const GLYPH_WRONG: &str = "×";

const PROBABILISTIC_NOTE: &str =
    "The probabilistic tests determined that there is an error in your result.";

/// Builds the explanation document for one test case.
#[must_use]
pub fn explain(record: &TestRecord, target: RenderTarget) -> Document {
    let mut doc = DocumentBuilder::new();
    let input = &record.input;

    let (Some(m), Some(n), Some(k)) = (input.m, input.n, input.k) else {
        // Without dimensions no matrix can be laid out; the only thing
        // worth saying is that a probabilistic check flagged an error.
        if record.output_errors.locations.is_some() {
            doc.text(|t| t.plain(PROBABILISTIC_NOTE));
        }
        return doc.build();
    };

    doc.text(|t| t.plain("In this test I called your function with the following parameters:\n"));
    doc.list(ListLayout::Compact, |l| {
        l.item(format!("m = {m}"));
        l.item(format!("n = {n}"));
        l.item(format!("k = {k}"));
        if let Some(tile) = input.tile_size {
            l.item(format!("tile size = {tile}"));
        }
    });

    // Tiled records report block matrices: rescale the iteration bounds,
    // never the cell values.
    let tile = input.tile_size.filter(|t| *t > 0);
    let (m, n, k) = match tile {
        Some(t) => (m / t, n / t, k / t),
        None => (m, n, k),
    };
    let (m, n, k) = (bound(m), bound(n), bound(k));

    if let (Some(a), Some(b)) = (&input.input_a, &input.input_b) {
        if let Some(t) = tile {
            doc.text(|txt| {
                txt.plain(format!(
                    "The input consisted of block matrices with blocks of size {t} × {t}.\n"
                ));
                txt.plain(format!(
                    "Each number below indicates an entire {t} × {t} submatrix with constant coefficients.\n"
                ));
                txt.plain(format!("Outputs have been divided by {t}.\n\n"));
            });
        }

        doc.text(|t| t.plain("This is what the input data looked like:\n"));

        doc.list(ListLayout::Compact, |l| l.item("A"));
        doc.matrix(m, k, |mat| {
            for y in 0..m {
                for x in 0..k {
                    mat.entry(y, x, cell_text(a, y, x));
                }
            }
        });

        doc.list(ListLayout::Compact, |l| l.item("B"));
        doc.matrix(k, n, |mat| {
            for y in 0..k {
                for x in 0..n {
                    mat.entry(y, x, cell_text(b, y, x));
                }
            }
        });
    }

    let locations = record.output_errors.locations.as_ref();
    if let Some(result) = &record.output.result {
        doc.text(|t| t.plain("This is the output that I got back:\n"));
        doc.matrix(m, n, |mat| {
            for y in 0..m {
                for x in 0..n {
                    let value = cell_text(result, y, x);
                    match locations {
                        Some(loc) if loc.get_checked(y, x) == Some(0) => {
                            mat.entry_styled(y, x, value, style::CORRECT);
                        }
                        Some(_) => mat.entry_styled(y, x, value, style::VERYWRONG),
                        None => mat.entry(y, x, value),
                    }
                }
            }
        });
        if locations.is_some() {
            doc.text(|t| t.plain("Above I have highlighted the cells that contain wrong values\n"));
        }
    } else if let Some(loc) = locations {
        doc.text(|t| {
            t.plain("This is the pattern of correct and incorrect results I got back:\n");
        });
        match target {
            RenderTarget::Web => {
                doc.matrix(m, n, |mat| {
                    for y in 0..m {
                        for x in 0..n {
                            if loc.get_checked(y, x) == Some(0) {
                                mat.entry_styled(y, x, GLYPH_CORRECT, style::CORRECT);
                            } else {
                                mat.entry_styled(y, x, GLYPH_WRONG, style::VERYWRONG);
                            }
                        }
                    }
                });
            }
            RenderTarget::Terminal => {
                // A terminal cannot lay out per-cell markup as compactly as
                // a dense glyph grid: one line per row, space-joined.
                doc.text(|t| {
                    for y in 0..m {
                        for x in 0..n {
                            if x > 0 {
                                t.plain(" ");
                            }
                            if loc.get_checked(y, x) == Some(0) {
                                t.styled(GLYPH_CORRECT, style::TILE_CORRECT);
                            } else {
                                t.styled(GLYPH_WRONG, style::TILE_VERYWRONG);
                            }
                        }
                        t.plain("\n");
                    }
                });
            }
        }
        doc.text(|t| t.plain("Above I have highlighted the cells as follows:\n"));
        doc.list(ListLayout::Compact, |l| {
            l.item_spans(vec![
                Span::styled(GLYPH_CORRECT, style::TILE_CORRECT),
                Span::plain(" — correct result"),
            ]);
            l.item_spans(vec![
                Span::styled(GLYPH_WRONG, style::TILE_VERYWRONG),
                Span::plain(" — wrong result"),
            ]);
        });
    } else {
        doc.text(|t| t.plain(PROBABILISTIC_NOTE));
    }

    doc.build()
}

/// An iteration bound: a non-positive reported dimension iterates zero
/// cells instead of failing the whole explanation.
fn bound(dim: i64) -> usize {
    usize::try_from(dim).unwrap_or(0)
}

/// Renders a cell value, degrading to `?` when the record reported
/// dimensions larger than the matrix it actually carried.
fn cell_text(matrix: &IntMatrix, row: usize, col: usize) -> String {
    match matrix.get_checked(row, col) {
        Some(value) => value.to_string(),
        None => "?".to_string(),
    }
}
