use super::*;

#[test]
fn test_empty_builder_gives_empty_document() {
    let doc = DocumentBuilder::new().build();
    assert!(doc.is_empty());
    assert!(doc.blocks().is_empty());
}

#[test]
fn test_empty_text_block_is_dropped() {
    let mut doc = DocumentBuilder::new();
    doc.text(|_| {});
    assert!(doc.build().is_empty());
}

#[test]
fn test_empty_list_block_is_dropped() {
    let mut doc = DocumentBuilder::new();
    doc.list(ListLayout::Compact, |_| {});
    assert!(doc.build().is_empty());
}

#[test]
fn test_text_block_keeps_span_order() {
    let mut doc = DocumentBuilder::new();
    doc.text(|t| {
        t.plain("a");
        t.styled("b", style::CORRECT);
        t.plain("c");
    });
    let doc = doc.build();
    let Block::Text(text) = &doc.blocks()[0] else {
        panic!("expected text block");
    };
    assert_eq!(text.spans.len(), 3);
    assert_eq!(text.spans[0], Span::plain("a"));
    assert_eq!(text.spans[1], Span::styled("b", style::CORRECT));
}

#[test]
fn test_list_block_items() {
    let mut doc = DocumentBuilder::new();
    doc.list(ListLayout::Compact, |l| {
        l.item("m = 2");
        l.item_spans(vec![
            Span::styled("·", style::TILE_CORRECT),
            Span::plain(" — correct result"),
        ]);
    });
    let doc = doc.build();
    let Block::List(list) = &doc.blocks()[0] else {
        panic!("expected list block");
    };
    assert_eq!(list.layout, ListLayout::Compact);
    assert_eq!(list.items.len(), 2);
    assert_eq!(list.items[1][0].style.as_deref(), Some(style::TILE_CORRECT));
}

#[test]
fn test_matrix_block_shape_and_cells() {
    let mut doc = DocumentBuilder::new();
    doc.matrix(2, 3, |mat| {
        for y in 0..2 {
            for x in 0..3 {
                mat.entry(y, x, format!("{}", y * 3 + x));
            }
        }
    });
    let doc = doc.build();
    let Block::Matrix(mat) = &doc.blocks()[0] else {
        panic!("expected matrix block");
    };
    assert_eq!(mat.shape(), (2, 3));
    assert_eq!(mat.cell(1, 2).text, "5");
    assert!(mat.cell(1, 2).style.is_none());
}

#[test]
fn test_matrix_block_styled_entry() {
    let mut doc = DocumentBuilder::new();
    doc.matrix(1, 1, |mat| {
        mat.entry_styled(0, 0, "7", style::VERYWRONG);
    });
    let doc = doc.build();
    let Block::Matrix(mat) = &doc.blocks()[0] else {
        panic!("expected matrix block");
    };
    assert_eq!(mat.cell(0, 0).style.as_deref(), Some(style::VERYWRONG));
}

#[test]
#[should_panic]
fn test_matrix_entry_out_of_bounds_panics() {
    let mut doc = DocumentBuilder::new();
    doc.matrix(1, 1, |mat| {
        mat.entry(1, 0, "x");
    });
}

#[test]
fn test_document_serde_round_trip() {
    let mut doc = DocumentBuilder::new();
    doc.text(|t| t.styled("×", style::TILE_VERYWRONG));
    doc.matrix(1, 2, |mat| {
        mat.entry(0, 0, "1");
        mat.entry_styled(0, 1, "2", style::CORRECT);
    });
    let doc = doc.build();
    let json = serde_json::to_string(&doc).unwrap();
    let back: Document = serde_json::from_str(&json).unwrap();
    assert_eq!(doc, back);
}
