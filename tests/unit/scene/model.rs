use super::*;
use crate::foundation::core::Rect;
use crate::layout::{Alignment, Precision};

const TWO_COLUMNS: &str = r#"{
  "root": {
    "id": "root",
    "layout": { "precision": { "columns": 2 } },
    "children": [
      { "id": "a", "content": { "kind": "fixed", "pref": { "width": 50, "height": 20 } } },
      { "id": "b", "content": { "kind": "fixed", "pref": { "width": 80, "height": 20 } } }
    ]
  }
}"#;

fn leaf(id: &str, width: f64, height: f64) -> NodeSpec {
    NodeSpec {
        content: Some(ContentSpec::Fixed {
            min: None,
            pref: Size::new(width, height),
            max: None,
        }),
        ..NodeSpec::new(id)
    }
}

fn grid_doc(children: Vec<NodeSpec>) -> LayoutDocument {
    LayoutDocument {
        viewport: None,
        root: NodeSpec {
            layout: Precision::new(2).into(),
            children,
            ..NodeSpec::new("root")
        },
    }
}

fn validation_message(doc: &LayoutDocument) -> String {
    match doc.validate() {
        Err(TrellisError::Validation(msg)) => msg,
        other => panic!("expected a validation error, got {other:?}"),
    }
}

#[test]
fn parses_with_defaults_filled_in() {
    let doc = LayoutDocument::from_json(TWO_COLUMNS).unwrap();
    assert!(doc.viewport.is_none());
    assert_eq!(doc.root.insets, Edges::default());
    let LayoutKind::Precision(precision) = doc.root.layout else {
        panic!("expected a precision layout");
    };
    assert_eq!(precision.columns, 2);
    assert_eq!(precision.horizontal_spacing, 4.0);
    assert_eq!(precision.horizontal_alignment, Alignment::Beginning);
    assert_eq!(doc.root.children[1].layout, LayoutKind::None);
}

#[test]
fn sizes_match_the_grid() {
    let doc = LayoutDocument::from_json(TWO_COLUMNS).unwrap();
    let sizes = doc.sizes().unwrap();
    assert_eq!(sizes.pref, Size::new(134.0, 20.0));
    assert_eq!(sizes.min, Size::new(134.0, 20.0));
}

#[test]
fn layout_prefers_explicit_size_then_viewport_then_pref() {
    let mut doc = LayoutDocument::from_json(TWO_COLUMNS).unwrap();

    let packed = doc.layout(None).unwrap();
    assert_eq!(packed[0].bounds, Rect::new(0.0, 0.0, 134.0, 20.0));

    doc.viewport = Some(Size::new(200.0, 50.0));
    let placements = doc.layout(None).unwrap();
    assert_eq!(placements[0].bounds, Rect::new(0.0, 0.0, 200.0, 50.0));
    assert_eq!(placements[1].bounds, Rect::new(0.0, 0.0, 50.0, 20.0));
    assert_eq!(placements[2].bounds, Rect::new(54.0, 0.0, 134.0, 20.0));

    let explicit = doc.layout(Some(Size::new(300.0, 40.0))).unwrap();
    assert_eq!(explicit[0].bounds, Rect::new(0.0, 0.0, 300.0, 40.0));
}

#[test]
fn build_keeps_ids_and_data() {
    let mut doc = grid_doc(vec![leaf("a", 1.0, 1.0), leaf("b", 1.0, 1.0)]);
    doc.root.children[1].data = Some(PrecisionData::new().span(2, 1));
    let block = doc.build().unwrap();
    let b = block.find("b").unwrap();
    assert_eq!(b.layout_data().map(|d| d.horizontal_span), Some(2));
    assert_eq!(block.children().len(), 2);
}

#[test]
fn fixed_content_defaults_min_and_max() {
    let mut block = leaf("x", 30.0, 10.0).build();
    let sizes = block.compute_sizes(NO_HINT_SIZE);
    assert_eq!(sizes.min, Size::new(30.0, 10.0));
    assert_eq!(sizes.max, default_max_size(sizes.pref));
}

#[test]
fn rejects_empty_and_duplicate_ids() {
    let doc = grid_doc(vec![leaf(" ", 1.0, 1.0)]);
    assert!(validation_message(&doc).contains("non-empty"));

    let doc = grid_doc(vec![leaf("a", 1.0, 1.0), leaf("a", 1.0, 1.0)]);
    assert!(validation_message(&doc).contains("duplicate node id 'a'"));
}

#[test]
fn rejects_zero_columns_and_negative_spacing() {
    let mut doc = grid_doc(vec![leaf("a", 1.0, 1.0)]);
    doc.root.layout = Precision::new(0).into();
    assert!(validation_message(&doc).contains("columns > 0"));

    doc.root.layout = Precision::new(1).spacing(-1.0, 0.0).into();
    assert!(validation_message(&doc).contains("horizontal_spacing"));
}

#[test]
fn rejects_vertical_span_beyond_the_grid() {
    let mut tall = leaf("tall", 1.0, 1.0);
    tall.data = Some(PrecisionData::new().span(1, usize::MAX));
    let doc = grid_doc(vec![tall, leaf("b", 1.0, 1.0)]);
    let msg = validation_message(&doc);
    assert!(msg.contains("node 'tall' vertical_span"), "{msg}");
    assert!(doc.sizes().is_err());

    let mut doc = doc;
    doc.root.children[0].data = Some(PrecisionData::new().span(1, 2));
    assert!(doc.validate().is_ok());
}

#[test]
fn huge_vertical_span_from_json_is_rejected() {
    let json = r#"{ "root": { "id": "root", "layout": { "precision": { "columns": 1 } },
        "children": [ { "id": "a", "data": { "vertical_span": 18446744073709551615 } } ] } }"#;
    let doc = LayoutDocument::from_json(json).unwrap();
    assert!(validation_message(&doc).contains("vertical_span"));
    assert!(doc.layout(None).is_err());
}

#[test]
fn rejects_bad_insets_hints_and_content() {
    let mut doc = grid_doc(vec![leaf("a", 1.0, 1.0)]);
    doc.root.insets = Edges::uniform(f64::NAN);
    assert!(validation_message(&doc).contains("insets"));

    let mut doc = grid_doc(vec![leaf("a", 1.0, 1.0)]);
    doc.root.children[0].data = Some(PrecisionData::new().width_hint(-5.0));
    assert!(validation_message(&doc).contains("size_hint.width"));

    let mut doc = grid_doc(vec![leaf("a", -1.0, 1.0)]);
    assert!(validation_message(&doc).contains("content width"));

    doc.root.children[0].content = Some(ContentSpec::Reflow {
        glyphs: 3,
        glyph_width: 0.0,
        line_height: 10.0,
    });
    assert!(validation_message(&doc).contains("glyph_width"));
}

#[test]
fn unset_hints_pass_validation() {
    let mut doc = grid_doc(vec![leaf("a", 1.0, 1.0)]);
    doc.root.children[0].data = Some(PrecisionData::new().min_width(3.0));
    doc.validate().unwrap();
}

#[test]
fn rejects_negative_layout_size() {
    let doc = grid_doc(vec![leaf("a", 1.0, 1.0)]);
    let err = doc.layout(Some(Size::new(-3.0, 10.0))).unwrap_err();
    assert!(err.to_string().contains("layout width"));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = LayoutDocument::from_json("{ \"root\": 3 }").unwrap_err();
    assert!(matches!(err, TrellisError::Serde(_)));
}
