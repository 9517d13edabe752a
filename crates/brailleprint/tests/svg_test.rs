use brailleprint::{
    convert, svg::SvgFormat, test_support::sample_table, BrailleError, CanvasSpec,
    LayoutEngine, Metrics,
};
use pretty_assertions::assert_eq;

fn circle_count(svg: &str) -> usize {
    svg.matches("<circle ").count()
}

#[test]
fn document_layout() {
    let table = sample_table();
    let doc = convert("Ab", &table, &SvgFormat::new()).unwrap();
    let lines: Vec<&str> = doc.as_str().lines().collect();
    assert_eq!(lines[0], "<?xml version=\"1.0\" standalone=\"no\"?>");
    assert!(lines[1].starts_with("<!DOCTYPE svg PUBLIC"));
    assert_eq!(
        lines[2],
        "<svg width=\"72px\" height=\"40px\" xmlns=\"http://www.w3.org/2000/svg\">"
    );
    assert_eq!(lines.last().copied(), Some("</svg>"));
    // capital indicator 1 dot, a 1 dot, b 2 dots
    assert_eq!(circle_count(doc.as_str()), 4);
}

#[test]
fn first_dot_of_second_cell() {
    let table = sample_table();
    let doc = convert("Ab", &table, &SvgFormat::new()).unwrap();
    // 'a' sits in column 2: x = 24 + radius
    assert!(doc
        .as_str()
        .contains("<circle cx=\"26\" cy=\"2\" r=\"2\""));
}

#[test]
fn declared_size_matches_measurement() {
    let table = sample_table();
    let engine = LayoutEngine::new(&table);
    for text in ["", "a", "Ab c", "a\nW\n\nabc", "  ab  "] {
        let doc = convert(text, &table, &SvgFormat::new()).unwrap();
        let canvas =
            CanvasSpec::from_extent(&engine.measure(text).unwrap(), &Metrics::SVG).unwrap();
        assert_eq!((doc.width(), doc.height()), (canvas.width, canvas.height), "{text:?}");
        assert!(doc.as_str().contains(&format!(
            "<svg width=\"{}px\" height=\"{}px\"",
            canvas.width, canvas.height
        )));
    }
}

#[test]
fn empty_text_is_a_bare_document() {
    let table = sample_table();
    let doc = convert("", &table, &SvgFormat::new()).unwrap();
    assert_eq!((doc.width(), doc.height()), (1, 40));
    assert_eq!(circle_count(doc.as_str()), 0);
}

#[test]
fn second_row_is_one_line_pitch_down() {
    let table = sample_table();
    let doc = convert("a\na", &table, &SvgFormat::new()).unwrap();
    assert_eq!(doc.height(), 80);
    assert!(doc.as_str().contains("cx=\"2\" cy=\"42\""));
}

#[test]
fn missing_character_yields_no_document() {
    let table = sample_table();
    let result = convert("ab@", &table, &SvgFormat::new());
    assert!(matches!(result, Err(BrailleError::CharacterNotFound('@'))));
}
