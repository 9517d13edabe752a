#![cfg(feature = "png")]

use brailleprint::{
    convert,
    png::{PngFormat, Sprites},
    test_support::sample_table,
    Artifact, CharTable, LayoutEngine, Output,
};
use image::{Rgba, RgbaImage};

#[test]
fn image_size_matches_canvas() {
    let table = sample_table();
    let img = convert("Ab\nc", &table, &PngFormat::default()).unwrap();
    let layout = LayoutEngine::new(&table)
        .layout("Ab\nc", &brailleprint::Metrics::PNG)
        .unwrap();
    assert_eq!(img.dimensions(), (layout.canvas.width, layout.canvas.height));
    assert_eq!(img.dimensions(), (3 * 45 + 2 * 47, 2 * 74 + 144));
}

#[test]
fn background_stays_transparent() {
    let table = sample_table();
    let img = convert("a c", &table, &PngFormat::default()).unwrap();
    // blank column 2 is never drawn
    assert_eq!(img.get_pixel(92 + 20, 30).0[3], 0);
    // dot 1 of the first cell is raised
    assert_eq!(img.get_pixel(8, 8).0[3], 255);
}

#[test]
fn custom_sprites_are_composited() {
    let on = RgbaImage::from_pixel(16, 16, Rgba([255, 0, 0, 255]));
    let off = RgbaImage::from_pixel(16, 16, Rgba([0, 0, 255, 255]));
    let format = PngFormat::new(Sprites::new(on, off));
    let table = sample_table();
    let img = convert("a", &table, &format).unwrap();
    assert_eq!(img.dimensions(), (45, 74));
    assert_eq!(*img.get_pixel(0, 0), Rgba([255, 0, 0, 255]));
    assert_eq!(*img.get_pixel(29, 0), Rgba([0, 0, 255, 255]));
}

#[test]
fn encoded_png_has_signature() {
    let output = Output::Png(PngFormat::default());
    let artifact = output.convert("Hi", CharTable::english()).unwrap();
    assert!(matches!(artifact, Artifact::Png(_)));
    let bytes = artifact.to_bytes().unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn text_without_cells_still_encodes() {
    let output = Output::Png(PngFormat::default());
    for text in ["", "\n", "   "] {
        let artifact = output.convert(text, CharTable::english()).unwrap();
        let (width, height) = artifact.dimensions();
        assert_eq!(width, 1, "{text:?}");
        assert!(height >= 74, "{text:?}");
        let bytes = artifact.to_bytes().unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n", "{text:?}");
    }
}
