//! Raster output built from two pre-loaded dot sprites.
use crate::{
    cell::{DotCell, CELL_COLS, CELL_ROWS},
    error::Result,
    format::OutputFormat,
    metrics::{CanvasSpec, Metrics},
};
use image::{imageops, Rgba, RgbaImage};
use std::path::Path;

const ON_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);
const OFF_COLOR: Rgba<u8> = Rgba([0, 0, 0, 48]);

/// The "on" and "off" dot images.
#[derive(Clone, Debug)]
pub struct Sprites {
    pub on: RgbaImage,
    pub off: RgbaImage,
}

impl Sprites {
    pub fn new(on: RgbaImage, off: RgbaImage) -> Self {
        Self { on, off }
    }

    /// Solid discs: black for raised dots, faint for flat ones.
    pub fn generated(diameter: u32) -> Self {
        Self {
            on: disc(diameter, ON_COLOR),
            off: disc(diameter, OFF_COLOR),
        }
    }

    pub fn load(on: &Path, off: &Path) -> Result<Self> {
        let on = image::open(on)?.to_rgba8();
        let off = image::open(off)?.to_rgba8();
        Ok(Self { on, off })
    }
}

fn disc(diameter: u32, color: Rgba<u8>) -> RgbaImage {
    let r = diameter as f32 / 2.0;
    RgbaImage::from_fn(diameter, diameter, |x, y| {
        let dx = x as f32 + 0.5 - r;
        let dy = y as f32 + 0.5 - r;
        if dx * dx + dy * dy <= r * r {
            color
        } else {
            Rgba([0, 0, 0, 0])
        }
    })
}

/// One rendered cell and where it goes on the canvas.
#[derive(Clone, Debug)]
pub struct Patch {
    pub x: u32,
    pub y: u32,
    pub image: RgbaImage,
}

#[derive(Clone, Debug)]
pub struct PngFormat {
    metrics: Metrics,
    sprites: Sprites,
}

impl PngFormat {
    pub fn new(sprites: Sprites) -> Self {
        Self {
            metrics: Metrics::PNG,
            sprites,
        }
    }

    pub fn sprites(&self) -> &Sprites {
        &self.sprites
    }
}

impl Default for PngFormat {
    fn default() -> Self {
        Self::new(Sprites::generated(Metrics::PNG.diameter))
    }
}

impl OutputFormat for PngFormat {
    type Fragment = Patch;
    type Artifact = RgbaImage;

    fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    // Flat dots are drawn too, so the outline of every cell stays visible.
    fn render_cell(&self, cell: DotCell, column: u32, row: u32) -> Patch {
        let m = &self.metrics;
        let mut image = RgbaImage::new(m.cell_width, m.cell_height);
        for i in 0..CELL_ROWS {
            for j in 0..CELL_COLS {
                let sprite = if cell.is_raised(i, j) {
                    &self.sprites.on
                } else {
                    &self.sprites.off
                };
                let (dx, dy) = m.dot_offset(i, j);
                imageops::overlay(&mut image, sprite, dx as i64, dy as i64);
            }
        }
        let (x, y) = m.cell_origin(column, row);
        Patch { x, y, image }
    }

    fn assemble<I>(&self, canvas: &CanvasSpec, fragments: I) -> Result<RgbaImage>
    where
        I: IntoIterator<Item = Patch>,
    {
        let mut out = RgbaImage::new(canvas.width, canvas.height);
        for patch in fragments {
            imageops::overlay(&mut out, &patch.image, patch.x as i64, patch.y as i64);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alpha_at(img: &RgbaImage, x: u32, y: u32) -> u8 {
        img.get_pixel(x, y).0[3]
    }

    #[test]
    fn draws_on_and_off_dots() {
        let format = PngFormat::default();
        let cell = DotCell::from_dots(&[1]).unwrap();
        let patch = format.render_cell(cell, 2, 1);
        assert_eq!((patch.x, patch.y), (92, 0));
        assert_eq!(patch.image.dimensions(), (45, 74));
        // centre of dot 1, raised
        assert_eq!(alpha_at(&patch.image, 8, 8), 255);
        // centre of dot 6, flat but still drawn
        let off = alpha_at(&patch.image, 29 + 8, 58 + 8);
        assert!(off > 0 && off < 255, "flat dot alpha {off}");
        // gap between dots stays transparent
        assert_eq!(alpha_at(&patch.image, 22, 22), 0);
    }

    #[test]
    fn generated_disc_is_round() {
        let d = disc(16, ON_COLOR);
        assert_eq!(alpha_at(&d, 0, 0), 0);
        assert_eq!(alpha_at(&d, 8, 8), 255);
        assert_eq!(alpha_at(&d, 15, 15), 0);
    }
}
