use crate::error::{FixtureError, Result};
use crate::font::TextRenderer;
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;

/// Inclusive pixel box, `(x0, y0)` top-left and `(x1, y1)` bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl BoundingBox {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        BoundingBox { x0, y0, x1, y1 }
    }

    fn validate(&self) -> Result<()> {
        if self.x1 < self.x0 || self.y1 < self.y0 {
            return Err(FixtureError::Rendering(format!(
                "degenerate bounding box ({}, {})-({}, {})",
                self.x0, self.y0, self.x1, self.y1
            )));
        }
        Ok(())
    }

    /// The box shrunk by `by` pixels on every side, or `None` once it
    /// would collapse.
    fn inset(&self, by: i32) -> Option<BoundingBox> {
        let inner = BoundingBox::new(self.x0 + by, self.y0 + by, self.x1 - by, self.y1 - by);
        (inner.x0 <= inner.x1 && inner.y0 <= inner.y1).then_some(inner)
    }
}

/// A single drawing operation. Outlines grow inward from the bounding box.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rectangle { bounds: BoundingBox, outline: Rgb<u8>, width: u32 },
    Ellipse { bounds: BoundingBox, outline: Rgb<u8>, width: u32 },
    Text { position: (i32, i32), text: String, fill: Rgb<u8> },
}

pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Rgb<u8>) -> Self {
        Canvas { image: RgbImage::from_pixel(width, height, background) }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Apply each primitive once, in order.
    pub fn draw_all(&mut self, primitives: &[Primitive], text: &TextRenderer) -> Result<()> {
        for primitive in primitives {
            self.draw(primitive, text)?;
        }
        Ok(())
    }

    pub fn draw(&mut self, primitive: &Primitive, text: &TextRenderer) -> Result<()> {
        log::debug!("Drawing {:?}", primitive);

        match primitive {
            Primitive::Rectangle { bounds, outline, width } => {
                bounds.validate()?;
                for step in 0..stroke_steps(*width) {
                    let Some(ring) = bounds.inset(step) else { break };
                    let rect = Rect::at(ring.x0, ring.y0)
                        .of_size((ring.x1 - ring.x0 + 1) as u32, (ring.y1 - ring.y0 + 1) as u32);
                    draw_hollow_rect_mut(&mut self.image, rect, *outline);
                }
            }
            Primitive::Ellipse { bounds, outline, width } => {
                bounds.validate()?;
                draw_ellipse_ring(&mut self.image, bounds, stroke_steps(*width), *outline);
            }
            Primitive::Text { position, text: content, fill } => {
                text.draw(&mut self.image, *position, content, *fill)?;
            }
        }

        Ok(())
    }
}

/// Paint every pixel whose centre lies inside the ellipse inscribed in
/// `bounds` but not inside the same ellipse shrunk by `width`. The outer
/// ellipse runs along the pixel edges of the box, so odd and even spans
/// both touch `x0`, `x1`, `y0` and `y1`.
fn draw_ellipse_ring(image: &mut RgbImage, bounds: &BoundingBox, width: i32, color: Rgb<u8>) {
    let cx = f64::from(bounds.x0 + bounds.x1) / 2.0;
    let cy = f64::from(bounds.y0 + bounds.y1) / 2.0;
    let (rx, ry) = (f64::from(bounds.x1 - bounds.x0 + 1) / 2.0, f64::from(bounds.y1 - bounds.y0 + 1) / 2.0);
    let (inner_rx, inner_ry) = (rx - f64::from(width), ry - f64::from(width));

    let norm = |x: i32, y: i32, rx: f64, ry: f64| {
        let (dx, dy) = ((f64::from(x) - cx) / rx, (f64::from(y) - cy) / ry);
        dx * dx + dy * dy
    };

    let (max_x, max_y) = (image.width() as i32 - 1, image.height() as i32 - 1);
    for y in bounds.y0.max(0)..=bounds.y1.min(max_y) {
        for x in bounds.x0.max(0)..=bounds.x1.min(max_x) {
            if norm(x, y, rx, ry) > 1.0 {
                continue;
            }
            // Strokes wider than the radius fill the whole ellipse
            if inner_rx > 0.0 && inner_ry > 0.0 && norm(x, y, inner_rx, inner_ry) < 1.0 {
                continue;
            }
            image.put_pixel(x as u32, y as u32, color);
        }
    }
}

// A zero width still draws a one pixel outline.
fn stroke_steps(width: u32) -> i32 {
    width.clamp(1, i32::MAX as u32) as i32
}
