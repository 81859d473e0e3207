use crate::canvas::{BoundingBox, Canvas, Primitive};
use crate::color::parse_color;
use crate::error::{FixtureError, Result};
use crate::font::TextRenderer;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, Rgb, RgbImage};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const FIXTURE_WIDTH: u32 = 200;
pub const FIXTURE_HEIGHT: u32 = 150;
pub const PNG_FIXTURE_NAME: &str = "test_image.png";
pub const JPEG_FIXTURE_NAME: &str = "test_image.jpg";
pub const DEFAULT_JPEG_QUALITY: u8 = 75;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureFormat {
    Png,
    Jpeg,
}

/// Everything needed to produce one fixture file.
#[derive(Debug, Clone)]
pub struct FixtureSpec {
    pub file_name: &'static str,
    pub width: u32,
    pub height: u32,
    pub background: Rgb<u8>,
    pub primitives: Vec<Primitive>,
    pub format: FixtureFormat,
}

/// Light blue canvas with a framed "Test Image" caption.
pub fn png_fixture() -> Result<FixtureSpec> {
    let ink = parse_color("darkblue")?;
    Ok(FixtureSpec {
        file_name: PNG_FIXTURE_NAME,
        width: FIXTURE_WIDTH,
        height: FIXTURE_HEIGHT,
        background: parse_color("lightblue")?,
        primitives: vec![
            Primitive::Rectangle { bounds: BoundingBox::new(10, 10, 190, 140), outline: ink, width: 3 },
            Primitive::Text { position: (50, 60), text: "Test Image".to_string(), fill: ink },
        ],
        format: FixtureFormat::Png,
    })
}

/// Light green canvas with an ellipse and a "Test JPEG" caption.
pub fn jpeg_fixture() -> Result<FixtureSpec> {
    let ink = parse_color("darkgreen")?;
    Ok(FixtureSpec {
        file_name: JPEG_FIXTURE_NAME,
        width: FIXTURE_WIDTH,
        height: FIXTURE_HEIGHT,
        background: parse_color("lightgreen")?,
        primitives: vec![
            Primitive::Ellipse { bounds: BoundingBox::new(20, 20, 180, 130), outline: ink, width: 3 },
            Primitive::Text { position: (50, 60), text: "Test JPEG".to_string(), fill: ink },
        ],
        format: FixtureFormat::Jpeg,
    })
}

impl FixtureSpec {
    pub fn render(&self, text: &TextRenderer) -> Result<RgbImage> {
        let mut canvas = Canvas::new(self.width, self.height, self.background);
        canvas.draw_all(&self.primitives, text)?;
        Ok(canvas.into_image())
    }

    /// Encode `image` into `<output_dir>/<file_name>`, replacing any existing
    /// file. A partially written file is left behind on failure.
    pub fn write(&self, image: &RgbImage, output_dir: &Path, jpeg_quality: u8) -> Result<PathBuf> {
        let path = output_dir.join(self.file_name);

        let file = File::create(&path)
            .map_err(|source| FixtureError::Resource { path: path.clone(), source })?;
        let mut writer = BufWriter::new(file);

        let encoded = match self.format {
            FixtureFormat::Png => PngEncoder::new(&mut writer).write_image(
                image.as_raw(),
                image.width(),
                image.height(),
                ExtendedColorType::Rgb8,
            ),
            FixtureFormat::Jpeg => {
                JpegEncoder::new_with_quality(&mut writer, jpeg_quality.clamp(1, 100)).encode_image(image)
            }
        };
        encoded.map_err(|e| FixtureError::from_image(path.clone(), e))?;

        writer
            .flush()
            .map_err(|source| FixtureError::Resource { path: path.clone(), source })?;

        log::info!("Wrote {} ({}x{})", path.display(), image.width(), image.height());
        Ok(path)
    }

    pub fn generate(&self, text: &TextRenderer, output_dir: &Path, jpeg_quality: u8) -> Result<PathBuf> {
        let image = self.render(text)?;
        self.write(&image, output_dir, jpeg_quality)
    }
}
