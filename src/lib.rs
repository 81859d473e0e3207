pub mod canvas;
pub mod color;
pub mod error;
pub mod fixtures;
pub mod font;

use fixtures::{jpeg_fixture, png_fixture, DEFAULT_JPEG_QUALITY};
use font::TextRenderer;
use std::path::{Path, PathBuf};

pub use error::{FixtureError, Result};

pub const DEFAULT_FONT_SIZE: f32 = 11.0;

// Trait to abstract where and how fixtures are written
pub trait FixtureConfig {
    fn output_dir(&self) -> &str;

    /// TrueType font for captions; `None` uses the built-in bitmap font.
    fn font_path(&self) -> Option<&str> {
        None
    }

    fn font_size(&self) -> f32 {
        DEFAULT_FONT_SIZE
    }

    fn jpeg_quality(&self) -> u8 {
        DEFAULT_JPEG_QUALITY
    }
}

pub fn load_text_renderer<T: FixtureConfig>(config: &T) -> Result<TextRenderer> {
    match config.font_path() {
        Some(path) => TextRenderer::from_file(Path::new(path), config.font_size()),
        None => Ok(TextRenderer::Bitmap),
    }
}

/// Draw the framed "Test Image" fixture and save it as `test_image.png`.
pub fn generate_png_fixture<T: FixtureConfig>(config: &T) -> Result<PathBuf> {
    let text = load_text_renderer(config)?;
    png_fixture()?.generate(&text, Path::new(config.output_dir()), config.jpeg_quality())
}

/// Draw the ellipse "Test JPEG" fixture and save it as `test_image.jpg`.
pub fn generate_jpeg_fixture<T: FixtureConfig>(config: &T) -> Result<PathBuf> {
    let text = load_text_renderer(config)?;
    jpeg_fixture()?.generate(&text, Path::new(config.output_dir()), config.jpeg_quality())
}

/// Generate the PNG fixture, then the JPEG one. Stops at the first failure.
pub fn generate_fixtures<T: FixtureConfig>(config: &T) -> Result<Vec<PathBuf>> {
    let text = load_text_renderer(config)?;
    let output_dir = Path::new(config.output_dir());

    let mut written = Vec::with_capacity(2);
    for spec in [png_fixture()?, jpeg_fixture()?] {
        written.push(spec.generate(&text, output_dir, config.jpeg_quality())?);
    }

    Ok(written)
}
