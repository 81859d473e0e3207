use anyhow::{Context, Result};
use clap::Parser;
use dotenv::dotenv;
use fixture_images_lib::{generate_fixtures, FixtureConfig};
use std::fs;
use std::path::Path;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate the PNG and JPEG test fixture images", long_about = None)]
struct Args {
    /// Directory the fixture images are written to
    #[arg(long, env("FIXTURE_OUTPUT_DIR"), default_value = ".")]
    output_dir: String,

    /// TrueType font used for captions instead of the built-in bitmap font
    #[arg(long, env("FIXTURE_FONT"))]
    font: Option<String>,

    /// Caption size in pixels when a TrueType font is used
    #[arg(long, default_value_t = fixture_images_lib::DEFAULT_FONT_SIZE)]
    font_size: f32,

    /// JPEG encoder quality
    #[arg(long, default_value_t = 75, value_parser = clap::value_parser!(u8).range(1..=100))]
    jpeg_quality: u8,
}

impl FixtureConfig for Args {
    fn output_dir(&self) -> &str {
        &self.output_dir
    }

    fn font_path(&self) -> Option<&str> {
        self.font.as_deref()
    }

    fn font_size(&self) -> f32 {
        self.font_size
    }

    fn jpeg_quality(&self) -> u8 {
        self.jpeg_quality
    }
}

fn main() -> Result<()> {
    // Load environment variables from .env file if present
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::debug!("Args: {:?}", args);

    if !Path::new(&args.output_dir).exists() {
        fs::create_dir_all(&args.output_dir)
            .with_context(|| format!("Failed to create output directory {}", args.output_dir))?;
    }

    // PNG first, then JPEG; the first failure aborts the run
    generate_fixtures(&args).context("Failed to create test images")?;

    println!("Test images created successfully");
    Ok(())
}
