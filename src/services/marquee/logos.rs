//! Logo loading for the marquee.
//!
//! Each brand resolves to a decoded image when its PNG is present and readable,
//! and to a text placeholder otherwise. Failures never reach the visitor.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::models::logo::Logo;

/// RGBA8 pixels, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogoSource {
    Image(DecodedImage),
    Placeholder(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLogo {
    pub name: &'static str,
    pub source: LogoSource,
}

impl ResolvedLogo {
    pub fn is_placeholder(&self) -> bool {
        matches!(self.source, LogoSource::Placeholder(_))
    }
}

#[derive(Debug, Clone, Default)]
pub struct LogoStrip {
    logos: Vec<ResolvedLogo>,
}

impl LogoStrip {
    pub fn load(assets_dir: Option<&Path>, logos: &[Logo]) -> Self {
        let logos = logos
            .iter()
            .map(|logo| ResolvedLogo {
                name: logo.name,
                source: resolve(assets_dir, logo),
            })
            .collect::<Vec<_>>();

        let placeholders = logos.iter().filter(|l| l.is_placeholder()).count();
        log::info!(
            "Loaded {} marquee logos ({} text placeholders)",
            logos.len(),
            placeholders
        );
        Self { logos }
    }

    pub fn logos(&self) -> &[ResolvedLogo] {
        &self.logos
    }

    pub fn is_empty(&self) -> bool {
        self.logos.is_empty()
    }
}

fn resolve(assets_dir: Option<&Path>, logo: &Logo) -> LogoSource {
    let Some(dir) = assets_dir else {
        return LogoSource::Placeholder(logo.name.to_string());
    };

    let path = dir.join(logo.file);
    match File::open(&path)
        .with_context(|| format!("opening {}", path.display()))
        .and_then(|file| decode_png_rgba(BufReader::new(file)))
    {
        Ok(image) => LogoSource::Image(image),
        Err(err) => {
            log::debug!("Logo '{}' falls back to text: {:#}", logo.name, err);
            LogoSource::Placeholder(logo.name.to_string())
        }
    }
}

/// Decode a PNG stream into 8-bit RGBA
pub fn decode_png_rgba<R: Read>(reader: R) -> Result<DecodedImage> {
    let mut decoder = png::Decoder::new(reader);
    decoder.set_transformations(png::Transformations::normalize_to_color8());
    let mut reader = decoder.read_info().context("reading PNG header")?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).context("decoding PNG frame")?;
    buf.truncate(info.buffer_size());

    let rgba = match info.color_type {
        png::ColorType::Rgba => buf,
        png::ColorType::Rgb => buf
            .chunks_exact(3)
            .flat_map(|px| [px[0], px[1], px[2], 255])
            .collect(),
        png::ColorType::GrayscaleAlpha => buf
            .chunks_exact(2)
            .flat_map(|px| [px[0], px[0], px[0], px[1]])
            .collect(),
        png::ColorType::Grayscale => buf.iter().flat_map(|&g| [g, g, g, 255]).collect(),
        other => bail!("unsupported PNG color type {:?}", other),
    };

    Ok(DecodedImage {
        width: info.width,
        height: info.height,
        rgba,
    })
}
