// Shared helpers for integration tests

#![allow(dead_code)]

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use storefront_site::models::settings::{AutoplayPolicy, CarouselSettings};
use storefront_site::services::timer::RepaintHook;

pub fn six() -> NonZeroUsize {
    NonZeroUsize::new(6).unwrap()
}

pub fn carousel_settings(policy: AutoplayPolicy) -> CarouselSettings {
    CarouselSettings {
        autoplay_policy: policy,
        ..CarouselSettings::default()
    }
}

/// Repaint hook that counts how often it fired
pub fn counting_hook() -> (Arc<AtomicUsize>, RepaintHook) {
    let count = Arc::new(AtomicUsize::new(0));
    let hook_count = Arc::clone(&count);
    let hook: RepaintHook = Arc::new(move || {
        hook_count.fetch_add(1, Ordering::SeqCst);
    });
    (count, hook)
}

/// Write a solid-color RGB PNG
pub fn write_png(path: &std::path::Path, width: u32, height: u32) {
    let file = std::fs::File::create(path).expect("create png");
    let mut encoder = png::Encoder::new(std::io::BufWriter::new(file), width, height);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header().expect("png header");
    let pixels = vec![200u8; (width * height * 3) as usize];
    writer.write_image_data(&pixels).expect("png data");
}
