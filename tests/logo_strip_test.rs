// Integration tests for marquee logo resolution and text fallback

mod fixtures;

use fixtures::write_png;
use storefront_site::models::logo::Logo;
use storefront_site::services::marquee::{LogoSource, LogoStrip};

const LOGOS: &[Logo] = &[
    Logo { name: "Present", file: "present.png" },
    Logo { name: "Missing", file: "missing.png" },
    Logo { name: "Corrupt", file: "corrupt.png" },
];

#[test]
fn mixed_assets_resolve_independently() {
    let dir = tempfile::tempdir().unwrap();
    write_png(&dir.path().join("present.png"), 4, 2);
    std::fs::write(dir.path().join("corrupt.png"), b"\x89PNG broken").unwrap();

    let strip = LogoStrip::load(Some(dir.path()), LOGOS);
    let logos = strip.logos();
    assert_eq!(logos.len(), 3);

    match &logos[0].source {
        LogoSource::Image(image) => {
            assert_eq!((image.width, image.height), (4, 2));
            assert_eq!(image.rgba.len(), 4 * 2 * 4);
            assert_eq!(&image.rgba[..4], &[200, 200, 200, 255]);
        }
        other => panic!("expected decoded image, got {:?}", other),
    }
    assert_eq!(logos[1].source, LogoSource::Placeholder("Missing".to_string()));
    assert_eq!(logos[2].source, LogoSource::Placeholder("Corrupt".to_string()));
}

#[test]
fn order_matches_input() {
    let strip = LogoStrip::load(None, LOGOS);
    let names: Vec<_> = strip.logos().iter().map(|l| l.name).collect();
    assert_eq!(names, vec!["Present", "Missing", "Corrupt"]);
    assert!(strip.logos().iter().all(|l| l.is_placeholder()));
}
