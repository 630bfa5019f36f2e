// Integration tests for site.toml loading and saving

use pretty_assertions::assert_eq;
use storefront_site::models::countdown::Countdown;
use storefront_site::models::settings::{AutoplayPolicy, SiteSettings, ThemePreference};
use storefront_site::services::settings::{SettingsError, SettingsService};

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let service = SettingsService::new(dir.path().join("site.toml"));

    let settings = service.load().expect("defaults for missing file");
    assert_eq!(settings, SiteSettings::default());
}

#[test]
fn save_then_load_preserves_changes() {
    let dir = tempfile::tempdir().unwrap();
    let service = SettingsService::new(dir.path().join("nested").join("site.toml"));

    let mut settings = SiteSettings::default();
    settings.theme = ThemePreference::Dark;
    settings.accent_color = Some("#10B981".to_string());
    settings.carousel.autoplay_policy = AutoplayPolicy::FixedCadence;
    settings.carousel.autoplay_interval_ms = 5_000;
    settings.countdown.start = Countdown::new(2, 0, 30, 0).unwrap();
    settings.faq.exclusive = true;

    service.save(&settings).expect("save settings");
    let loaded = service.load().expect("load settings");
    assert_eq!(loaded, settings);
}

#[test]
fn full_file_parses() {
    let text = r##"
theme = "light"
accent_color = "#4F46E5"
assets_dir = "assets/logos"

[carousel]
autoplay_interval_ms = 9000
autoplay_policy = "reset-on-interaction"
breakpoint_px = 900.0
swipe_threshold_px = 30.0

[countdown]
tick_ms = 1000
start = { days = 1, hours = 2, minutes = 3, seconds = 4 }

[marquee]
speed_px_per_sec = 25.0
pause_on_hover = false

[faq]
exclusive = true

[links]
base_url = "https://shop.example"
"##;

    let settings = SettingsService::parse(text).expect("parse full file");
    assert_eq!(settings.theme, ThemePreference::Light);
    assert_eq!(settings.carousel.breakpoint_px, 900.0);
    assert_eq!(settings.countdown.start, Countdown::new(1, 2, 3, 4).unwrap());
    assert!(!settings.marquee.pause_on_hover);
    assert_eq!(settings.links.login_url(), "https://shop.example/login");
}

#[test]
fn invalid_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("site.toml");
    std::fs::write(&path, "[countdown]\nstart = { days = 0, hours = 30, minutes = 0, seconds = 0 }\n")
        .unwrap();

    let service = SettingsService::new(&path);
    assert!(matches!(service.load(), Err(SettingsError::Invalid(_))));
    assert_eq!(service.load_or_default(), SiteSettings::default());
}

#[test]
fn save_rejects_invalid_settings() {
    let dir = tempfile::tempdir().unwrap();
    let service = SettingsService::new(dir.path().join("site.toml"));

    let mut settings = SiteSettings::default();
    settings.carousel.swipe_threshold_px = -1.0;
    assert!(service.save(&settings).is_err());
    assert!(!service.path().exists());
}
