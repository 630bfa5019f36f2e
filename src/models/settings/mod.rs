//! Site configuration.
//!
//! Every section carries `#[serde(default)]` so a partial `site.toml` only
//! overrides the keys it names.

use crate::models::countdown::{Countdown, OFFER_COUNTDOWN_START};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemePreference {
    #[default]
    System,
    Light,
    Dark,
}

/// How the carousel autoplay timer reacts to manual navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AutoplayPolicy {
    /// Any manual change to the slide window restarts the full interval
    #[default]
    ResetOnInteraction,
    /// Auto-advance keeps its cadence no matter what the visitor does
    FixedCadence,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselSettings {
    pub autoplay_interval_ms: u64,
    pub autoplay_policy: AutoplayPolicy,
    /// Viewports at or below this width show a single slide
    pub breakpoint_px: f32,
    pub swipe_threshold_px: f32,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: 7_000,
            autoplay_policy: AutoplayPolicy::default(),
            breakpoint_px: 768.0,
            swipe_threshold_px: 50.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountdownSettings {
    pub tick_ms: u64,
    pub start: Countdown,
}

impl Default for CountdownSettings {
    fn default() -> Self {
        Self {
            tick_ms: 1_000,
            start: OFFER_COUNTDOWN_START,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarqueeSettings {
    pub speed_px_per_sec: f32,
    pub pause_on_hover: bool,
}

impl Default for MarqueeSettings {
    fn default() -> Self {
        Self {
            speed_px_per_sec: 40.0,
            pause_on_hover: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqSettings {
    /// Opening one answer collapses the others
    pub exclusive: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkSettings {
    pub base_url: String,
    pub register_path: String,
    pub login_path: String,
    pub dashboard_path: String,
}

impl Default for LinkSettings {
    fn default() -> Self {
        Self {
            base_url: "https://app.storefront.example".to_string(),
            register_path: "/register".to_string(),
            login_path: "/login".to_string(),
            dashboard_path: "/dashboard".to_string(),
        }
    }
}

impl LinkSettings {
    pub fn register_url(&self) -> String {
        join_url(&self.base_url, &self.register_path)
    }

    pub fn login_url(&self) -> String {
        join_url(&self.base_url, &self.login_path)
    }

    pub fn dashboard_url(&self) -> String {
        join_url(&self.base_url, &self.dashboard_path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    pub theme: ThemePreference,
    pub accent_color: Option<String>,
    pub assets_dir: Option<PathBuf>,
    pub carousel: CarouselSettings,
    pub countdown: CountdownSettings,
    pub marquee: MarqueeSettings,
    pub faq: FaqSettings,
    pub links: LinkSettings,
}

impl SiteSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.carousel.autoplay_interval_ms == 0 {
            return Err("carousel.autoplay_interval_ms must be greater than zero".to_string());
        }
        if !self.carousel.breakpoint_px.is_finite() || self.carousel.breakpoint_px <= 0.0 {
            return Err(format!(
                "carousel.breakpoint_px must be a positive number, got {}",
                self.carousel.breakpoint_px
            ));
        }
        if !self.carousel.swipe_threshold_px.is_finite() || self.carousel.swipe_threshold_px < 0.0 {
            return Err(format!(
                "carousel.swipe_threshold_px must not be negative, got {}",
                self.carousel.swipe_threshold_px
            ));
        }
        if self.countdown.tick_ms == 0 {
            return Err("countdown.tick_ms must be greater than zero".to_string());
        }
        self.countdown
            .start
            .validate()
            .map_err(|e| format!("countdown.start: {}", e))?;
        if !self.marquee.speed_px_per_sec.is_finite() || self.marquee.speed_px_per_sec < 0.0 {
            return Err(format!(
                "marquee.speed_px_per_sec must not be negative, got {}",
                self.marquee.speed_px_per_sec
            ));
        }
        if let Some(accent) = &self.accent_color {
            if parse_hex_rgb(accent).is_none() {
                return Err(format!("accent_color '{}' is not a #RRGGBB color", accent));
            }
        }
        Ok(())
    }
}

/// Parse `#RRGGBB` (leading `#` optional)
pub fn parse_hex_rgb(hex: &str) -> Option<[u8; 3]> {
    let hex = hex.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some([r, g, b])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(SiteSettings::default().validate().is_ok());
    }

    #[test]
    fn test_default_carousel_values() {
        let carousel = CarouselSettings::default();
        assert_eq!(carousel.autoplay_interval_ms, 7_000);
        assert_eq!(carousel.breakpoint_px, 768.0);
        assert_eq!(carousel.swipe_threshold_px, 50.0);
        assert_eq!(carousel.autoplay_policy, AutoplayPolicy::ResetOnInteraction);
    }

    #[test]
    fn test_zero_interval_rejected() {
        let mut settings = SiteSettings::default();
        settings.carousel.autoplay_interval_ms = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_bad_countdown_rejected() {
        let mut settings = SiteSettings::default();
        settings.countdown.start.minutes = 61;
        let err = settings.validate().unwrap_err();
        assert!(err.starts_with("countdown.start"));
    }

    #[test]
    fn test_bad_accent_rejected() {
        let mut settings = SiteSettings::default();
        settings.accent_color = Some("#12345".to_string());
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_parse_hex_rgb() {
        assert_eq!(parse_hex_rgb("#FF8040"), Some([255, 128, 64]));
        assert_eq!(parse_hex_rgb("ff8040"), Some([255, 128, 64]));
        assert_eq!(parse_hex_rgb("#GG8040"), None);
    }

    #[test]
    fn test_link_urls_join_cleanly() {
        let links = LinkSettings {
            base_url: "https://shop.example/".to_string(),
            ..LinkSettings::default()
        };
        assert_eq!(links.register_url(), "https://shop.example/register");
        assert_eq!(links.login_url(), "https://shop.example/login");
        assert_eq!(links.dashboard_url(), "https://shop.example/dashboard");
    }
}
