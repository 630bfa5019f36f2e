//! Theme module for the egui site
//!
//! Defines the SiteTheme color set and applies it to an egui context.

use crate::models::settings::{parse_hex_rgb, ThemePreference};
use egui::Color32;

/// Colors used across both pages
#[derive(Debug, Clone, PartialEq)]
pub struct SiteTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Page background
    pub background: Color32,

    /// Cards, FAQ rows and the countdown boxes
    pub surface: Color32,

    /// Border around surfaces
    pub border: Color32,

    /// Buttons, highlighted plan, active carousel dot
    pub accent: Color32,

    /// Text drawn on top of the accent color
    pub on_accent: Color32,

    /// Primary text color (headings)
    pub text_primary: Color32,

    /// Secondary text color (body copy, captions)
    pub text_secondary: Color32,
}

impl SiteTheme {
    pub fn light() -> Self {
        Self {
            is_dark: false,
            background: Color32::from_rgb(248, 249, 252),
            surface: Color32::from_rgb(255, 255, 255),
            border: Color32::from_rgb(224, 226, 234),
            accent: Color32::from_rgb(79, 70, 229),
            on_accent: Color32::WHITE,
            text_primary: Color32::from_rgb(24, 24, 38),
            text_secondary: Color32::from_rgb(96, 99, 116),
        }
    }

    pub fn dark() -> Self {
        Self {
            is_dark: true,
            background: Color32::from_rgb(17, 18, 26),
            surface: Color32::from_rgb(29, 31, 43),
            border: Color32::from_rgb(52, 55, 72),
            accent: Color32::from_rgb(129, 140, 248),
            on_accent: Color32::from_rgb(17, 18, 26),
            text_primary: Color32::from_rgb(238, 239, 245),
            text_secondary: Color32::from_rgb(164, 167, 184),
        }
    }

    /// Resolve the configured preference, asking the OS when it is `System`
    pub fn for_preference(preference: ThemePreference, accent_override: Option<&str>) -> Self {
        let mut theme = match preference {
            ThemePreference::Light => Self::light(),
            ThemePreference::Dark => Self::dark(),
            ThemePreference::System => match dark_light::detect() {
                dark_light::Mode::Dark => Self::dark(),
                dark_light::Mode::Light | dark_light::Mode::Default => Self::light(),
            },
        };

        if let Some(accent) = accent_override {
            match Self::hex_to_color(accent) {
                Ok(color) => theme.accent = color,
                Err(e) => log::warn!("Ignoring accent color '{}': {}", accent, e),
            }
        }
        theme
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.background;
        visuals.panel_fill = self.background;
        visuals.widgets.noninteractive.bg_fill = self.surface;
        visuals.widgets.inactive.bg_fill = self.surface;
        visuals.selection.bg_fill = self.accent;
        visuals.hyperlink_color = self.accent;
        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }

    /// Parse hex string to Color32
    pub fn hex_to_color(hex: &str) -> Result<Color32, String> {
        let [r, g, b] = parse_hex_rgb(hex).ok_or_else(|| format!("Invalid hex color: {}", hex))?;
        Ok(Color32::from_rgb(r, g, b))
    }
}
