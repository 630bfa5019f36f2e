use crate::models::settings::MarqueeSettings;

/// Horizontal offset of the logo strip, advanced by frame time
#[derive(Debug, Clone, PartialEq)]
pub struct MarqueeScroll {
    offset: f32,
    speed: f32,
    pause_on_hover: bool,
    paused: bool,
}

impl MarqueeScroll {
    pub fn new(settings: &MarqueeSettings) -> Self {
        Self {
            offset: 0.0,
            speed: settings.speed_px_per_sec,
            pause_on_hover: settings.pause_on_hover,
            paused: false,
        }
    }

    /// Move the strip by `speed * dt`, wrapping after one full strip width
    pub fn advance(&mut self, dt_seconds: f32, strip_width: f32) {
        if !strip_width.is_finite() || strip_width <= 0.0 {
            self.offset = 0.0;
            return;
        }
        if self.paused || !dt_seconds.is_finite() || dt_seconds <= 0.0 {
            return;
        }
        self.offset = (self.offset + self.speed * dt_seconds).rem_euclid(strip_width);
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.paused = self.pause_on_hover && hovered;
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }
}
