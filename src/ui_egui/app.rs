mod carousel;
mod countdown;
mod faq;
mod landing;
mod lifecycle;
mod marquee;
mod nav_bar;
mod navigation;
mod pricing;
mod state;
mod widgets;

use self::state::Page;
use crate::models::pricing::BillingCycle;
use crate::models::settings::SiteSettings;
use crate::services::carousel::TestimonialCarousel;
use crate::services::countdown::CountdownTimer;
use crate::services::faq::FaqAccordion;
use crate::services::marquee::{LogoStrip, MarqueeScroll};
use crate::ui_egui::theme::SiteTheme;
use tokio::runtime::Handle;

const MIN_ROOT_WIDTH: f32 = 360.0;
const MIN_ROOT_HEIGHT: f32 = 480.0;

pub struct SiteApp {
    /// Loaded configuration
    settings: SiteSettings,
    /// Runtime the widget timers are spawned on
    runtime: Handle,
    /// Currently applied theme colors
    theme: SiteTheme,
    current_page: Page,
    /// Page whose widgets currently hold running timers
    mounted_page: Option<Page>,
    carousel: TestimonialCarousel,
    countdown: CountdownTimer,
    marquee: MarqueeScroll,
    logos: LogoStrip,
    /// Uploaded lazily on the first landing frame; `None` entries are placeholders
    logo_textures: Option<Vec<Option<egui::TextureHandle>>>,
    landing_faq: FaqAccordion,
    pricing_faq: FaqAccordion,
    billing_cycle: BillingCycle,
}

impl eframe::App for SiteApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.handle_exit();
    }
}

impl SiteApp {
    pub fn min_window_size() -> egui::Vec2 {
        egui::vec2(MIN_ROOT_WIDTH, MIN_ROOT_HEIGHT)
    }

    /// Single-column layout below the carousel breakpoint
    fn is_narrow(&self, ctx: &egui::Context) -> bool {
        ctx.screen_rect().width() <= self.settings.carousel.breakpoint_px
    }
}
