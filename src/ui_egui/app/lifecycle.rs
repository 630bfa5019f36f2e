use std::sync::Arc;

use super::state::Page;
use super::SiteApp;
use crate::models::faq::{LANDING_FAQ, PRICING_FAQ};
use crate::models::logo::CUSTOMER_LOGOS;
use crate::models::pricing::BillingCycle;
use crate::models::settings::SiteSettings;
use crate::services::carousel::TestimonialCarousel;
use crate::services::countdown::CountdownTimer;
use crate::services::faq::FaqAccordion;
use crate::services::marquee::{LogoStrip, MarqueeScroll};
use crate::services::timer::RepaintHook;
use crate::ui_egui::theme::SiteTheme;
use tokio::runtime::Handle;

impl SiteApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: SiteSettings, runtime: Handle) -> Self {
        let theme = SiteTheme::for_preference(settings.theme, settings.accent_color.as_deref());
        theme.apply_to_context(&cc.egui_ctx);

        let logos = LogoStrip::load(settings.assets_dir.as_deref(), CUSTOMER_LOGOS);

        Self {
            carousel: TestimonialCarousel::new(&settings.carousel),
            countdown: CountdownTimer::new(&settings.countdown),
            marquee: MarqueeScroll::new(&settings.marquee),
            landing_faq: FaqAccordion::new(LANDING_FAQ.len(), settings.faq.exclusive),
            pricing_faq: FaqAccordion::new(PRICING_FAQ.len(), settings.faq.exclusive),
            logos,
            logo_textures: None,
            billing_cycle: BillingCycle::default(),
            current_page: Page::Landing,
            mounted_page: None,
            theme,
            runtime,
            settings,
        }
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_nav_bar(ctx);

        // After the nav bar so a page picked there is mounted before it is drawn
        self.sync_mounted_widgets(ctx);

        if self.current_page == Page::Landing {
            self.carousel.resize(ctx.screen_rect().width());
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match self.current_page {
                    Page::Landing => self.render_landing(ui),
                    Page::Pricing => self.render_pricing(ui),
                });
        });
    }

    pub(super) fn handle_exit(&mut self) {
        log::info!("Shutting down, stopping widget timers");
        self.unmount_page_widgets();
    }

    /// Start the timers of the visible page and stop those of the page that was left
    fn sync_mounted_widgets(&mut self, ctx: &egui::Context) {
        sync_page_widgets(
            &mut self.mounted_page,
            self.current_page,
            PageWidgets {
                carousel: &mut self.carousel,
                countdown: &mut self.countdown,
            },
            &self.runtime,
            ctx.screen_rect().width(),
            || repaint_hook(ctx),
        );
    }

    fn unmount_page_widgets(&mut self) {
        unmount_page_widgets(
            &mut self.mounted_page,
            PageWidgets {
                carousel: &mut self.carousel,
                countdown: &mut self.countdown,
            },
        );
    }
}

/// The timer-owning widgets, borrowed out of the app
struct PageWidgets<'a> {
    carousel: &'a mut TestimonialCarousel,
    countdown: &'a mut CountdownTimer,
}

/// Returns true when the widgets of `current` were mounted by this call
fn sync_page_widgets(
    mounted: &mut Option<Page>,
    current: Page,
    widgets: PageWidgets<'_>,
    runtime: &Handle,
    viewport_width: f32,
    repaint: impl FnOnce() -> RepaintHook,
) -> bool {
    if *mounted == Some(current) {
        return false;
    }

    let PageWidgets { carousel, countdown } = widgets;
    unmount_page_widgets(
        mounted,
        PageWidgets {
            carousel: &mut *carousel,
            countdown: &mut *countdown,
        },
    );

    match current {
        Page::Landing => carousel.mount(runtime, viewport_width, repaint()),
        Page::Pricing => countdown.mount(runtime, repaint()),
    }
    *mounted = Some(current);
    true
}

fn unmount_page_widgets(mounted: &mut Option<Page>, widgets: PageWidgets<'_>) {
    match mounted.take() {
        Some(Page::Landing) => widgets.carousel.unmount(),
        Some(Page::Pricing) => widgets.countdown.unmount(),
        None => {}
    }
}

fn repaint_hook(ctx: &egui::Context) -> RepaintHook {
    let ctx = ctx.clone();
    Arc::new(move || ctx.request_repaint())
}
