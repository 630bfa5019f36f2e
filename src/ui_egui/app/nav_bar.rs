use super::state::{ExternalLink, Page};
use super::SiteApp;
use crate::models::content::PRODUCT_NAME;
use egui::RichText;

impl SiteApp {
    pub(super) fn render_nav_bar(&mut self, ctx: &egui::Context) {
        let theme = self.theme.clone();
        let mut target_page = None;
        let mut external = None;

        egui::TopBottomPanel::top("nav_bar")
            .exact_height(52.0)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        RichText::new(format!("◆ {}", PRODUCT_NAME))
                            .size(20.0)
                            .strong()
                            .color(theme.accent),
                    );
                    ui.add_space(24.0);

                    for page in [Page::Landing, Page::Pricing] {
                        let selected = self.current_page == page;
                        if ui
                            .selectable_label(selected, RichText::new(page.title()).size(15.0))
                            .clicked()
                        {
                            target_page = Some(page);
                        }
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let get_started = egui::Button::new(
                            RichText::new("Get started").strong().color(theme.on_accent),
                        )
                        .fill(theme.accent)
                        .rounding(6.0);
                        if ui.add(get_started).clicked() {
                            external = Some(ExternalLink::Register);
                        }
                        if ui.button("Dashboard").clicked() {
                            external = Some(ExternalLink::Dashboard);
                        }
                        if ui.button("Log in").clicked() {
                            external = Some(ExternalLink::Login);
                        }
                    });
                });
            });

        if let Some(page) = target_page {
            self.switch_page(ctx, page);
        }
        if let Some(link) = external {
            self.open_external(link);
        }
    }
}
