use super::faq::render_faq;
use super::state::{ExternalLink, Page};
use super::widgets::{
    card_frame, columns_for, primary_button, secondary_button, section_heading, SECTION_SPACING,
};
use super::SiteApp;
use crate::models::content::{Feature, FEATURES, HERO_SUBTITLE, HERO_TITLE, STATS};
use crate::models::faq::LANDING_FAQ;
use crate::ui_egui::theme::SiteTheme;
use egui::RichText;

impl SiteApp {
    pub(super) fn render_landing(&mut self, ui: &mut egui::Ui) {
        let theme = self.theme.clone();
        let narrow = self.is_narrow(ui.ctx());

        self.render_hero(ui, &theme);
        ui.add_space(SECTION_SPACING);

        render_stats(ui, &theme, narrow);
        ui.add_space(SECTION_SPACING);

        section_heading(
            ui,
            &theme,
            "Everything you need to sell online",
            "Tools that grow with you, included on every plan",
        );
        render_features(ui, &theme, narrow);
        ui.add_space(SECTION_SPACING);

        section_heading(ui, &theme, "Trusted by independent brands", "");
        self.render_marquee(ui);
        ui.add_space(SECTION_SPACING);

        section_heading(
            ui,
            &theme,
            "Loved by growing brands",
            "Hear it from the merchants who switched",
        );
        self.render_testimonials(ui);
        ui.add_space(SECTION_SPACING);

        section_heading(ui, &theme, "Frequently asked questions", "");
        render_faq(ui, &theme, LANDING_FAQ, &mut self.landing_faq);
        ui.add_space(SECTION_SPACING);

        self.render_closing_cta(ui, &theme);
        ui.add_space(SECTION_SPACING / 2.0);
    }

    fn render_hero(&mut self, ui: &mut egui::Ui, theme: &SiteTheme) {
        let mut external = None;
        let mut see_pricing = false;

        ui.add_space(SECTION_SPACING);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(HERO_TITLE).size(40.0).strong().color(theme.text_primary));
            ui.add_space(12.0);
            ui.label(RichText::new(HERO_SUBTITLE).size(18.0).color(theme.text_secondary));
            ui.add_space(24.0);
            ui.horizontal(|ui| {
                // Center the pair of buttons
                let pair_width = 150.0 * 2.0 + ui.spacing().item_spacing.x;
                ui.add_space(((ui.available_width() - pair_width) / 2.0).max(0.0));
                if primary_button(ui, theme, "Start free trial").clicked() {
                    external = Some(ExternalLink::Register);
                }
                if secondary_button(ui, theme, "See pricing").clicked() {
                    see_pricing = true;
                }
            });
        });

        if let Some(link) = external {
            self.open_external(link);
        }
        if see_pricing {
            self.switch_page(ui.ctx(), Page::Pricing);
        }
    }

    fn render_closing_cta(&mut self, ui: &mut egui::Ui, theme: &SiteTheme) {
        let mut clicked = false;
        card_frame(theme, true).show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new("Ready to launch your store?")
                        .size(26.0)
                        .strong()
                        .color(theme.text_primary),
                );
                ui.add_space(8.0);
                ui.label(
                    RichText::new("Start a 14-day trial. No credit card required.")
                        .color(theme.text_secondary),
                );
                ui.add_space(16.0);
                clicked = primary_button(ui, theme, "Create your store").clicked();
            });
        });
        if clicked {
            self.open_external(ExternalLink::Register);
        }
    }
}

fn render_stats(ui: &mut egui::Ui, theme: &SiteTheme, narrow: bool) {
    let per_row = columns_for(narrow, STATS.len());
    for row in STATS.chunks(per_row) {
        ui.columns(per_row, |columns| {
            for (column, stat) in columns.iter_mut().zip(row) {
                column.vertical_centered(|ui| {
                    ui.label(RichText::new(stat.value).size(30.0).strong().color(theme.accent));
                    ui.label(RichText::new(stat.label).color(theme.text_secondary));
                });
            }
        });
    }
}

fn render_features(ui: &mut egui::Ui, theme: &SiteTheme, narrow: bool) {
    let per_row = columns_for(narrow, 3);
    for row in FEATURES.chunks(per_row) {
        ui.columns(per_row, |columns| {
            for (column, feature) in columns.iter_mut().zip(row) {
                render_feature_card(column, theme, feature);
            }
        });
        ui.add_space(12.0);
    }
}

fn render_feature_card(ui: &mut egui::Ui, theme: &SiteTheme, feature: &Feature) {
    card_frame(theme, false).show(ui, |ui| {
        ui.set_min_height(120.0);
        ui.label(RichText::new(feature.icon).size(26.0));
        ui.add_space(6.0);
        ui.label(RichText::new(feature.title).size(18.0).strong().color(theme.text_primary));
        ui.add_space(4.0);
        ui.label(RichText::new(feature.description).color(theme.text_secondary));
    });
}
