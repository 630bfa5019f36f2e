use super::widgets::card_frame;
use super::SiteApp;
use crate::models::testimonial::Testimonial;
use crate::services::carousel::Direction;
use crate::ui_egui::theme::SiteTheme;
use egui::{RichText, Sense};

const ARROW_SIZE: f32 = 36.0;

impl SiteApp {
    pub(super) fn render_testimonials(&mut self, ui: &mut egui::Ui) {
        let theme = self.theme.clone();
        let visible = self.carousel.visible();
        let snapshot = self.carousel.snapshot();
        let mut clicked: Option<Direction> = None;

        ui.horizontal(|ui| {
            if arrow_button(ui, "‹").clicked() {
                clicked = Some(Direction::Backward);
            }

            let spacing = ui.spacing().item_spacing.x;
            let slots = visible.len().max(1) as f32;
            let cards_width = (ui.available_width() - ARROW_SIZE - spacing).max(120.0);
            let card_width = (cards_width - spacing * (slots - 1.0)) / slots;

            let cards = ui.horizontal_top(|ui| {
                for testimonial in &visible {
                    render_testimonial_card(ui, &theme, testimonial, card_width);
                }
            });

            // Press-and-drag over the cards behaves like a touch swipe
            let swipe = ui.interact(
                cards.response.rect,
                ui.id().with("testimonial_swipe"),
                Sense::drag(),
            );
            if swipe.drag_started() {
                if let Some(origin) = ui.input(|i| i.pointer.press_origin()) {
                    self.carousel.touch_start(origin.x);
                }
            }
            if swipe.drag_stopped() {
                if let Some(pos) = ui.input(|i| i.pointer.latest_pos()) {
                    self.carousel.touch_end(pos.x);
                }
            }

            if arrow_button(ui, "›").clicked() {
                clicked = Some(Direction::Forward);
            }
        });

        if let Some(direction) = clicked {
            self.carousel.advance(direction);
        }

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            let dot_width = 14.0;
            let total = dot_width * snapshot.page_count() as f32;
            ui.add_space(((ui.available_width() - total) / 2.0).max(0.0));
            for page in 0..snapshot.page_count() {
                let (rect, _) = ui.allocate_exact_size(egui::vec2(dot_width, 10.0), Sense::hover());
                let color = if page == snapshot.page() {
                    theme.accent
                } else {
                    theme.border
                };
                ui.painter().circle_filled(rect.center(), 4.0, color);
            }
        });
    }
}

fn arrow_button(ui: &mut egui::Ui, glyph: &str) -> egui::Response {
    ui.add(
        egui::Button::new(RichText::new(glyph).size(22.0))
            .rounding(ARROW_SIZE / 2.0)
            .min_size(egui::vec2(ARROW_SIZE, ARROW_SIZE)),
    )
}

fn render_testimonial_card(
    ui: &mut egui::Ui,
    theme: &SiteTheme,
    testimonial: &Testimonial,
    width: f32,
) {
    ui.allocate_ui(egui::vec2(width, 0.0), |ui| {
        card_frame(theme, false).show(ui, |ui| {
            ui.set_width((width - 36.0).max(60.0));
            ui.set_min_height(180.0);
            ui.label(RichText::new(testimonial.brand).size(13.0).strong().color(theme.accent));
            ui.add_space(6.0);
            ui.label(
                RichText::new(testimonial.headline)
                    .size(18.0)
                    .strong()
                    .color(theme.text_primary),
            );
            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("“{}”", testimonial.text))
                    .italics()
                    .color(theme.text_secondary),
            );
            ui.add_space(12.0);
            ui.label(RichText::new(testimonial.person).strong().color(theme.text_primary));
            ui.label(RichText::new(testimonial.title).size(13.0).color(theme.text_secondary));
        });
    });
}
