use super::widgets::card_frame;
use crate::models::faq::FaqEntry;
use crate::services::faq::FaqAccordion;
use crate::ui_egui::theme::SiteTheme;
use egui::{RichText, Sense};

pub(super) fn render_faq(
    ui: &mut egui::Ui,
    theme: &SiteTheme,
    entries: &[FaqEntry],
    accordion: &mut FaqAccordion,
) {
    for (index, entry) in entries.iter().enumerate() {
        let expanded = accordion.is_expanded(index);
        let frame = card_frame(theme, expanded).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(entry.question).size(16.0).strong().color(theme.text_primary));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let marker = if expanded { "−" } else { "+" };
                    ui.label(RichText::new(marker).size(20.0).color(theme.accent));
                });
            });
            if expanded {
                ui.add_space(8.0);
                ui.label(RichText::new(entry.answer).color(theme.text_secondary));
            }
        });

        let header = ui.interact(
            frame.response.rect,
            ui.id().with(("faq", entry.question)),
            Sense::click(),
        );
        if header.clicked() {
            accordion.toggle(index);
        }
        if header.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }
        ui.add_space(8.0);
    }
}
