//! Small drawing helpers shared by both pages.

use crate::ui_egui::theme::SiteTheme;
use egui::{Color32, RichText};

pub(super) const SECTION_SPACING: f32 = 48.0;

pub(super) fn section_heading(ui: &mut egui::Ui, theme: &SiteTheme, title: &str, subtitle: &str) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(title).size(28.0).strong().color(theme.text_primary));
        if !subtitle.is_empty() {
            ui.add_space(6.0);
            ui.label(RichText::new(subtitle).size(16.0).color(theme.text_secondary));
        }
    });
    ui.add_space(20.0);
}

pub(super) fn card_frame(theme: &SiteTheme, highlighted: bool) -> egui::Frame {
    let stroke_color = if highlighted { theme.accent } else { theme.border };
    let stroke_width = if highlighted { 2.0 } else { 1.0 };
    egui::Frame::none()
        .fill(theme.surface)
        .rounding(10.0)
        .stroke(egui::Stroke::new(stroke_width, stroke_color))
        .inner_margin(egui::Margin::same(18.0))
}

pub(super) fn primary_button(ui: &mut egui::Ui, theme: &SiteTheme, text: &str) -> egui::Response {
    ui.add(
        egui::Button::new(RichText::new(text).size(16.0).strong().color(theme.on_accent))
            .fill(theme.accent)
            .rounding(8.0)
            .min_size(egui::vec2(150.0, 40.0)),
    )
}

pub(super) fn secondary_button(ui: &mut egui::Ui, theme: &SiteTheme, text: &str) -> egui::Response {
    ui.add(
        egui::Button::new(RichText::new(text).size(16.0).color(theme.text_primary))
            .fill(Color32::TRANSPARENT)
            .stroke(egui::Stroke::new(1.0, theme.border))
            .rounding(8.0)
            .min_size(egui::vec2(150.0, 40.0)),
    )
}

/// Number of cards per row for the current width
pub(super) fn columns_for(narrow: bool, wide_columns: usize) -> usize {
    if narrow {
        1
    } else {
        wide_columns.max(1)
    }
}
