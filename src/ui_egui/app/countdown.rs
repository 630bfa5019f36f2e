use super::SiteApp;
use crate::ui_egui::theme::SiteTheme;
use egui::RichText;

impl SiteApp {
    pub(super) fn render_countdown(&self, ui: &mut egui::Ui, theme: &SiteTheme) {
        let remaining = self.countdown.remaining();

        egui::Frame::none()
            .fill(theme.accent)
            .rounding(12.0)
            .inner_margin(egui::Margin::same(20.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    if remaining.is_zero() {
                        ui.label(
                            RichText::new("The launch offer has ended")
                                .size(20.0)
                                .strong()
                                .color(theme.on_accent),
                        );
                        return;
                    }

                    ui.label(
                        RichText::new("Launch offer: 30% off your first three months")
                            .size(20.0)
                            .strong()
                            .color(theme.on_accent),
                    );
                    ui.add_space(4.0);
                    ui.label(RichText::new("Ends in").color(theme.on_accent));
                    ui.add_space(12.0);

                    let box_width = 84.0;
                    let fields = remaining.fields();
                    ui.horizontal(|ui| {
                        let total = box_width * fields.len() as f32
                            + ui.spacing().item_spacing.x * (fields.len() as f32 - 1.0);
                        ui.add_space(((ui.available_width() - total) / 2.0).max(0.0));
                        for (value, label) in fields {
                            render_countdown_box(ui, theme, value, label, box_width);
                        }
                    });
                });
            });
    }
}

fn render_countdown_box(ui: &mut egui::Ui, theme: &SiteTheme, value: u32, label: &str, width: f32) {
    ui.allocate_ui(egui::vec2(width, 80.0), |ui| {
        egui::Frame::none()
            .fill(theme.surface)
            .rounding(8.0)
            .inner_margin(egui::Margin::symmetric(8.0, 10.0))
            .show(ui, |ui| {
                ui.set_width(width - 16.0);
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(format!("{:02}", value))
                            .size(28.0)
                            .strong()
                            .monospace()
                            .color(theme.text_primary),
                    );
                    ui.label(RichText::new(label).size(12.0).color(theme.text_secondary));
                });
            });
    });
}
