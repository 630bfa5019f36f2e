use super::faq::render_faq;
use super::state::ExternalLink;
use super::widgets::{card_frame, columns_for, primary_button, section_heading, SECTION_SPACING};
use super::SiteApp;
use crate::models::faq::PRICING_FAQ;
use crate::models::pricing::{BillingCycle, PricingPlan, PLANS};
use crate::ui_egui::theme::SiteTheme;
use egui::RichText;

impl SiteApp {
    pub(super) fn render_pricing(&mut self, ui: &mut egui::Ui) {
        let theme = self.theme.clone();
        let narrow = self.is_narrow(ui.ctx());

        ui.add_space(SECTION_SPACING);
        section_heading(
            ui,
            &theme,
            "Simple pricing, no transaction fees",
            "Pick a plan now and change it whenever you like",
        );

        self.render_countdown(ui, &theme);
        ui.add_space(24.0);

        ui.horizontal(|ui| {
            let toggle_width = 300.0;
            ui.add_space(((ui.available_width() - toggle_width) / 2.0).max(0.0));
            for cycle in [BillingCycle::Monthly, BillingCycle::Annual] {
                ui.selectable_value(
                    &mut self.billing_cycle,
                    cycle,
                    RichText::new(cycle.label()).size(15.0),
                );
            }
        });
        ui.add_space(16.0);

        let mut chosen: Option<&'static PricingPlan> = None;
        let cycle = self.billing_cycle;
        let per_row = columns_for(narrow, PLANS.len());
        for row in PLANS.chunks(per_row) {
            ui.columns(per_row, |columns| {
                for (column, plan) in columns.iter_mut().zip(row) {
                    if render_plan_card(column, &theme, plan, cycle) {
                        chosen = Some(plan);
                    }
                }
            });
            ui.add_space(12.0);
        }
        if let Some(plan) = chosen {
            log::info!("Plan '{}' selected ({:?})", plan.name, cycle);
            self.open_external(ExternalLink::Register);
        }

        ui.add_space(SECTION_SPACING);
        section_heading(ui, &theme, "Pricing questions", "");
        render_faq(ui, &theme, PRICING_FAQ, &mut self.pricing_faq);
        ui.add_space(SECTION_SPACING / 2.0);
    }
}

/// Returns true when the plan's call-to-action was clicked
fn render_plan_card(
    ui: &mut egui::Ui,
    theme: &SiteTheme,
    plan: &PricingPlan,
    cycle: BillingCycle,
) -> bool {
    let mut clicked = false;
    card_frame(theme, plan.highlighted).show(ui, |ui| {
        ui.set_min_height(320.0);
        if plan.highlighted {
            ui.label(RichText::new("MOST POPULAR").size(12.0).strong().color(theme.accent));
        }
        ui.label(RichText::new(plan.name).size(22.0).strong().color(theme.text_primary));
        ui.label(RichText::new(plan.tagline).color(theme.text_secondary));
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            ui.label(
                RichText::new(plan.price_label(cycle))
                    .size(32.0)
                    .strong()
                    .color(theme.text_primary),
            );
            if plan.monthly_price_cents.is_some() {
                ui.label(RichText::new("/month").color(theme.text_secondary));
            }
        });
        if cycle == BillingCycle::Annual && plan.monthly_price_cents.is_some() {
            ui.label(RichText::new("billed yearly").size(12.0).color(theme.text_secondary));
        }
        ui.add_space(12.0);

        for feature in plan.features {
            ui.label(RichText::new(format!("✔ {}", feature)).color(theme.text_primary));
        }
        ui.add_space(16.0);

        let cta = if plan.monthly_price_cents.is_some() {
            "Start free trial"
        } else {
            "Contact sales"
        };
        clicked = primary_button(ui, theme, cta).clicked();
    });
    clicked
}
