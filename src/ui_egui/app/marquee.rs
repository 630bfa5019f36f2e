use super::SiteApp;
use crate::services::marquee::LogoSource;
use egui::{pos2, vec2, Align2, Color32, FontId, Rect, Sense};

const STRIP_HEIGHT: f32 = 56.0;
const SLOT_WIDTH: f32 = 180.0;
const LOGO_PADDING: f32 = 12.0;

impl SiteApp {
    pub(super) fn render_marquee(&mut self, ui: &mut egui::Ui) {
        self.ensure_logo_textures(ui.ctx());

        let count = self.logos.logos().len();
        let (rect, response) =
            ui.allocate_exact_size(vec2(ui.available_width(), STRIP_HEIGHT), Sense::hover());
        if count == 0 {
            return;
        }

        let strip_width = SLOT_WIDTH * count as f32;
        self.marquee.set_hovered(response.hovered());
        let dt = ui.input(|i| i.stable_dt);
        self.marquee.advance(dt, strip_width);

        let painter = ui.painter_at(rect);
        let offset = self.marquee.offset();
        // Enough repetitions of the strip to cover the visible width after wrapping
        let copies = (rect.width() / strip_width).ceil() as usize + 1;
        let textures = self.logo_textures.as_deref().unwrap_or_default();

        for slot_index in 0..copies * count {
            let logo_index = slot_index % count;
            let x = rect.left() - offset + slot_index as f32 * SLOT_WIDTH;
            let slot = Rect::from_min_size(pos2(x, rect.top()), vec2(SLOT_WIDTH, STRIP_HEIGHT));
            if slot.right() < rect.left() || slot.left() > rect.right() {
                continue;
            }

            let logo = &self.logos.logos()[logo_index];
            match (&logo.source, textures.get(logo_index).and_then(Option::as_ref)) {
                (LogoSource::Image(image), Some(texture)) => {
                    let max = slot.shrink(LOGO_PADDING);
                    let aspect = image.width as f32 / image.height.max(1) as f32;
                    let height = max.height().min(max.width() / aspect.max(f32::EPSILON));
                    let size = vec2(height * aspect, height);
                    let target = Rect::from_center_size(slot.center(), size);
                    painter.image(
                        texture.id(),
                        target,
                        Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
                        Color32::WHITE,
                    );
                }
                _ => {
                    painter.text(
                        slot.center(),
                        Align2::CENTER_CENTER,
                        logo.name,
                        FontId::proportional(18.0),
                        self.theme.text_secondary,
                    );
                }
            }
        }

        if !self.marquee.is_paused() {
            ui.ctx().request_repaint();
        }
    }

    /// Upload decoded logos once; placeholders get no texture
    fn ensure_logo_textures(&mut self, ctx: &egui::Context) {
        if self.logo_textures.is_some() {
            return;
        }

        let textures = self
            .logos
            .logos()
            .iter()
            .map(|logo| match &logo.source {
                LogoSource::Image(image) => {
                    let color_image = egui::ColorImage::from_rgba_unmultiplied(
                        [image.width as usize, image.height as usize],
                        &image.rgba,
                    );
                    Some(ctx.load_texture(
                        format!("logo-{}", logo.name),
                        color_image,
                        egui::TextureOptions::LINEAR,
                    ))
                }
                LogoSource::Placeholder(_) => None,
            })
            .collect();
        self.logo_textures = Some(textures);
    }
}
