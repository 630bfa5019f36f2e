use super::state::{ExternalLink, Page};
use super::SiteApp;

impl SiteApp {
    /// Picks the page for the next frame, which mounts its widgets before drawing
    pub(super) fn switch_page(&mut self, ctx: &egui::Context, page: Page) {
        if self.current_page == page {
            return;
        }
        log::info!("Switching page {:?} -> {:?}", self.current_page, page);
        self.current_page = page;
        ctx.request_repaint();
    }

    pub(super) fn open_external(&self, link: ExternalLink) {
        let links = &self.settings.links;
        let url = match link {
            ExternalLink::Register => links.register_url(),
            ExternalLink::Login => links.login_url(),
            ExternalLink::Dashboard => links.dashboard_url(),
        };

        log::debug!("Opening {:?} at {}", link, url);
        if let Err(e) = webbrowser::open(&url) {
            log::warn!("Failed to open {} in browser: {}", url, e);
        }
    }
}
