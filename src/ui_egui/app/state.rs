#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Landing,
    Pricing,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Landing => "Product",
            Page::Pricing => "Pricing",
        }
    }
}

/// Destinations outside this app, opened in the system browser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalLink {
    Register,
    Login,
    Dashboard,
}
