// Logo model
// Customer brands shown in the landing page marquee

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Logo {
    /// Brand name, also used as the text placeholder
    pub name: &'static str,
    /// PNG file name inside the configured assets directory
    pub file: &'static str,
}

pub const CUSTOMER_LOGOS: &[Logo] = &[
    Logo { name: "Northwind Goods", file: "northwind.png" },
    Logo { name: "Harbor & Pine", file: "harbor-pine.png" },
    Logo { name: "Lumen Apparel", file: "lumen.png" },
    Logo { name: "Copperleaf Tea", file: "copperleaf.png" },
    Logo { name: "Atlas Outdoor", file: "atlas.png" },
    Logo { name: "Kinfolk Ceramics", file: "kinfolk.png" },
    Logo { name: "Brightwater", file: "brightwater.png" },
    Logo { name: "Oak & Ember", file: "oak-ember.png" },
];
