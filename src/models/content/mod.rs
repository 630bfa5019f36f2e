// Static landing page copy

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Headline stat shown under the hero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const PRODUCT_NAME: &str = "Storefront";
pub const HERO_TITLE: &str = "Sell everywhere from one dashboard";
pub const HERO_SUBTITLE: &str = "Storefront gives growing brands a fast online store, synced inventory across every marketplace, and checkout that converts. No plugins, no transaction fees.";

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "🛒",
        title: "One-page checkout",
        description: "Address autocomplete, saved wallets and instant tax calculation in a single step.",
    },
    Feature {
        icon: "📦",
        title: "Inventory sync",
        description: "Stock levels update across your store and marketplaces within seconds of every sale.",
    },
    Feature {
        icon: "🌍",
        title: "Global selling",
        description: "Localized currencies, languages and tax rules for every market you open.",
    },
    Feature {
        icon: "📈",
        title: "Built-in analytics",
        description: "Revenue, cohort and product reports without wiring up a separate tool.",
    },
    Feature {
        icon: "🔁",
        title: "Subscriptions",
        description: "Recurring orders with skips, swaps and gifting handled out of the box.",
    },
    Feature {
        icon: "⚡",
        title: "Fast by default",
        description: "Edge-cached storefronts that stay quick on launch day traffic.",
    },
];

pub const STATS: &[Stat] = &[
    Stat { value: "12,000+", label: "active stores" },
    Stat { value: "$2.1B", label: "processed last year" },
    Stat { value: "99.99%", label: "checkout uptime" },
    Stat { value: "40+", label: "supported countries" },
];
