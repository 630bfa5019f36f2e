//! Pricing plans and billing cycle math.

/// Percentage of the monthly list price charged on annual billing
pub const ANNUAL_PRICE_PERCENT: u32 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BillingCycle {
    #[default]
    Monthly,
    Annual,
}

impl BillingCycle {
    pub fn label(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "Monthly",
            BillingCycle::Annual => "Annual (save 20%)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingPlan {
    pub name: &'static str,
    pub tagline: &'static str,
    /// `None` for plans quoted on request
    pub monthly_price_cents: Option<u32>,
    pub features: &'static [&'static str],
    pub highlighted: bool,
}

impl PricingPlan {
    /// Effective per-month price in cents for the given billing cycle
    pub fn monthly_price(&self, cycle: BillingCycle) -> Option<u32> {
        let list = self.monthly_price_cents?;
        match cycle {
            BillingCycle::Monthly => Some(list),
            BillingCycle::Annual => Some(list * ANNUAL_PRICE_PERCENT / 100),
        }
    }

    pub fn price_label(&self, cycle: BillingCycle) -> String {
        match self.monthly_price(cycle) {
            Some(cents) => format_price(cents),
            None => "Custom".to_string(),
        }
    }
}

/// Format cents as dollars, dropping the fraction for whole amounts
pub fn format_price(cents: u32) -> String {
    let dollars = cents / 100;
    let remainder = cents % 100;
    if remainder == 0 {
        format!("${}", dollars)
    } else {
        format!("${}.{:02}", dollars, remainder)
    }
}

pub const PLANS: &[PricingPlan] = &[
    PricingPlan {
        name: "Starter",
        tagline: "For new brands making their first sales",
        monthly_price_cents: Some(2_900),
        features: &[
            "1 storefront",
            "Up to 500 products",
            "One-page checkout",
            "Email support",
        ],
        highlighted: false,
    },
    PricingPlan {
        name: "Growth",
        tagline: "For teams selling across channels",
        monthly_price_cents: Some(7_900),
        features: &[
            "3 storefronts",
            "Unlimited products",
            "Marketplace inventory sync",
            "Subscriptions",
            "Priority support",
        ],
        highlighted: true,
    },
    PricingPlan {
        name: "Scale",
        tagline: "For high-volume international brands",
        monthly_price_cents: Some(24_900),
        features: &[
            "Unlimited storefronts",
            "Localized pricing and tax",
            "Advanced analytics",
            "Dedicated success manager",
        ],
        highlighted: false,
    },
    PricingPlan {
        name: "Enterprise",
        tagline: "Custom contracts and SLAs",
        monthly_price_cents: None,
        features: &[
            "Everything in Scale",
            "99.99% uptime SLA",
            "SSO and audit logs",
            "Custom integrations",
        ],
        highlighted: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_price_is_list_price() {
        assert_eq!(PLANS[0].monthly_price(BillingCycle::Monthly), Some(2_900));
    }

    #[test]
    fn test_annual_price_applies_discount() {
        assert_eq!(PLANS[1].monthly_price(BillingCycle::Annual), Some(6_320));
        assert_eq!(PLANS[1].price_label(BillingCycle::Annual), "$63.20");
    }

    #[test]
    fn test_custom_plan_has_no_price() {
        let enterprise = PLANS.iter().find(|p| p.name == "Enterprise").unwrap();
        assert_eq!(enterprise.monthly_price(BillingCycle::Annual), None);
        assert_eq!(enterprise.price_label(BillingCycle::Monthly), "Custom");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(4_900), "$49");
        assert_eq!(format_price(3_920), "$39.20");
        assert_eq!(format_price(5), "$0.05");
    }

    #[test]
    fn test_exactly_one_plan_highlighted() {
        assert_eq!(PLANS.iter().filter(|p| p.highlighted).count(), 1);
    }
}
