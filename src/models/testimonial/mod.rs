// Testimonial model
// Fixed customer quotes shown in the landing page carousel

use std::num::NonZeroUsize;

/// A single customer quote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub brand: &'static str,
    pub headline: &'static str,
    pub text: &'static str,
    pub person: &'static str,
    pub title: &'static str,
}

pub const TESTIMONIAL_COUNT: NonZeroUsize = match NonZeroUsize::new(TESTIMONIALS.len()) {
    Some(count) => count,
    None => panic!("testimonial list must not be empty"),
};

pub const TESTIMONIALS: [Testimonial; 6] = [
    Testimonial {
        brand: "Northwind Goods",
        headline: "Checkout conversion up 31% in a quarter",
        text: "We moved three storefronts over in a weekend. The one-page checkout alone paid for the subscription before the first invoice arrived.",
        person: "Amara Okafor",
        title: "Head of E-commerce, Northwind Goods",
    },
    Testimonial {
        brand: "Harbor & Pine",
        headline: "Inventory finally matches the warehouse",
        text: "Stock syncs across our marketplaces every few seconds. Overselling used to be a weekly fire drill; now it simply doesn't happen.",
        person: "Lukas Brandt",
        title: "Operations Lead, Harbor & Pine",
    },
    Testimonial {
        brand: "Lumen Apparel",
        headline: "Launch days without the panic",
        text: "Our last drop hit 40,000 visitors in ten minutes. The store stayed fast and the analytics told us exactly which sizes to restock.",
        person: "Priya Raman",
        title: "Founder, Lumen Apparel",
    },
    Testimonial {
        brand: "Copperleaf Tea",
        headline: "Subscriptions that run themselves",
        text: "Recurring orders, skipped months, gift boxes. Everything our customers asked for was already a toggle in the dashboard.",
        person: "Daniel Whitfield",
        title: "Managing Director, Copperleaf Tea",
    },
    Testimonial {
        brand: "Atlas Outdoor",
        headline: "One catalog, five countries",
        text: "Localized pricing and tax handling let us open in four new markets without hiring a single extra person for the back office.",
        person: "Sofia Marquez",
        title: "International Growth, Atlas Outdoor",
    },
    Testimonial {
        brand: "Kinfolk Ceramics",
        headline: "Support that answers like a teammate",
        text: "Every question we've had was answered within the hour by someone who understood small-batch retail. That matters more than any feature.",
        person: "Hiro Tanaka",
        title: "Co-owner, Kinfolk Ceramics",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_matches_list() {
        assert_eq!(TESTIMONIAL_COUNT.get(), 6);
    }

    #[test]
    fn test_every_testimonial_is_filled_in() {
        for testimonial in TESTIMONIALS.iter() {
            assert!(!testimonial.brand.is_empty());
            assert!(!testimonial.headline.is_empty());
            assert!(!testimonial.text.is_empty());
            assert!(!testimonial.person.is_empty());
            assert!(!testimonial.title.is_empty());
        }
    }
}
