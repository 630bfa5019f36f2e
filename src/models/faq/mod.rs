// FAQ model
// Question/answer pairs for the landing and pricing accordions

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const LANDING_FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "How long does it take to launch a store?",
        answer: "Most merchants publish their first storefront within a day. Import your catalog from a CSV or another platform, pick a theme, connect payments and you're live.",
    },
    FaqEntry {
        question: "Can I bring my own domain?",
        answer: "Yes. Point your domain's DNS at Storefront and we provision and renew the TLS certificate automatically.",
    },
    FaqEntry {
        question: "Which payment providers are supported?",
        answer: "Stripe, PayPal, Adyen and Klarna are built in. Local payment methods are enabled per market from the payments settings.",
    },
    FaqEntry {
        question: "Do you take a cut of my sales?",
        answer: "No transaction fees on any plan. You only pay your subscription and your payment provider's processing fees.",
    },
];

pub const PRICING_FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "Is there a free trial?",
        answer: "Every plan starts with a 14-day trial. No credit card is required until you decide to publish.",
    },
    FaqEntry {
        question: "Can I switch plans later?",
        answer: "Upgrade or downgrade at any time. Changes are prorated to the day on your next invoice.",
    },
    FaqEntry {
        question: "How does annual billing work?",
        answer: "Annual plans are billed once a year and cost 20% less than paying month to month.",
    },
    FaqEntry {
        question: "What happens when the launch offer ends?",
        answer: "Anyone who subscribes before the countdown reaches zero keeps the discounted price for as long as the subscription stays active.",
    },
];
