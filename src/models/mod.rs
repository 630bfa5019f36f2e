// Module exports for models
// Static page content and the value types the widgets operate on

pub mod content;
pub mod countdown;
pub mod faq;
pub mod logo;
pub mod pricing;
pub mod settings;
pub mod testimonial;
