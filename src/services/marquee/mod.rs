mod logos;
mod scroll;

pub use logos::{decode_png_rgba, DecodedImage, LogoSource, LogoStrip, ResolvedLogo};
pub use scroll::MarqueeScroll;
