mod service;
mod state;
mod swipe;

pub use service::TestimonialCarousel;
pub use state::{CarouselState, Direction, WIDE_SLIDES};
pub use swipe::SwipeTracker;
