// Integration tests for testimonial carousel paging, resizing and swiping

mod fixtures;

use fixtures::six;
use storefront_site::models::settings::CarouselSettings;
use storefront_site::models::testimonial::TESTIMONIALS;
use storefront_site::services::carousel::{CarouselState, Direction, TestimonialCarousel};
use test_case::test_case;

#[test_case(320.0 => 1 ; "phone")]
#[test_case(768.0 => 1 ; "exactly at breakpoint")]
#[test_case(768.5 => 2 ; "just above breakpoint")]
#[test_case(1440.0 => 2 ; "desktop")]
fn resize_picks_slide_count(width: f32) -> usize {
    let mut state = CarouselState::new(six());
    state.resize(width, 768.0);
    state.slides_to_show()
}

#[test]
fn resize_is_idempotent() {
    let mut state = CarouselState::with_index(six(), 3);
    state.resize(500.0, 768.0);
    let once = state;
    assert!(!state.resize(500.0, 768.0));
    assert_eq!(state, once);
}

#[test_case(0.0, 40.0 => 0 ; "small rightward move ignored")]
#[test_case(100.0, 50.0 => 0 ; "exactly threshold ignored")]
#[test_case(100.0, 40.0 => 2 ; "leftward swipe advances")]
#[test_case(100.0, 160.0 => 4 ; "rightward swipe goes back")]
fn swipe_moves_carousel(start: f32, end: f32) -> usize {
    let mut carousel = TestimonialCarousel::new(&CarouselSettings::default());
    carousel.touch_start(start);
    carousel.touch_end(end);
    carousel.snapshot().current_index()
}

#[test]
fn wide_window_walkthrough() {
    let mut carousel = TestimonialCarousel::new(&CarouselSettings::default());
    carousel.resize(1280.0);

    let brands = |c: &TestimonialCarousel| c.visible().iter().map(|t| t.brand).collect::<Vec<_>>();

    assert_eq!(brands(&carousel), vec![TESTIMONIALS[0].brand, TESTIMONIALS[1].brand]);
    carousel.next();
    assert_eq!(brands(&carousel), vec![TESTIMONIALS[2].brand, TESTIMONIALS[3].brand]);
    carousel.next();
    assert_eq!(carousel.snapshot().current_index(), 4);
    carousel.next();
    assert_eq!(carousel.snapshot().current_index(), 0);
}

#[test]
fn narrow_window_steps_one_at_a_time() {
    let mut carousel = TestimonialCarousel::new(&CarouselSettings::default());
    carousel.resize(600.0);
    carousel.next();
    assert_eq!(carousel.snapshot().current_index(), 1);
    assert_eq!(carousel.visible().len(), 1);
    carousel.previous();
    carousel.previous();
    assert_eq!(carousel.snapshot().current_index(), 5);
}

#[test]
fn advance_forward_then_back_restores_index() {
    for start in 0..6 {
        for width in [400.0, 1200.0] {
            let mut state = CarouselState::with_index(six(), start);
            state.resize(width, 768.0);
            state.advance(Direction::Forward);
            state.advance(Direction::Backward);
            assert_eq!(state.current_index(), start);
        }
    }
}
