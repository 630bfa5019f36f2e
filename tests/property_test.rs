// Property-based tests for carousel paging and countdown ticking

mod fixtures;

use fixtures::six;
use proptest::prelude::*;
use storefront_site::models::countdown::Countdown;
use storefront_site::services::carousel::{CarouselState, Direction};

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Forward), Just(Direction::Backward)]
}

fn countdown() -> impl Strategy<Value = Countdown> {
    (0..10u32, 0..24u32, 0..60u32, 0..60u32)
        .prop_map(|(d, h, m, s)| Countdown::new(d, h, m, s).unwrap())
}

proptest! {
    /// Property: no sequence of moves or resizes leaves the index out of range
    #[test]
    fn prop_index_stays_in_range(
        start in 0..6usize,
        moves in prop::collection::vec((direction(), 200.0f32..2000.0), 0..50),
    ) {
        let mut state = CarouselState::with_index(six(), start);
        for (direction, width) in moves {
            state.resize(width, 768.0);
            state.advance(direction);
            prop_assert!(state.current_index() < 6);
            prop_assert!(state.slides_to_show() == 1 || state.slides_to_show() == 2);
        }
    }

    /// Property: forward then backward is the identity for a fixed window size
    #[test]
    fn prop_forward_backward_roundtrip(start in 0..6usize, width in 200.0f32..2000.0) {
        let mut state = CarouselState::with_index(six(), start);
        state.resize(width, 768.0);
        state.advance(Direction::Forward);
        state.advance(Direction::Backward);
        prop_assert_eq!(state.current_index(), start);
    }

    /// Property: the visible window is consecutive modulo the list length
    #[test]
    fn prop_window_is_consecutive(start in 0..6usize, width in 200.0f32..2000.0) {
        let mut state = CarouselState::with_index(six(), start);
        state.resize(width, 768.0);
        let visible: Vec<usize> = state.visible_indices().collect();
        prop_assert_eq!(visible.len(), state.slides_to_show());
        for (offset, index) in visible.iter().enumerate() {
            prop_assert_eq!(*index, (start + offset) % 6);
        }
    }

    /// Property: every non-terminal tick removes exactly one second
    #[test]
    fn prop_tick_removes_one_second(start in countdown()) {
        let mut ticked = start;
        let changed = ticked.tick();
        if start.is_zero() {
            prop_assert!(!changed);
            prop_assert_eq!(ticked, start);
        } else {
            prop_assert!(changed);
            prop_assert_eq!(ticked.total_seconds() + 1, start.total_seconds());
            prop_assert!(ticked.validate().is_ok());
        }
    }
}
