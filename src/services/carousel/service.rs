use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;

use super::state::{CarouselState, Direction};
use super::swipe::SwipeTracker;
use crate::models::settings::{AutoplayPolicy, CarouselSettings};
use crate::models::testimonial::{Testimonial, TESTIMONIALS, TESTIMONIAL_COUNT};
use crate::services::timer::{RepaintHook, ScopedInterval};

/// Testimonial carousel with autoplay, manual paging and swipe navigation.
///
/// Paging state is shared with the autoplay task, which only exists between
/// `mount` and `unmount`.
pub struct TestimonialCarousel {
    testimonials: &'static [Testimonial],
    state: Arc<Mutex<CarouselState>>,
    swipe: SwipeTracker,
    breakpoint: f32,
    autoplay_interval: Duration,
    autoplay_policy: AutoplayPolicy,
    autoplay: Option<ScopedInterval>,
}

impl TestimonialCarousel {
    pub fn new(settings: &CarouselSettings) -> Self {
        Self::with_testimonials(&TESTIMONIALS, TESTIMONIAL_COUNT, settings)
    }

    pub fn with_testimonials(
        testimonials: &'static [Testimonial],
        len: NonZeroUsize,
        settings: &CarouselSettings,
    ) -> Self {
        debug_assert_eq!(testimonials.len(), len.get());
        Self {
            testimonials,
            state: Arc::new(Mutex::new(CarouselState::new(len))),
            swipe: SwipeTracker::new(settings.swipe_threshold_px),
            breakpoint: settings.breakpoint_px,
            autoplay_interval: Duration::from_millis(settings.autoplay_interval_ms),
            autoplay_policy: settings.autoplay_policy,
            autoplay: None,
        }
    }

    /// Apply the viewport width and start autoplay. Mounting twice restarts the timer.
    pub fn mount(&mut self, runtime: &Handle, viewport_width: f32, repaint: RepaintHook) {
        self.lock_state().resize(viewport_width, self.breakpoint);

        let state = Arc::clone(&self.state);
        let interval = ScopedInterval::spawn(runtime, self.autoplay_interval, move || {
            let index = {
                let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);
                state.advance(Direction::Forward);
                state.current_index()
            };
            log::trace!("carousel autoplay advanced to {}", index);
            repaint();
        });

        log::info!(
            "Testimonial carousel mounted (autoplay every {:?}, {:?})",
            interval.period(),
            self.autoplay_policy
        );
        self.autoplay = Some(interval);
    }

    /// Stop autoplay and forget any gesture in progress
    pub fn unmount(&mut self) {
        if let Some(interval) = self.autoplay.take() {
            interval.cancel();
            log::info!("Testimonial carousel unmounted");
        }
        self.swipe.cancel();
    }

    pub fn is_mounted(&self) -> bool {
        self.autoplay.as_ref().is_some_and(ScopedInterval::is_active)
    }

    pub fn resize(&mut self, viewport_width: f32) {
        let changed = self.lock_state().resize(viewport_width, self.breakpoint);
        if changed {
            log::debug!("carousel resized for viewport width {}", viewport_width);
            self.on_manual_change();
        }
    }

    pub fn advance(&mut self, direction: Direction) {
        let (changed, index) = {
            let mut state = self.lock_state();
            let changed = state.advance(direction);
            (changed, state.current_index())
        };
        log::debug!("carousel moved {:?} to {}", direction, index);
        if changed {
            self.on_manual_change();
        }
    }

    pub fn next(&mut self) {
        self.advance(Direction::Forward);
    }

    pub fn previous(&mut self) {
        self.advance(Direction::Backward);
    }

    pub fn touch_start(&mut self, x: f32) {
        self.swipe.start(x);
    }

    pub fn touch_end(&mut self, x: f32) {
        if let Some(direction) = self.swipe.end(x) {
            self.advance(direction);
        }
    }

    /// Copy of the current paging state
    pub fn snapshot(&self) -> CarouselState {
        *self.lock_state()
    }

    /// Testimonials in the current slide window
    pub fn visible(&self) -> Vec<&'static Testimonial> {
        let testimonials = self.testimonials;
        self.lock_state()
            .visible_indices()
            .filter_map(|index| testimonials.get(index))
            .collect()
    }

    fn on_manual_change(&self) {
        if self.autoplay_policy != AutoplayPolicy::ResetOnInteraction {
            return;
        }
        if let Some(interval) = &self.autoplay {
            interval.restart();
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, CarouselState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for TestimonialCarousel {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_follows_index() {
        let mut carousel = TestimonialCarousel::new(&CarouselSettings::default());
        let first = carousel.visible();
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].brand, TESTIMONIALS[0].brand);
        assert_eq!(first[1].brand, TESTIMONIALS[1].brand);

        carousel.next();
        let second = carousel.visible();
        assert_eq!(second[0].brand, TESTIMONIALS[2].brand);
        assert_eq!(second[1].brand, TESTIMONIALS[3].brand);
    }

    #[test]
    fn test_navigation_works_unmounted() {
        let mut carousel = TestimonialCarousel::new(&CarouselSettings::default());
        assert!(!carousel.is_mounted());
        carousel.previous();
        assert_eq!(carousel.snapshot().current_index(), 4);
    }

    #[test]
    fn test_swipe_uses_configured_threshold() {
        let settings = CarouselSettings {
            swipe_threshold_px: 100.0,
            ..CarouselSettings::default()
        };
        let mut carousel = TestimonialCarousel::new(&settings);
        carousel.touch_start(300.0);
        carousel.touch_end(220.0);
        assert_eq!(carousel.snapshot().current_index(), 0);

        carousel.touch_start(300.0);
        carousel.touch_end(180.0);
        assert_eq!(carousel.snapshot().current_index(), 2);
    }

    #[test]
    fn test_resize_uses_configured_breakpoint() {
        let settings = CarouselSettings {
            breakpoint_px: 1024.0,
            ..CarouselSettings::default()
        };
        let mut carousel = TestimonialCarousel::new(&settings);
        carousel.resize(900.0);
        assert_eq!(carousel.snapshot().slides_to_show(), 1);
        carousel.resize(1025.0);
        assert_eq!(carousel.snapshot().slides_to_show(), 2);
    }
}
