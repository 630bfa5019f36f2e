//! Circular paging over a fixed-length list.
//!
//! `current_index` always stays inside `[0, len)`. The visible window is
//! derived from `(current_index, slides_to_show)` on demand and never cached.

use std::num::NonZeroUsize;

/// Slides shown side by side above the responsive breakpoint
pub const WIDE_SLIDES: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    len: NonZeroUsize,
    current_index: usize,
    slides_to_show: usize,
}

impl CarouselState {
    pub fn new(len: NonZeroUsize) -> Self {
        Self {
            len,
            current_index: 0,
            slides_to_show: WIDE_SLIDES.min(len.get()),
        }
    }

    /// Start from an arbitrary index, wrapped into range
    pub fn with_index(len: NonZeroUsize, index: usize) -> Self {
        Self {
            current_index: index % len.get(),
            ..Self::new(len)
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn slides_to_show(&self) -> usize {
        self.slides_to_show
    }

    /// Pick the slide count for a viewport width. Returns true if it changed.
    pub fn resize(&mut self, viewport_width: f32, breakpoint: f32) -> bool {
        let wanted = if viewport_width <= breakpoint {
            1
        } else {
            WIDE_SLIDES
        };
        let clamped = wanted.min(self.len.get());
        if clamped == self.slides_to_show {
            return false;
        }
        self.slides_to_show = clamped;
        true
    }

    /// Move a whole window forward or backward, wrapping at both ends.
    /// Returns true if the index changed.
    pub fn advance(&mut self, direction: Direction) -> bool {
        let len = self.len.get();
        let step = self.slides_to_show % len;
        let previous = self.current_index;
        self.current_index = match direction {
            Direction::Forward => (self.current_index + step) % len,
            Direction::Backward => (self.current_index + len - step) % len,
        };
        self.current_index != previous
    }

    /// Indices of the visible slides, in display order
    pub fn visible_indices(&self) -> impl Iterator<Item = usize> {
        let len = self.len.get();
        let start = self.current_index;
        (0..self.slides_to_show).map(move |offset| (start + offset) % len)
    }

    /// Page number (0-based) used for the dot indicators
    pub fn page(&self) -> usize {
        self.current_index / self.slides_to_show
    }

    pub fn page_count(&self) -> usize {
        self.len.get().div_ceil(self.slides_to_show)
    }
}
