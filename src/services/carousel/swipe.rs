use super::state::Direction;

/// Turns a press/release pair of horizontal positions into a navigation direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeTracker {
    threshold: f32,
    start_x: Option<f32>,
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            start_x: None,
        }
    }

    pub fn start(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Finish the gesture. A finger moving right reveals the previous slides,
    /// moving left reveals the next ones. Short moves are ignored.
    pub fn end(&mut self, x: f32) -> Option<Direction> {
        let start_x = self.start_x.take()?;
        let delta = x - start_x;
        if delta.abs() <= self.threshold {
            return None;
        }
        if delta > 0.0 {
            Some(Direction::Backward)
        } else {
            Some(Direction::Forward)
        }
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
    }

    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }
}
