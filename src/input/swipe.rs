//! Vertical swipe decoding.
//!
//! Screen coordinates grow downwards, so a negative distance is an upward
//! swipe (yes) and a positive one a downward swipe (no).

use super::InputEvent;

/// Tracks one touch at a time and turns long vertical swipes into answers.
#[derive(Clone, Debug)]
pub struct SwipeTracker {
    threshold: f32,
    start: Option<f32>,
}

impl SwipeTracker {
    /// Create a tracker. Swipes must be strictly longer than `threshold`.
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            start: None,
        }
    }

    /// Record where a touch began.
    pub fn touch_start(&mut self, y: f32) {
        self.start = Some(y);
    }

    /// Finish the current touch.
    ///
    /// Returns an answer if the swipe was long enough. The start position is
    /// consumed either way.
    pub fn touch_end(&mut self, y: f32) -> Option<InputEvent> {
        let start = self.start.take()?;
        let distance = y - start;
        (distance.abs() > self.threshold).then_some(InputEvent::Answer(distance < 0.0))
    }

    /// Forget a touch in progress.
    pub fn cancel(&mut self) {
        self.start = None;
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(50.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swipe_up_is_yes() {
        let mut tracker = SwipeTracker::default();
        tracker.touch_start(400.0);
        assert_eq!(tracker.touch_end(300.0), Some(InputEvent::YES));
    }

    #[test]
    fn test_swipe_down_is_no() {
        let mut tracker = SwipeTracker::default();
        tracker.touch_start(300.0);
        assert_eq!(tracker.touch_end(400.0), Some(InputEvent::NO));
    }

    #[test]
    fn test_short_swipe_ignored() {
        let mut tracker = SwipeTracker::default();
        tracker.touch_start(300.0);
        assert_eq!(tracker.touch_end(350.0), None);

        // Start was consumed
        assert_eq!(tracker.touch_end(500.0), None);
    }

    #[test]
    fn test_end_without_start() {
        let mut tracker = SwipeTracker::new(10.0);
        assert_eq!(tracker.touch_end(0.0), None);
    }

    #[test]
    fn test_cancel() {
        let mut tracker = SwipeTracker::new(10.0);
        tracker.touch_start(0.0);
        tracker.cancel();
        assert_eq!(tracker.touch_end(100.0), None);
    }
}
