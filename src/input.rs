//! Pointer input handling
//!
//! Pointer events arrive between frames; only the latest one matters. The
//! stored target is consumed once by the next update.

use crate::sim::Playfield;

/// Latest pointer-derived player paddle target
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerInput {
    pending: Option<f32>,
}

impl PointerInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer move at `pointer_y` (relative to the surface top).
    /// Centers the paddle on the pointer, clamped to the field.
    pub fn pointer_moved(&mut self, pointer_y: f32, paddle_height: f32, field: &Playfield) {
        let y = pointer_y - paddle_height / 2.0;
        self.pending = Some(field.clamp_paddle_y(y, paddle_height));
    }

    /// Take the pending target, if any
    pub fn take(&mut self) -> Option<f32> {
        self.pending.take()
    }

    pub fn peek(&self) -> Option<f32> {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> Playfield {
        Playfield::new(800.0, 500.0)
    }

    #[test]
    fn test_pointer_centers_paddle() {
        let mut input = PointerInput::new();
        input.pointer_moved(250.0, 80.0, &field());
        assert_eq!(input.take(), Some(210.0));
    }

    #[test]
    fn test_pointer_target_is_clamped() {
        let mut input = PointerInput::new();
        input.pointer_moved(5.0, 80.0, &field());
        assert_eq!(input.peek(), Some(0.0));

        input.pointer_moved(499.0, 80.0, &field());
        assert_eq!(input.peek(), Some(420.0));
    }

    #[test]
    fn test_latest_event_wins_and_is_consumed_once() {
        let mut input = PointerInput::new();
        input.pointer_moved(100.0, 80.0, &field());
        input.pointer_moved(300.0, 80.0, &field());

        assert_eq!(input.take(), Some(260.0));
        assert_eq!(input.take(), None);
    }
}
