//! Frame driver
//!
//! Owns the game state, random source and pending pointer input. Each frame
//! is an update followed by a render; the host only decides when frames run.

use crate::config::PongConfig;
use crate::input::PointerInput;
use crate::renderer::{Surface, Theme, render};
use crate::sim::{GameState, Playfield, RandomSource, TickInput, TickReport, tick};

/// Drives update/render for one game
pub struct FrameDriver<R: RandomSource> {
    state: GameState,
    theme: Theme,
    rng: R,
    pointer: PointerInput,
}

impl<R: RandomSource> FrameDriver<R> {
    pub fn new(field: Playfield, config: &PongConfig, mut rng: R) -> Self {
        let state = GameState::new(field, config, &mut rng);
        Self {
            state,
            theme: Theme::from(config),
            rng,
            pointer: PointerInput::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for hosts and tests that need to stage a position
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Record a pointer move (relative to the surface top)
    pub fn pointer_moved(&mut self, pointer_y: f32) {
        self.pointer
            .pointer_moved(pointer_y, self.state.player.height, &self.state.field);
    }

    /// Advance one frame without drawing
    pub fn update(&mut self) -> TickReport {
        let input = TickInput {
            player_y: self.pointer.take(),
        };
        tick(&mut self.state, &input, &mut self.rng)
    }

    /// Update then render
    pub fn frame(&mut self, surface: &mut impl Surface) -> TickReport {
        let report = self.update();
        render(&self.state, &self.theme, surface);
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, DrawList};
    use crate::sim::{FixedRandom, Side};
    use glam::Vec2;

    fn driver() -> FrameDriver<FixedRandom> {
        FrameDriver::new(
            Playfield::new(800.0, 500.0),
            &PongConfig::default(),
            FixedRandom::new(&[0.75, 0.5]),
        )
    }

    #[test]
    fn test_update_consumes_latest_pointer() {
        let mut driver = driver();
        driver.pointer_moved(100.0);
        driver.pointer_moved(200.0);

        driver.update();
        assert_eq!(driver.state().player.y, 160.0);

        driver.update();
        assert_eq!(driver.state().player.y, 160.0);
    }

    #[test]
    fn test_frame_renders_updated_state() {
        let mut driver = driver();
        let mut list = DrawList::new();

        driver.frame(&mut list);

        // Ball launched right at 6/frame from the center
        assert_eq!(driver.state().ball.pos, Vec2::new(406.0, 250.0));
        assert_eq!(
            list.commands().last(),
            Some(&DrawCommand::Circle {
                center: Vec2::new(406.0, 250.0),
                radius: 10.0,
                color: "#fff".into(),
            })
        );
    }

    #[test]
    fn test_update_reports_reset() {
        let mut driver = driver();
        let state = driver.state_mut();
        state.player.set_y(0.0, &state.field);
        state.ball.pos = Vec2::new(12.0, 250.0);
        state.ball.vel = Vec2::new(-6.0, 0.0);

        let report = driver.update();

        assert_eq!(report.conceded, Some(Side::Player));
        assert_eq!(driver.state().ball.pos, Vec2::new(400.0, 250.0));
    }
}
