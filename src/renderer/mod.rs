//! Rendering module
//!
//! The draw step is a pure function of `GameState` painted onto a `Surface`.
//! The browser build paints onto a 2D canvas; headless runs and tests record
//! into a `DrawList`.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod draw_list;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use draw_list::{DrawCommand, DrawList};

use glam::Vec2;

use crate::sim::{GameState, Paddle};

/// A 2D drawing target
pub trait Surface {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str);
    fn dashed_line(&mut self, from: Vec2, to: Vec2, dash: [f32; 2], color: &str);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str);
}

/// Colors and net pattern used by the draw step
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: String,
    pub net: String,
    pub net_dash: [f32; 2],
}

impl From<&crate::PongConfig> for Theme {
    fn from(config: &crate::PongConfig) -> Self {
        Self {
            background: config.background.clone(),
            net: config.foreground.clone(),
            net_dash: config.net_dash,
        }
    }
}

/// Paint one frame: background, net, player paddle, AI paddle, ball
pub fn render(state: &GameState, theme: &Theme, surface: &mut impl Surface) {
    let field = &state.field;

    surface.fill_rect(0.0, 0.0, field.width, field.height, &theme.background);

    let mid = field.width / 2.0;
    surface.dashed_line(
        Vec2::new(mid, 0.0),
        Vec2::new(mid, field.height),
        theme.net_dash,
        &theme.net,
    );

    draw_paddle(&state.player, surface);
    draw_paddle(&state.ai, surface);

    let ball = &state.ball;
    surface.fill_circle(ball.pos, ball.radius, &ball.color);
}

fn draw_paddle(paddle: &Paddle, surface: &mut impl Surface) {
    surface.fill_rect(paddle.x, paddle.y, paddle.width, paddle.height, &paddle.color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PongConfig;
    use crate::sim::{FixedRandom, Playfield};

    fn setup() -> (GameState, Theme) {
        let config = PongConfig::default();
        let mut rng = FixedRandom::new(&[0.75, 0.5]);
        let state = GameState::new(Playfield::new(800.0, 500.0), &config, &mut rng);
        (state, Theme::from(&config))
    }

    #[test]
    fn test_render_order() {
        let (state, theme) = setup();
        let mut list = DrawList::new();

        render(&state, &theme, &mut list);

        let commands = list.commands();
        assert_eq!(commands.len(), 5);
        assert_eq!(
            commands[0],
            DrawCommand::Rect { x: 0.0, y: 0.0, w: 800.0, h: 500.0, color: "#000".into() }
        );
        assert_eq!(
            commands[1],
            DrawCommand::DashedLine {
                from: Vec2::new(400.0, 0.0),
                to: Vec2::new(400.0, 500.0),
                dash: [6.0, 12.0],
                color: "#fff".into(),
            }
        );
        assert_eq!(
            commands[2],
            DrawCommand::Rect { x: 20.0, y: 210.0, w: 12.0, h: 80.0, color: "#fff".into() }
        );
        assert_eq!(
            commands[3],
            DrawCommand::Rect { x: 768.0, y: 210.0, w: 12.0, h: 80.0, color: "#fff".into() }
        );
        assert_eq!(
            commands[4],
            DrawCommand::Circle { center: Vec2::new(400.0, 250.0), radius: 10.0, color: "#fff".into() }
        );
    }

    #[test]
    fn test_render_reflects_state() {
        let (mut state, theme) = setup();
        state.ball.pos = Vec2::new(123.0, 45.0);
        state.ai.set_y(0.0, &state.field);
        let mut list = DrawList::new();

        render(&state, &theme, &mut list);

        assert!(matches!(
            list.commands()[3],
            DrawCommand::Rect { y, .. } if y == 0.0
        ));
        assert!(matches!(
            list.commands()[4],
            DrawCommand::Circle { center, .. } if center == Vec2::new(123.0, 45.0)
        ));
    }
}
