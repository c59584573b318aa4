//! Game state and core simulation types
//!
//! Everything the update step mutates and the render step reads lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rng::RandomSource;
use crate::config::PongConfig;

/// Which side of the field (and which paddle) an event concerns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Left side, pointer-controlled
    Player,
    /// Right side, AI-controlled
    Ai,
}

/// The rectangular area paddles and ball move in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Clamp a paddle's top edge so the paddle stays fully on the field
    pub fn clamp_paddle_y(&self, y: f32, paddle_height: f32) -> f32 {
        y.min(self.height - paddle_height).max(0.0)
    }
}

/// A paddle. `x` is fixed per side; `y` is the top edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: String,
}

impl Paddle {
    /// Create a vertically centered paddle for the given side
    pub fn new(side: Side, field: &Playfield, config: &PongConfig) -> Self {
        let x = match side {
            Side::Player => config.paddle_margin,
            Side::Ai => field.width - config.paddle_margin - config.paddle_width,
        };
        Self {
            x,
            y: field.clamp_paddle_y((field.height - config.paddle_height) / 2.0, config.paddle_height),
            width: config.paddle_width,
            height: config.paddle_height,
            color: config.foreground.clone(),
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// True if `y` lies strictly inside the paddle's vertical span
    pub fn spans(&self, y: f32) -> bool {
        y > self.y && y < self.bottom()
    }

    /// Move the paddle's top edge, keeping it on the field
    pub fn set_y(&mut self, y: f32, field: &Playfield) {
        self.y = field.clamp_paddle_y(y, self.height);
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Launch speed used on every reset
    pub speed: f32,
    pub color: String,
}

impl Ball {
    /// Create a ball at the center of the field, launched in a random direction
    pub fn new(field: &Playfield, config: &PongConfig, rng: &mut impl RandomSource) -> Self {
        let mut ball = Self {
            pos: field.center(),
            vel: Vec2::ZERO,
            radius: config.ball_radius,
            speed: config.ball_speed,
            color: config.foreground.clone(),
        };
        ball.reset(field, rng);
        ball
    }

    /// Recenter and relaunch: horizontal ±speed, vertical speed * uniform(-1, 1)
    pub fn reset(&mut self, field: &Playfield, rng: &mut impl RandomSource) {
        self.pos = field.center();
        self.vel = Vec2::new(self.speed * rng.sign(), self.speed * rng.symmetric());
    }

    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub field: Playfield,
    /// Left paddle, pointer-controlled
    pub player: Paddle,
    /// Right paddle, AI-controlled
    pub ai: Paddle,
    pub ball: Ball,
    /// AI paddle speed per frame
    pub paddle_speed: f32,
    /// AI tolerance around its paddle center
    pub ai_dead_zone: f32,
    /// Amplitude of the random deflection on paddle hits
    pub hit_jitter: f32,
    /// Frames simulated so far
    pub frame: u64,
}

impl GameState {
    /// Create a new game for a field of the given size
    pub fn new(field: Playfield, config: &PongConfig, rng: &mut impl RandomSource) -> Self {
        Self {
            field,
            player: Paddle::new(Side::Player, &field, config),
            ai: Paddle::new(Side::Ai, &field, config),
            ball: Ball::new(&field, config, rng),
            paddle_speed: config.paddle_speed,
            ai_dead_zone: config.ai_dead_zone,
            hit_jitter: config.hit_jitter,
            frame: 0,
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Player => &self.player,
            Side::Ai => &self.ai,
        }
    }
}
