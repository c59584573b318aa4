//! Canvas Pong - classic single-screen Pong, player vs. AI
//!
//! Core modules:
//! - `sim`: Simulation (game state, collisions, per-frame update)
//! - `renderer`: Draw step over a `Surface` (canvas or recorded draw list)
//! - `input`: Pointer input, latched between frames
//! - `driver`: Frame driver tying update and render together
//! - `config`: Geometry/speed/color configuration
//! - `platform`: Browser glue errors

pub mod config;
pub mod driver;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::PongConfig;
pub use driver::FrameDriver;

/// Game configuration constants
pub mod consts {
    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    /// Gap between the player paddle and the left edge (mirrored for the AI)
    pub const PADDLE_MARGIN: f32 = 20.0;
    /// AI paddle speed (units per frame)
    pub const PADDLE_SPEED: f32 = 6.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Ball launch speed (units per frame)
    pub const BALL_SPEED: f32 = 6.0;
    /// Random vertical deflection added on paddle hits, in [-HIT_JITTER, HIT_JITTER)
    pub const HIT_JITTER: f32 = 1.0;

    /// AI tolerance around its paddle center
    pub const AI_DEAD_ZONE: f32 = 10.0;

    /// Net dash pattern (dash, gap)
    pub const NET_DASH: [f32; 2] = [6.0, 12.0];

    /// Frames run by the native headless binary
    pub const HEADLESS_FRAMES: u64 = 600;
}
