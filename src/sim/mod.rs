//! Simulation module
//!
//! All gameplay logic lives here. No rendering or platform dependencies;
//! randomness only through a `RandomSource`.

pub mod collision;
pub mod rng;
pub mod state;
pub mod tick;

pub use collision::{ball_hits_paddle, ball_hits_wall, ball_out_of_bounds, flush_x};
pub use rng::{FixedRandom, RandomSource, SeededRng};
pub use state::{Ball, GameState, Paddle, Playfield, Side};
pub use tick::{TickInput, TickReport, tick, track_ball};
