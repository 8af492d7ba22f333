//! Firework rocket: rises on a negative vertical velocity and detonates at
//! apex or when its fuse runs out, whichever comes first.

use glam::Vec2;

use super::palette::Hue;
use super::particle::Particle;
use super::rng::Rng;

#[derive(Debug, Clone)]
pub struct Rocket {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Base hue handed to the burst on detonation.
    pub hue: Hue,
    /// Seconds of flight left before a forced detonation.
    pub fuse: f32,
}

impl Rocket {
    /// Rockets feel a quarter of the particle gravity while climbing.
    pub const GRAVITY_FACTOR: f32 = 0.25;
    /// Vertical velocity at which the climb counts as over.
    pub const APEX_VY: f32 = -0.5;
    /// Nominal frame duration used to burn the fuse.
    pub const FRAME_DT: f32 = 0.016;
    /// Rendered dot size while climbing.
    pub const RENDER_SIZE: f32 = 2.0;
    /// Rendered opacity while climbing.
    pub const RENDER_ALPHA: f32 = 0.9;

    /// Launch a rocket straight up from `origin` with a little horizontal
    /// scatter, a random hue, and a 0.8..1.2 s fuse.
    pub fn launch(origin: Vec2, rng: &mut Rng) -> Self {
        Rocket {
            pos: origin,
            vel: Vec2::new(rng.range(-1.0, 1.0), rng.range(-10.5, -8.5)),
            hue: Hue::random(rng),
            fuse: rng.range(0.8, 1.2),
        }
    }

    /// Advance one step. Returns true when the rocket should detonate at
    /// its current position.
    pub fn tick(&mut self) -> bool {
        self.vel.y += Particle::EXP_GRAVITY * Self::GRAVITY_FACTOR;
        self.pos += self.vel;
        self.fuse -= Self::FRAME_DT;
        self.vel.y >= Self::APEX_VY || self.fuse <= 0.0
    }
}
