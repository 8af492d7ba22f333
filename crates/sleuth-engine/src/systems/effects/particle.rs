//! A single decorative particle: Euler-integrated position under gravity
//! (and friction for the firework variant), independently aging life.

use glam::Vec2;

use super::palette::Hue;

/// How a particle's life drains each step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeMode {
    /// Heart-burst style: life on a 0..1 scale, `life -= decay` per step,
    /// no friction, expired once life reaches zero. Rendered size shrinks
    /// with remaining life.
    Linear,
    /// Firework style: friction before gravity, `life *= decay` per step
    /// from a 40..70 starting magnitude, expired below 0.8.
    Exponential,
}

#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub hue: Hue,
    pub life: f32,
    pub decay: f32,
    pub fade: FadeMode,
}

impl Particle {
    /// Downward acceleration per step, Linear variant.
    pub const LINEAR_GRAVITY: f32 = 0.1;
    /// Downward acceleration per step, Exponential variant.
    pub const EXP_GRAVITY: f32 = 0.12;
    /// Velocity retained per step, Exponential variant.
    pub const FRICTION: f32 = 0.985;
    /// Exponential particles are culled below this life magnitude.
    pub const EXP_EXPIRE: f32 = 0.8;
    /// Life magnitude that maps to full alpha, Exponential variant.
    pub const EXP_LIFE_SCALE: f32 = 70.0;
    /// Linear life at or below this small epsilon counts as expired.
    const LINEAR_EXPIRE: f32 = 1e-3;

    /// Advance one step. Returns false once expired; the owner drops the
    /// particle on the step that crosses the threshold.
    pub fn tick(&mut self) -> bool {
        match self.fade {
            FadeMode::Linear => {
                self.vel.y += Self::LINEAR_GRAVITY;
                self.pos += self.vel;
                self.life -= self.decay;
                self.life > Self::LINEAR_EXPIRE
            }
            FadeMode::Exponential => {
                self.vel *= Self::FRICTION;
                self.vel.y += Self::EXP_GRAVITY;
                self.pos += self.vel;
                self.life *= self.decay;
                self.life >= Self::EXP_EXPIRE
            }
        }
    }

    /// Display opacity derived from remaining life.
    pub fn alpha(&self) -> f32 {
        match self.fade {
            FadeMode::Linear => self.life.clamp(0.0, 1.0),
            FadeMode::Exponential => (self.life / Self::EXP_LIFE_SCALE).clamp(0.0, 1.0),
        }
    }

    /// Rendered size; Linear particles shrink as they fade.
    pub fn render_size(&self) -> f32 {
        match self.fade {
            FadeMode::Linear => self.size * self.alpha(),
            FadeMode::Exponential => self.size,
        }
    }
}
