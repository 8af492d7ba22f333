//! Decorative particle effects: heart bursts, firework rockets and shells.
//!
//! This module provides the `EffectsState` facade for the whole particle
//! simulation, plus the individual pieces for direct use. The simulation is
//! frame-driven and headless: the host ticks it once per animation frame
//! and hands the packed instances to its renderer. The engine enforces no
//! cap on active particles; bounding spawn frequency is the caller's job
//! (natural decay keeps the set small at sane rates).

mod launcher;
mod palette;
mod particle;
mod rng;
mod rocket;

// Re-export public types
pub use launcher::{LaunchMode, Launcher};
pub use palette::{Hue, ParticleColorMode, FIREWORK_HUES, HEART_HUES};
pub use particle::{FadeMode, Particle};
pub use rng::Rng;
pub use rocket::Rocket;

use glam::Vec2;

use crate::renderer::instance::{ParticleBuffer, ParticleInstance};

/// Everything a burst needs: spawn counts, sampling ranges, fade behavior.
#[derive(Debug, Clone)]
pub struct BurstConfig {
    pub count: usize,
    /// Min/max initial speed magnitude.
    pub speed_range: (f32, f32),
    pub size_range: (f32, f32),
    /// Min/max starting life.
    pub life_range: (f32, f32),
    /// Min/max per-particle decay.
    pub decay_range: (f32, f32),
    pub fade: FadeMode,
    /// Radians of random deviation from the evenly spaced burst angles.
    pub angle_jitter: f32,
    /// Added to every particle's initial vertical velocity (negative = up).
    pub upward_bias: f32,
    pub color: ParticleColorMode,
}

impl BurstConfig {
    /// Eight soft-pink hearts drifting up and fading on a 0..1 life scale.
    pub fn heart() -> Self {
        Self {
            count: 8,
            speed_range: (2.0, 5.0),
            size_range: (8.0, 20.0),
            life_range: (1.0, 1.0),
            decay_range: (0.02, 0.03),
            fade: FadeMode::Linear,
            angle_jitter: 0.0,
            upward_bias: -2.0,
            color: ParticleColorMode::Palette(HEART_HUES.to_vec()),
        }
    }

    /// A 110-particle shell in a hue band around the rocket's color.
    pub fn firework(hue: Hue) -> Self {
        Self {
            count: 110,
            speed_range: (1.6, 4.6),
            size_range: (1.0, 2.4),
            life_range: (40.0, 70.0),
            decay_range: (0.96, 0.985),
            fade: FadeMode::Exponential,
            angle_jitter: 0.05,
            upward_bias: 0.0,
            color: ParticleColorMode::Band {
                center: hue,
                spread: 16.0,
            },
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_speed_range(mut self, min: f32, max: f32) -> Self {
        self.speed_range = (min, max);
        self
    }

    pub fn with_color(mut self, color: ParticleColorMode) -> Self {
        self.color = color;
        self
    }
}

/// What one simulation step did, for the host's bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EffectsFrame {
    /// Particles spawned this step (rocket detonations).
    pub spawned: u32,
    /// Particles culled this step.
    pub expired: u32,
}

/// Container for the whole particle simulation: active particles, climbing
/// rockets, and the RNG feeding spawn sampling.
pub struct EffectsState {
    pub particles: Vec<Particle>,
    pub rockets: Vec<Rocket>,
    pub rng: Rng,
}

impl EffectsState {
    /// Create a new EffectsState with the given RNG seed.
    pub fn new(seed: u64) -> Self {
        EffectsState {
            particles: Vec::new(),
            rockets: Vec::new(),
            rng: Rng::new(seed.wrapping_add(7919)),
        }
    }

    /// Spawn `config.count` particles at `origin`, angles evenly spaced
    /// over the full circle with the configured jitter. Returns how many
    /// were spawned.
    pub fn spawn_burst(&mut self, origin: Vec2, config: &BurstConfig) -> u32 {
        for i in 0..config.count {
            let angle = (i as f32 / config.count as f32) * std::f32::consts::TAU
                + self.rng.jitter(config.angle_jitter);
            let speed = self.rng.range(config.speed_range.0, config.speed_range.1);
            let vel = Vec2::new(
                angle.cos() * speed,
                angle.sin() * speed + config.upward_bias,
            );
            let hue = config.color.sample(&mut self.rng);
            self.particles.push(Particle {
                pos: origin,
                vel,
                size: self.rng.range(config.size_range.0, config.size_range.1),
                hue,
                life: self.rng.range(config.life_range.0, config.life_range.1),
                decay: self.rng.range(config.decay_range.0, config.decay_range.1),
                fade: config.fade,
            });
        }
        config.count as u32
    }

    /// Send a rocket up from `origin`; it bursts on its own at apex or
    /// fuse-out during a later `tick`.
    pub fn launch(&mut self, origin: Vec2) {
        let rocket = Rocket::launch(origin, &mut self.rng);
        self.rockets.push(rocket);
    }

    /// Advance the whole simulation one frame: climb rockets (detonations
    /// burst in place), integrate particles, cull the expired. O(active).
    pub fn tick(&mut self) -> EffectsFrame {
        let mut detonations = Vec::new();
        self.rockets.retain_mut(|rocket| {
            if rocket.tick() {
                detonations.push((rocket.pos, rocket.hue));
                false
            } else {
                true
            }
        });

        let mut spawned = 0;
        for (pos, hue) in detonations {
            spawned += self.spawn_burst(pos, &BurstConfig::firework(hue));
        }

        let before = self.particles.len();
        self.particles.retain_mut(|p| p.tick());
        let expired = (before - self.particles.len()) as u32;

        EffectsFrame { spawned, expired }
    }

    /// Pack surviving particles (and climbing rockets) into the flat
    /// instance buffer handed to the renderer.
    pub fn write_instances(&self, buffer: &mut ParticleBuffer) {
        buffer.clear();
        for p in &self.particles {
            buffer.push(ParticleInstance {
                x: p.pos.x,
                y: p.pos.y,
                size: p.render_size(),
                hue: p.hue.wrapped(),
                alpha: p.alpha(),
            });
        }
        for r in &self.rockets {
            buffer.push(ParticleInstance {
                x: r.pos.x,
                y: r.pos.y,
                size: Rocket::RENDER_SIZE,
                hue: r.hue.wrapped(),
                alpha: Rocket::RENDER_ALPHA,
            });
        }
    }

    /// Drop every particle and rocket.
    pub fn clear(&mut self) {
        self.particles.clear();
        self.rockets.clear();
    }

    pub fn active_count(&self) -> usize {
        self.particles.len() + self.rockets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_burst_creates_count_particles_at_origin() {
        let mut effects = EffectsState::new(42);
        let spawned = effects.spawn_burst(Vec2::new(50.0, 60.0), &BurstConfig::heart());
        assert_eq!(spawned, 8);
        assert_eq!(effects.particles.len(), 8);
        for p in &effects.particles {
            assert_eq!(p.pos, Vec2::new(50.0, 60.0));
            assert!(p.vel.length() > 0.0);
        }
    }

    #[test]
    fn heart_burst_has_upward_bias() {
        let mut effects = EffectsState::new(42);
        effects.spawn_burst(Vec2::ZERO, &BurstConfig::heart());
        let mean_vy: f32 =
            effects.particles.iter().map(|p| p.vel.y).sum::<f32>() / 8.0;
        assert!(mean_vy < 0.0, "hearts should drift upward on average");
    }

    #[test]
    fn rocket_detonation_spawns_a_shell() {
        let mut effects = EffectsState::new(42);
        effects.rockets.push(Rocket {
            pos: Vec2::new(100.0, 200.0),
            vel: Vec2::new(0.0, -0.1), // past apex on the next tick
            hue: Hue(200.0),
            fuse: 5.0,
        });

        let frame = effects.tick();

        assert!(effects.rockets.is_empty());
        assert_eq!(frame.spawned, 110);
        assert_eq!(effects.particles.len(), 110);
    }

    #[test]
    fn tick_culls_expired_particles() {
        let mut effects = EffectsState::new(42);
        effects.spawn_burst(
            Vec2::ZERO,
            &BurstConfig {
                life_range: (0.01, 0.01),
                decay_range: (0.02, 0.02),
                ..BurstConfig::heart()
            },
        );
        let frame = effects.tick();
        assert_eq!(frame.expired, 8);
        assert!(effects.particles.is_empty());
    }

    #[test]
    fn write_instances_reports_positions_and_alpha() {
        let mut effects = EffectsState::new(42);
        effects.spawn_burst(Vec2::new(10.0, 20.0), &BurstConfig::heart());
        effects.launch(Vec2::new(300.0, 400.0));

        let mut buffer = ParticleBuffer::new();
        effects.write_instances(&mut buffer);

        assert_eq!(buffer.instance_count(), 9);
        let first = &buffer.instances[0];
        assert_eq!((first.x, first.y), (10.0, 20.0));
        assert!(first.alpha > 0.0 && first.alpha <= 1.0);
        let rocket = &buffer.instances[8];
        assert_eq!((rocket.x, rocket.y), (300.0, 400.0));
        assert_eq!(rocket.alpha, Rocket::RENDER_ALPHA);
    }

    #[test]
    fn deterministic_for_equal_seeds() {
        let mut a = EffectsState::new(7);
        let mut b = EffectsState::new(7);
        a.spawn_burst(Vec2::ZERO, &BurstConfig::firework(Hue(28.0)));
        b.spawn_burst(Vec2::ZERO, &BurstConfig::firework(Hue(28.0)));
        for _ in 0..30 {
            a.tick();
            b.tick();
        }
        assert_eq!(a.particles.len(), b.particles.len());
        for (pa, pb) in a.particles.iter().zip(&b.particles) {
            assert_eq!(pa.pos, pb.pos);
        }
    }
}
