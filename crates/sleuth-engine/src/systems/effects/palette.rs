//! Particle colors as opaque hue tokens. The engine never rasterizes a
//! color; the renderer maps hues to whatever color space it draws in.

use super::rng::Rng;

/// A hue on the color wheel, in degrees. May be produced outside [0, 360)
/// by band sampling; `wrapped` folds it back for renderers that care.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hue(pub f32);

impl Hue {
    pub fn wrapped(self) -> f32 {
        self.0.rem_euclid(360.0)
    }

    /// Uniform hue over the full wheel.
    pub fn random(rng: &mut Rng) -> Self {
        Hue(rng.range(0.0, 360.0))
    }
}

/// Warm-to-cool festival hues used for firework bursts.
pub const FIREWORK_HUES: [Hue; 7] = [
    Hue(28.0),
    Hue(44.0),
    Hue(330.0),
    Hue(200.0),
    Hue(138.0),
    Hue(12.0),
    Hue(260.0),
];

/// Soft pink band used for heart bursts.
pub const HEART_HUES: [Hue; 5] = [Hue(0.0), Hue(356.0), Hue(354.0), Hue(352.0), Hue(350.0)];

/// How a burst picks a color per particle.
#[derive(Debug, Clone)]
pub enum ParticleColorMode {
    /// Every particle gets the same hue.
    Fixed(Hue),
    /// Pick randomly from a palette.
    Palette(Vec<Hue>),
    /// Offset band around a base hue (fireworks inherit the rocket's hue).
    Band { center: Hue, spread: f32 },
}

impl ParticleColorMode {
    pub fn sample(&self, rng: &mut Rng) -> Hue {
        match self {
            Self::Fixed(hue) => *hue,
            Self::Palette(hues) => {
                if hues.is_empty() {
                    Hue::random(rng)
                } else {
                    hues[rng.next_int(hues.len() as u32) as usize]
                }
            }
            Self::Band { center, spread } => Hue(center.0 + rng.jitter(*spread)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_folds_into_circle() {
        assert_eq!(Hue(370.0).wrapped(), 10.0);
        assert_eq!(Hue(-20.0).wrapped(), 340.0);
    }

    #[test]
    fn fixed_mode_always_returns_the_hue() {
        let mut rng = Rng::new(1);
        let mode = ParticleColorMode::Fixed(Hue(200.0));
        for _ in 0..5 {
            assert_eq!(mode.sample(&mut rng), Hue(200.0));
        }
    }

    #[test]
    fn palette_mode_samples_members() {
        let mut rng = Rng::new(1);
        let mode = ParticleColorMode::Palette(FIREWORK_HUES.to_vec());
        for _ in 0..50 {
            let hue = mode.sample(&mut rng);
            assert!(FIREWORK_HUES.contains(&hue));
        }
    }

    #[test]
    fn band_mode_stays_within_spread() {
        let mut rng = Rng::new(1);
        let mode = ParticleColorMode::Band {
            center: Hue(120.0),
            spread: 16.0,
        };
        for _ in 0..100 {
            let hue = mode.sample(&mut rng);
            assert!((hue.0 - 120.0).abs() <= 16.0);
        }
    }

    #[test]
    fn empty_palette_falls_back_to_random() {
        let mut rng = Rng::new(1);
        let mode = ParticleColorMode::Palette(Vec::new());
        let hue = mode.sample(&mut rng);
        assert!((0.0..360.0).contains(&hue.0));
    }
}
