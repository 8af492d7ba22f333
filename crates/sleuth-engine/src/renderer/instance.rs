use bytemuck::{Pod, Zeroable};

/// Per-particle render data handed to the host renderer each frame.
/// 5 floats = 20 bytes stride; the hue is in degrees and the renderer maps
/// it to its own color space.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct ParticleInstance {
    /// X position in world space.
    pub x: f32,
    /// Y position in world space.
    pub y: f32,
    /// Rendered size in world units.
    pub size: f32,
    /// Hue in degrees, [0, 360).
    pub hue: f32,
    /// Opacity derived from remaining life (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
}

impl ParticleInstance {
    pub const FLOATS: usize = 5;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Flat buffer of particle instances, rebuilt by the simulation each frame.
pub struct ParticleBuffer {
    pub instances: Vec<ParticleInstance>,
}

impl ParticleBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(512),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: ParticleInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for zero-copy host reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for ParticleBuffer {
    fn default() -> Self {
        Self::new()
    }
}
