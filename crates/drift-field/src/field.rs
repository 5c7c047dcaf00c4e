//! The particle field: fixed-size point buffer advanced by noise each frame

use bytemuck::{Pod, Zeroable};
use drift_core::Vec3;
use drift_params::ResolvedGroup;

use crate::noise::NoiseField;
use crate::rand::FieldRng;

/// Per-particle random size range
const SIZE_MIN: f32 = 0.5;
const SIZE_MAX: f32 = 2.5;

// Decorrelate the per-axis noise channels along the time axis
const CHANNEL_OFFSET_Y: f32 = 100.0;
const CHANNEL_OFFSET_Z: f32 = 200.0;

/// The rectangular volume particles live in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldBounds {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl FieldBounds {
    pub const fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// A cube of side `size`
    pub const fn cube(size: f32) -> Self {
        Self::new(size, size, size)
    }

    pub fn half_extents(&self) -> Vec3 {
        Vec3::new(self.width * 0.5, self.height * 0.5, self.depth * 0.5)
    }

    pub fn contains(&self, p: Vec3) -> bool {
        let h = self.half_extents();
        p.x.abs() <= h.x && p.y.abs() <= h.y && p.z.abs() <= h.z
    }

    /// Toroidal boundary: a coordinate past a face reappears at the opposite
    /// face.
    pub fn wrap(&self, p: Vec3) -> Vec3 {
        let h = self.half_extents();
        Vec3::new(wrap_axis(p.x, h.x), wrap_axis(p.y, h.y), wrap_axis(p.z, h.z))
    }
}

fn wrap_axis(v: f32, half: f32) -> f32 {
    if v > half {
        -half
    } else if v < -half {
        half
    } else {
        v
    }
}

/// How per-tick noise displacement is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionMode {
    /// Displacement accumulates onto the current position; positions wrap at
    /// the bounds. Long sessions slowly redistribute the cloud.
    #[default]
    Drift,
    /// Displacement is an absolute offset from the immutable spawn position.
    /// Bounded by construction, so no wrap and no uneven clustering over
    /// long sessions.
    Anchored,
}

/// Motion tunables consumed on every tick
#[derive(Debug, Clone, Copy)]
pub struct FieldSettings {
    pub enabled: bool,
    pub scale: f32,
    pub speed: f32,
    /// Per-axis displacement strength
    pub strength: Vec3,
    pub mode: MotionMode,
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            scale: 0.02,
            speed: 0.0003,
            strength: Vec3::new(0.05, 0.05, 0.05),
            mode: MotionMode::Drift,
        }
    }
}

impl FieldSettings {
    /// Build from the resolved `noise` parameter group
    pub fn from_group(noise: &ResolvedGroup) -> Self {
        Self {
            enabled: noise.toggle("enabled"),
            scale: noise.number("scale") as f32,
            speed: noise.number("speed") as f32,
            strength: Vec3::new(
                noise.number("strength_x") as f32,
                noise.number("strength_y") as f32,
                noise.number("strength_z") as f32,
            ),
            mode: if noise.toggle("anchored") {
                MotionMode::Anchored
            } else {
                MotionMode::Drift
            },
        }
    }
}

/// GPU upload format: xyz position + point size packed into one vec4.
/// Matches a `position`/`size` vertex attribute pair on the host renderer.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct PointInstance {
    pub pos_size: [f32; 4],
}

/// A fixed-size cloud of points inside a bounding volume.
///
/// The buffer length is fixed at creation; only [`ParticleField::rebuild`]
/// (for a dimension change) replaces it. The noise field itself lives for the
/// whole session — the per-tick time counter grows without bound, which is
/// fine: at the default speed a week of 60 fps ticks keeps the time axis well
/// inside f32's exact range, and simplex output is bounded for any t.
pub struct ParticleField {
    noise: NoiseField,
    bounds: FieldBounds,
    positions: Vec<Vec3>,
    // Spawn-position snapshot, never mutated after creation
    origins: Vec<Vec3>,
    sizes: Vec<f32>,
    instances: Vec<PointInstance>,
    frame: u64,
    dirty: bool,
}

impl ParticleField {
    pub fn new(count: usize, bounds: FieldBounds, rng: &mut FieldRng) -> Self {
        let noise = NoiseField::new(rng.next_u32());
        let mut field = Self {
            noise,
            bounds,
            positions: Vec::new(),
            origins: Vec::new(),
            sizes: Vec::new(),
            instances: Vec::new(),
            frame: 0,
            dirty: false,
        };
        field.populate(count, bounds, rng);
        field
    }

    /// Throw away the buffer and draw a fresh cloud for new dimensions or a
    /// new particle count. The noise field keeps its session seed.
    pub fn rebuild(&mut self, count: usize, bounds: FieldBounds, rng: &mut FieldRng) {
        self.populate(count, bounds, rng);
    }

    fn populate(&mut self, count: usize, bounds: FieldBounds, rng: &mut FieldRng) {
        let h = bounds.half_extents();
        self.positions.clear();
        self.sizes.clear();
        for _ in 0..count {
            self.positions.push(Vec3::new(
                rng.range(-h.x, h.x),
                rng.range(-h.y, h.y),
                rng.range(-h.z, h.z),
            ));
            self.sizes.push(rng.range(SIZE_MIN, SIZE_MAX));
        }
        self.origins = self.positions.clone();
        self.bounds = bounds;
        self.dirty = true;
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn bounds(&self) -> FieldBounds {
        self.bounds
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn origins(&self) -> &[Vec3] {
        &self.origins
    }

    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    /// Advance the simulation by one frame.
    ///
    /// A no-op while noise is disabled. Otherwise each particle samples the
    /// noise field once per output axis (two spatial coordinates plus the
    /// time counter, offset per axis so the channels decorrelate) and the
    /// result is applied according to the motion mode.
    pub fn advance(&mut self, settings: &FieldSettings) {
        if !settings.enabled {
            return;
        }

        self.frame += 1;
        let t = self.frame as f32 * settings.speed;
        let scale = settings.scale;

        for i in 0..self.positions.len() {
            let anchor = match settings.mode {
                MotionMode::Drift => self.positions[i],
                MotionMode::Anchored => self.origins[i],
            };

            let nx = self.noise.sample(anchor.x * scale, anchor.y * scale, t);
            let ny = self
                .noise
                .sample(anchor.y * scale, anchor.z * scale, t + CHANNEL_OFFSET_Y);
            let nz = self
                .noise
                .sample(anchor.z * scale, anchor.x * scale, t + CHANNEL_OFFSET_Z);

            let displacement = Vec3::new(
                nx * settings.strength.x,
                ny * settings.strength.y,
                nz * settings.strength.z,
            );

            self.positions[i] = match settings.mode {
                MotionMode::Drift => self.bounds.wrap(self.positions[i] + displacement),
                MotionMode::Anchored => self.origins[i] + displacement,
            };
        }

        self.dirty = true;
    }

    /// Pack positions and sizes into the flat instance buffer for upload
    pub fn pack_instances(&mut self) {
        self.instances.clear();
        for (p, size) in self.positions.iter().zip(&self.sizes) {
            self.instances.push(PointInstance {
                pos_size: [p.x, p.y, p.z, *size],
            });
        }
    }

    pub fn instances(&self) -> &[PointInstance] {
        &self.instances
    }

    /// Upload handshake: true when positions changed since the last call
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
