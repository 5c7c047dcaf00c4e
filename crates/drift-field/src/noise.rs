//! Seeded 3D simplex noise
//!
//! Gustavson's simplex formulation with a permutation table shuffled by the
//! session seed. Stateless after construction: `sample` is a pure function of
//! its inputs, continuous everywhere, with output in [-1, 1]. Callers supply
//! the time axis as one of the coordinates.

use crate::rand::FieldRng;

const F3: f32 = 1.0 / 3.0;
const G3: f32 = 1.0 / 6.0;

// The 12 edge-midpoint gradients of a cube
const GRAD3: [[f32; 3]; 12] = [
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
    [1.0, -1.0, 0.0],
    [-1.0, -1.0, 0.0],
    [1.0, 0.0, 1.0],
    [-1.0, 0.0, 1.0],
    [1.0, 0.0, -1.0],
    [-1.0, 0.0, -1.0],
    [0.0, 1.0, 1.0],
    [0.0, -1.0, 1.0],
    [0.0, 1.0, -1.0],
    [0.0, -1.0, -1.0],
];

/// A deterministic scalar noise field over 3D space
pub struct NoiseField {
    // Doubled permutation table so corner lookups never need a modulo
    perm: [u8; 512],
}

impl NoiseField {
    pub fn new(seed: u32) -> Self {
        let mut rng = FieldRng::new(seed);
        let mut p: [u8; 256] = std::array::from_fn(|i| i as u8);
        // Fisher-Yates shuffle
        for i in (1..256).rev() {
            let j = (rng.next_u32() as usize) % (i + 1);
            p.swap(i, j);
        }
        let mut perm = [0u8; 512];
        for (i, slot) in perm.iter_mut().enumerate() {
            *slot = p[i & 255];
        }
        Self { perm }
    }

    /// A freshly seeded field for this session
    pub fn from_entropy() -> Self {
        Self::new(FieldRng::from_entropy().next_u32())
    }

    /// Sample the field at a point. Continuous, deterministic per instance,
    /// output in [-1, 1].
    pub fn sample(&self, x: f32, y: f32, z: f32) -> f32 {
        // Skew input space to find the containing simplex cell
        let s = (x + y + z) * F3;
        let i = (x + s).floor();
        let j = (y + s).floor();
        let k = (z + s).floor();

        let t = (i + j + k) * G3;
        let x0 = x - (i - t);
        let y0 = y - (j - t);
        let z0 = z - (k - t);

        // Rank the cell-relative coordinates to pick the simplex traversal order
        let (i1, j1, k1, i2, j2, k2) = if x0 >= y0 {
            if y0 >= z0 {
                (1, 0, 0, 1, 1, 0)
            } else if x0 >= z0 {
                (1, 0, 0, 1, 0, 1)
            } else {
                (0, 0, 1, 1, 0, 1)
            }
        } else if y0 < z0 {
            (0, 0, 1, 0, 1, 1)
        } else if x0 < z0 {
            (0, 1, 0, 0, 1, 1)
        } else {
            (0, 1, 0, 1, 1, 0)
        };

        let x1 = x0 - i1 as f32 + G3;
        let y1 = y0 - j1 as f32 + G3;
        let z1 = z0 - k1 as f32 + G3;
        let x2 = x0 - i2 as f32 + 2.0 * G3;
        let y2 = y0 - j2 as f32 + 2.0 * G3;
        let z2 = z0 - k2 as f32 + 2.0 * G3;
        let x3 = x0 - 1.0 + 3.0 * G3;
        let y3 = y0 - 1.0 + 3.0 * G3;
        let z3 = z0 - 1.0 + 3.0 * G3;

        let ii = (i as i32 & 255) as usize;
        let jj = (j as i32 & 255) as usize;
        let kk = (k as i32 & 255) as usize;

        let gi0 = self.hash(ii, jj, kk, 0, 0, 0);
        let gi1 = self.hash(ii, jj, kk, i1, j1, k1);
        let gi2 = self.hash(ii, jj, kk, i2, j2, k2);
        let gi3 = self.hash(ii, jj, kk, 1, 1, 1);

        let n = corner(x0, y0, z0, gi0)
            + corner(x1, y1, z1, gi1)
            + corner(x2, y2, z2, gi2)
            + corner(x3, y3, z3, gi3);

        // Scale the summed contributions into [-1, 1]
        32.0 * n
    }

    fn hash(&self, ii: usize, jj: usize, kk: usize, di: usize, dj: usize, dk: usize) -> usize {
        let a = self.perm[kk + dk] as usize;
        let b = self.perm[jj + dj + a] as usize;
        self.perm[ii + di + b] as usize % 12
    }
}

fn corner(x: f32, y: f32, z: f32, gi: usize) -> f32 {
    let t = 0.6 - x * x - y * y - z * z;
    if t < 0.0 {
        0.0
    } else {
        let g = GRAD3[gi];
        let t = t * t;
        t * t * (g[0] * x + g[1] * y + g[2] * z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_per_instance() {
        let field = NoiseField::new(1234);
        for step in 0..200 {
            let p = step as f32 * 0.173;
            assert_eq!(field.sample(p, -p, p * 0.5), field.sample(p, -p, p * 0.5));
        }
    }

    #[test]
    fn seeds_produce_distinct_fields() {
        let a = NoiseField::new(1);
        let b = NoiseField::new(2);
        let mut differs = false;
        for step in 0..50 {
            let p = step as f32 * 0.41;
            if (a.sample(p, p, p) - b.sample(p, p, p)).abs() > 1e-6 {
                differs = true;
                break;
            }
        }
        assert!(differs);
    }

    #[test]
    fn output_stays_in_unit_range() {
        let field = NoiseField::new(99);
        for ix in -20..20 {
            for iy in -20..20 {
                let v = field.sample(ix as f32 * 0.37, iy as f32 * 0.29, 0.5);
                assert!((-1.0..=1.0).contains(&v), "out of range: {v}");
            }
        }
    }

    #[test]
    fn continuous_under_small_steps() {
        let field = NoiseField::new(7);
        let mut prev = field.sample(0.0, 0.0, 0.0);
        for step in 1..1000 {
            let x = step as f32 * 1e-3;
            let v = field.sample(x, 0.0, 0.0);
            assert!((v - prev).abs() < 0.02, "discontinuity at {x}");
            prev = v;
        }
    }

    #[test]
    fn negative_coordinates_are_fine() {
        let field = NoiseField::new(3);
        let v = field.sample(-123.4, -56.7, -8.9);
        assert!((-1.0..=1.0).contains(&v));
    }
}
