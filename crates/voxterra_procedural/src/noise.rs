//! # Simplex Noise Implementation
//!
//! Deterministic 2D coherent noise for the terrain height field.
//!
//! ## Determinism Guarantee
//!
//! The permutation table is shuffled once from a `WorldRng` and never
//! touched again. Sampling is a pure function of `(x, z)`, so a
//! `SimplexNoise` built from the same `WorldSeed` always yields the same
//! field.

use crate::rng::{WorldRng, WorldSeed};

/// A seeded 2D noise field.
///
/// `World` is generic over this so terrain can be generated from any
/// field, including constant ones in tests.
pub trait NoiseSource {
    /// Builds the field for `seed`.
    fn from_seed(seed: WorldSeed) -> Self;

    /// Samples the field. Values are roughly in [-1, 1].
    fn sample(&self, x: f64, z: f64) -> f64;
}

/// Pre-computed permutation table for noise.
///
/// This is computed once from the seed and reused.
struct PermutationTable {
    /// 512-entry permutation table (256 entries, doubled for overflow handling).
    perm: [u8; 512],
}

impl PermutationTable {
    /// 12 gradient vectors for 2D simplex.
    const GRADIENTS: [[i8; 2]; 12] = [
        [1, 0], [1, 1], [0, 1], [-1, 1],
        [-1, 0], [-1, -1], [0, -1], [1, -1],
        [1, 0], [0, 1], [-1, 0], [0, -1],
    ];

    /// Creates a new permutation table from a seed.
    fn new(seed: WorldSeed) -> Self {
        let mut perm = [0u8; 512];

        // Initialize with identity permutation
        for (slot, value) in perm.iter_mut().zip(0..=u8::MAX) {
            *slot = value;
        }

        // Fisher-Yates shuffle driven by the seeded stream
        let mut rng = WorldRng::new(seed);
        for i in (1..256).rev() {
            let j = rng.next_index(i + 1);
            perm.swap(i, j);
        }

        // Double the table to avoid index wrapping
        let (low, high) = perm.split_at_mut(256);
        high.copy_from_slice(low);

        Self { perm }
    }

    /// Gets a permutation value (with automatic wrapping).
    #[inline]
    fn get(&self, index: usize) -> u8 {
        self.perm[index & 511]
    }

    /// Gets a gradient for a given hash.
    #[inline]
    fn gradient(hash: u8) -> [i8; 2] {
        Self::GRADIENTS[(hash % 12) as usize]
    }
}

/// 2D Simplex noise generator.
///
/// Produces smooth, continuous noise values in the range [-1, 1].
///
/// # Example
///
/// ```rust
/// use voxterra_procedural::{SimplexNoise, WorldSeed};
///
/// let noise = SimplexNoise::new(WorldSeed::new(42));
/// let value = noise.sample(100.5, 200.3);
/// assert!((-1.0..=1.0).contains(&value));
/// ```
pub struct SimplexNoise {
    /// The permutation table.
    perm_table: PermutationTable,
}

impl SimplexNoise {
    /// Skewing factor for 2D simplex grid.
    const F2: f64 = 0.366_025_403_784_439; // (sqrt(3) - 1) / 2
    /// Unskewing factor for 2D simplex grid.
    const G2: f64 = 0.211_324_865_405_187; // (3 - sqrt(3)) / 6

    /// Creates a new simplex noise generator from a seed.
    #[must_use]
    pub fn new(seed: WorldSeed) -> Self {
        Self {
            perm_table: PermutationTable::new(seed),
        }
    }

    /// Samples 2D simplex noise at the given coordinates.
    ///
    /// # Returns
    ///
    /// A value in the range [-1, 1].
    #[must_use]
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        // Skew input coordinates to simplex grid
        let skew = (x + y) * Self::F2;
        let i = fast_floor(x + skew);
        let j = fast_floor(y + skew);

        // Unskew to get first corner in simplex
        let unskew = f64::from(i.wrapping_add(j)) * Self::G2;
        let x0 = x - (f64::from(i) - unskew);
        let y0 = y - (f64::from(j) - unskew);

        // Upper or lower triangle
        let (i1, j1): (i32, i32) = if x0 > y0 { (1, 0) } else { (0, 1) };

        // Offsets for second and third corners
        let x1 = x0 - f64::from(i1) + Self::G2;
        let y1 = y0 - f64::from(j1) + Self::G2;
        let x2 = x0 - 1.0 + 2.0 * Self::G2;
        let y2 = y0 - 1.0 + 2.0 * Self::G2;

        // Hash coordinates to get gradient indices
        let ii = (i & 255) as usize;
        let jj = (j & 255) as usize;
        let (i1, j1) = (i1 as usize, j1 as usize);

        let gi0 = self.perm_table.get(ii + self.perm_table.get(jj) as usize);
        let gi1 = self.perm_table.get(ii + i1 + self.perm_table.get(jj + j1) as usize);
        let gi2 = self.perm_table.get(ii + 1 + self.perm_table.get(jj + 1) as usize);

        let n0 = Self::contribution(x0, y0, gi0);
        let n1 = Self::contribution(x1, y1, gi1);
        let n2 = Self::contribution(x2, y2, gi2);

        // 70.0 normalizes to roughly [-1, 1]; clamp keeps the bound exact.
        (70.0 * (n0 + n1 + n2)).clamp(-1.0, 1.0)
    }

    /// Calculates the contribution from one corner of the simplex.
    #[inline]
    fn contribution(x: f64, y: f64, gradient_index: u8) -> f64 {
        let t = 0.5 - x * x - y * y;
        if t < 0.0 {
            0.0
        } else {
            let grad = PermutationTable::gradient(gradient_index);
            let t2 = t * t;
            t2 * t2 * (x * f64::from(grad[0]) + y * f64::from(grad[1]))
        }
    }
}

impl NoiseSource for SimplexNoise {
    fn from_seed(seed: WorldSeed) -> Self {
        Self::new(seed)
    }

    #[inline]
    fn sample(&self, x: f64, z: f64) -> f64 {
        SimplexNoise::sample(self, x, z)
    }
}

/// Fast floor function.
///
/// Faster than `f64::floor()` for our use case.
#[inline]
fn fast_floor(x: f64) -> i32 {
    let xi = x as i32;
    if x < f64::from(xi) { xi - 1 } else { xi }
}
