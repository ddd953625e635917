//! # Voxel World
//!
//! A bounded `width x height x width` volume of block types, regenerated
//! wholesale from `(seed, width, height, options)`.
//!
//! ## Grid Layout
//!
//! One flat buffer, exclusively owned by the world:
//!
//! ```text
//! index = x + y * width + z * width * height
//! ```
//!
//! X varies fastest, Z has the largest stride.
//!
//! ## Terrain
//!
//! One noise sample per `(x, z)` column picks a height `h`. Cells
//! `0..h` are dirt, cell `h` is grass, everything above is air. `h` is
//! clamped to `[0, height - 1]` so the top layer of the volume is always air.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use voxterra_shared::constants::{DEFAULT_MAGNITUDE, DEFAULT_OFFSET, DEFAULT_SCALE};
use voxterra_shared::{Block, BlockPos};

use crate::config::WorldConfig;
use crate::error::{WorldError, WorldResult};
use crate::noise::{NoiseSource, SimplexNoise};
use crate::rng::WorldSeed;

/// Height-field shaping parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldOptions {
    /// Noise sampling period in blocks (larger = smoother hills).
    pub scale: f64,
    /// Amplitude of the height field, as a fraction of world height.
    pub magnitude: f64,
    /// Baseline of the height field, as a fraction of world height.
    pub offset: f64,
}

impl Default for WorldOptions {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            magnitude: DEFAULT_MAGNITUDE,
            offset: DEFAULT_OFFSET,
        }
    }
}

impl WorldOptions {
    /// Checks every option against its allowed range.
    ///
    /// # Errors
    ///
    /// - [`WorldError::InvalidScale`] if `scale` is not finite and positive
    /// - [`WorldError::InvalidOption`] if `magnitude` or `offset` is outside [0, 1]
    pub fn validate(&self) -> WorldResult<()> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(WorldError::InvalidScale(self.scale));
        }
        for (name, value) in [("magnitude", self.magnitude), ("offset", self.offset)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(WorldError::InvalidOption { name, value });
            }
        }
        Ok(())
    }
}

/// Number of cells per block type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BlockCensus {
    counts: [usize; Block::COUNT],
}

impl BlockCensus {
    /// Cells holding `block`.
    #[inline]
    #[must_use]
    pub const fn get(&self, block: Block) -> usize {
        self.counts[block as usize]
    }

    /// Cells holding anything but air.
    #[must_use]
    pub fn solid(&self) -> usize {
        self.counts[1..].iter().sum()
    }

    /// Total cells counted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// `(block, count)` pairs in ID order, including zero counts.
    pub fn iter(&self) -> impl Iterator<Item = (Block, usize)> + '_ {
        Block::ALL.into_iter().zip(self.counts.iter().copied())
    }
}

/// Dense voxel volume with deterministic terrain generation.
///
/// The noise field type is a parameter so tests can pin the terrain shape;
/// everything else uses the default [`SimplexNoise`].
///
/// # Example
///
/// ```rust
/// use voxterra_procedural::{Block, World, WorldOptions};
///
/// let mut world = World::new(42, 16, 16, WorldOptions::default()).unwrap();
/// world.generate();
///
/// assert_eq!(world.get_block(0, 0, 0), Block::Dirt);
/// assert_eq!(world.get_block(-1, 0, 0), Block::Air);
/// ```
pub struct World<N = SimplexNoise> {
    seed: WorldSeed,
    width: u32,
    height: u32,
    options: WorldOptions,
    noise: N,
    grid: Vec<Block>,
}

impl World<SimplexNoise> {
    /// Creates an all-air world backed by simplex noise.
    ///
    /// Terrain is not generated until [`World::generate`] is called.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for zero dimensions or invalid options.
    pub fn new(
        seed: u64,
        width: u32,
        height: u32,
        options: WorldOptions,
    ) -> WorldResult<Self> {
        Self::with_noise(seed, width, height, options)
    }

    /// Creates an all-air world from a loaded config.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the config is invalid.
    pub fn from_config(config: &WorldConfig) -> WorldResult<Self> {
        Self::new(config.seed, config.width, config.height, config.options)
    }
}

impl<N: NoiseSource> World<N> {
    /// Creates an all-air world backed by the noise field `N`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for zero dimensions or invalid options.
    pub fn with_noise(
        seed: u64,
        width: u32,
        height: u32,
        options: WorldOptions,
    ) -> WorldResult<Self> {
        let cells = cell_count(width, height)?;
        options.validate()?;

        let seed = WorldSeed::new(seed);
        Ok(Self {
            seed,
            width,
            height,
            options,
            noise: N::from_seed(seed),
            grid: vec![Block::Air; cells],
        })
    }

    /// World seed.
    #[inline]
    #[must_use]
    pub const fn seed(&self) -> WorldSeed {
        self.seed
    }

    /// X and Z extent in blocks.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Y extent in blocks.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Height-field options.
    #[inline]
    #[must_use]
    pub const fn options(&self) -> &WorldOptions {
        &self.options
    }

    /// Number of cells in the grid.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.grid.len()
    }

    /// Always false; dimensions are validated to be positive.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    /// The raw grid, in index order.
    #[inline]
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.grid
    }

    /// Changes the seed. Takes effect on the next [`World::generate`].
    pub fn set_seed(&mut self, seed: u64) {
        self.seed = WorldSeed::new(seed);
    }

    /// Replaces the options. Takes effect on the next [`World::generate`].
    ///
    /// # Errors
    ///
    /// Rejects invalid options and leaves the current ones in place.
    pub fn set_options(&mut self, options: WorldOptions) -> WorldResult<()> {
        options.validate()?;
        self.options = options;
        Ok(())
    }

    /// Changes the dimensions and reallocates an all-air grid.
    ///
    /// # Errors
    ///
    /// Rejects zero dimensions and leaves the world untouched.
    pub fn resize(&mut self, width: u32, height: u32) -> WorldResult<()> {
        let cells = cell_count(width, height)?;
        self.width = width;
        self.height = height;
        self.grid = vec![Block::Air; cells];
        debug!(width, height, cells, "world grid reallocated");
        Ok(())
    }

    /// Regenerates the terrain from scratch.
    ///
    /// Resets the grid to air and rebuilds the noise field from the current
    /// seed first, so repeated calls with unchanged parameters produce
    /// identical grids.
    pub fn generate(&mut self) {
        info!(
            seed = self.seed.value(),
            width = self.width,
            height = self.height,
            "generating world"
        );

        self.initialize();

        let mut solid = 0usize;
        for x in 0..self.width {
            for z in 0..self.width {
                let top = self.surface_height(x, z);
                for y in 0..=top {
                    let block = if y == top { Block::Grass } else { Block::Dirt };
                    let index = self.index_unchecked(x, y, z);
                    self.grid[index] = block;
                }
                solid += top as usize + 1;
            }
        }

        info!(solid, cells = self.grid.len(), "world generated");
    }

    /// Block at `(x, y, z)`; air when out of bounds.
    #[inline]
    #[must_use]
    pub fn get_block(&self, x: i32, y: i32, z: i32) -> Block {
        self.index(x, y, z).map_or(Block::Air, |index| self.grid[index])
    }

    /// Block at `pos`; air when out of bounds.
    #[inline]
    #[must_use]
    pub fn block_at(&self, pos: BlockPos) -> Block {
        self.get_block(pos.x, pos.y, pos.z)
    }

    /// Writes `block` at `(x, y, z)`. Out-of-bounds writes are ignored.
    #[inline]
    pub fn set_block(&mut self, x: i32, y: i32, z: i32, block: Block) {
        if let Some(index) = self.index(x, y, z) {
            self.grid[index] = block;
        }
    }

    /// Whether `(x, y, z)` lies inside the volume.
    #[inline]
    #[must_use]
    pub fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        self.index(x, y, z).is_some()
    }

    /// Highest non-air cell in column `(x, z)`, if any.
    #[must_use]
    pub fn column_height(&self, x: i32, z: i32) -> Option<u32> {
        let height = i32::try_from(self.height).ok()?;
        (0..height)
            .rev()
            .find(|&y| !self.get_block(x, y, z).is_air())
            .and_then(|y| u32::try_from(y).ok())
    }

    /// Counts cells per block type.
    #[must_use]
    pub fn census(&self) -> BlockCensus {
        let mut census = BlockCensus::default();
        for &block in &self.grid {
            census.counts[block as usize] += 1;
        }
        census
    }

    /// Resets the grid to air and reseeds the noise field.
    fn initialize(&mut self) {
        self.noise = N::from_seed(self.seed);

        let cells = self.width as usize * self.height as usize * self.width as usize;
        if self.grid.len() == cells {
            self.grid.fill(Block::Air);
        } else {
            self.grid = vec![Block::Air; cells];
        }
    }

    /// Terrain height for column `(x, z)`.
    fn surface_height(&self, x: u32, z: u32) -> u32 {
        let noise = self.noise.sample(
            f64::from(x) / self.options.scale,
            f64::from(z) / self.options.scale,
        );
        column_top(self.height, &self.options, noise)
    }

    /// Grid index for an in-bounds coordinate, `None` otherwise.
    #[inline]
    fn index(&self, x: i32, y: i32, z: i32) -> Option<usize> {
        let x = u32::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = u32::try_from(y).ok().filter(|&y| y < self.height)?;
        let z = u32::try_from(z).ok().filter(|&z| z < self.width)?;
        Some(self.index_unchecked(x, y, z))
    }

    /// Grid index for a coordinate already known to be in bounds.
    #[inline]
    fn index_unchecked(&self, x: u32, y: u32, z: u32) -> usize {
        let width = self.width as usize;
        let height = self.height as usize;
        x as usize + y as usize * width + z as usize * width * height
    }
}

/// Maps a noise sample to a column's top cell.
///
/// `floor(clamp(height * (offset + magnitude * noise), 0, height - 1))`
#[must_use]
pub fn column_top(height: u32, options: &WorldOptions, noise: f64) -> u32 {
    let max = f64::from(height.saturating_sub(1));
    let target = f64::from(height) * (options.offset + options.magnitude * noise);
    // Clamped to [0, height - 1] above, so the cast cannot truncate.
    target.min(max).max(0.0).floor() as u32
}

/// Validates dimensions and returns the grid length.
fn cell_count(width: u32, height: u32) -> WorldResult<usize> {
    if width == 0 || height == 0 {
        return Err(WorldError::InvalidDimensions { width, height });
    }
    (width as usize)
        .checked_mul(width as usize)
        .and_then(|area| area.checked_mul(height as usize))
        .ok_or(WorldError::TooLarge { width, height })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Noise field pinned to a constant.
    struct FlatNoise;

    impl NoiseSource for FlatNoise {
        fn from_seed(_seed: WorldSeed) -> Self {
            Self
        }

        fn sample(&self, _x: f64, _z: f64) -> f64 {
            0.0
        }
    }

    fn flat_world(width: u32, height: u32, offset: f64) -> World<FlatNoise> {
        let options = WorldOptions { scale: 10.0, magnitude: 0.5, offset };
        World::<FlatNoise>::with_noise(7, width, height, options).expect("valid flat world")
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        let err = World::new(0, 0, 16, WorldOptions::default()).err();
        assert!(matches!(err, Some(WorldError::InvalidDimensions { width: 0, height: 16 })));

        let err = World::new(0, 16, 0, WorldOptions::default()).err();
        assert!(matches!(err, Some(WorldError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_rejects_bad_options() {
        for scale in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let options = WorldOptions { scale, ..WorldOptions::default() };
            assert!(
                matches!(options.validate(), Err(WorldError::InvalidScale(_))),
                "scale {scale} should be rejected"
            );
        }

        let options = WorldOptions { magnitude: 1.5, ..WorldOptions::default() };
        assert!(matches!(
            options.validate(),
            Err(WorldError::InvalidOption { name: "magnitude", .. })
        ));

        let options = WorldOptions { offset: -0.1, ..WorldOptions::default() };
        assert!(matches!(
            options.validate(),
            Err(WorldError::InvalidOption { name: "offset", .. })
        ));

        assert!(WorldOptions::default().validate().is_ok());
    }

    #[test]
    fn test_new_world_is_all_air() {
        let world = World::new(1, 8, 8, WorldOptions::default()).expect("valid world");
        assert_eq!(world.len(), 8 * 8 * 8);
        assert!(world.blocks().iter().all(|block| block.is_air()));
    }

    #[test]
    fn test_index_layout() {
        let mut world = World::new(1, 4, 3, WorldOptions::default()).expect("valid world");
        world.set_block(1, 2, 3, Block::Stone);

        // 1 + 2 * 4 + 3 * 4 * 3
        assert_eq!(world.blocks()[45], Block::Stone);
        assert_eq!(world.census().get(Block::Stone), 1);
    }

    #[test]
    fn test_out_of_bounds_is_air_and_ignored() {
        let mut world = World::new(1, 4, 4, WorldOptions::default()).expect("valid world");
        world.generate();
        let before = world.blocks().to_vec();

        for (x, y, z) in [(-1, 0, 0), (4, 0, 0), (0, -1, 0), (0, 4, 0), (0, 0, -1), (0, 0, 4)] {
            assert_eq!(world.get_block(x, y, z), Block::Air);
            assert!(!world.contains(x, y, z));
            world.set_block(x, y, z, Block::Wood);
        }

        assert_eq!(world.blocks(), before.as_slice(), "OOB writes must not touch the grid");
    }

    #[test]
    fn test_flat_column_height() {
        // 4 * 0.5 = 2
        let mut world = flat_world(4, 4, 0.5);
        world.generate();

        for x in 0..4 {
            for z in 0..4 {
                assert_eq!(world.column_height(x, z), Some(2));
                assert_eq!(world.get_block(x, 0, z), Block::Dirt);
                assert_eq!(world.get_block(x, 1, z), Block::Dirt);
                assert_eq!(world.get_block(x, 2, z), Block::Grass);
                assert_eq!(world.get_block(x, 3, z), Block::Air);
            }
        }
    }

    #[test]
    fn test_height_is_clamped() {
        let full = WorldOptions { scale: 1.0, magnitude: 0.0, offset: 1.0 };
        assert_eq!(column_top(10, &full, 0.0), 9, "top layer must stay air");

        let empty = WorldOptions { scale: 1.0, magnitude: 1.0, offset: 0.0 };
        assert_eq!(column_top(10, &empty, -1.0), 0, "height never goes below 0");

        assert_eq!(column_top(1, &full, 1.0), 0);
    }

    #[test]
    fn test_generate_is_idempotent() {
        let mut world = World::new(99, 16, 16, WorldOptions::default()).expect("valid world");
        world.generate();
        let first = world.blocks().to_vec();

        world.set_block(3, 3, 3, Block::CoalOre);
        world.generate();

        assert_eq!(world.blocks(), first.as_slice());
    }

    #[test]
    fn test_resize_reallocates() {
        let mut world = World::new(5, 8, 8, WorldOptions::default()).expect("valid world");
        world.generate();

        world.resize(12, 6).expect("valid dimensions");
        assert_eq!(world.len(), 12 * 6 * 12);
        assert!(world.blocks().iter().all(|block| block.is_air()));

        world.generate();
        assert!(world.census().solid() >= 12 * 12, "every column has at least grass");

        assert!(world.resize(0, 6).is_err());
        assert_eq!(world.width(), 12, "failed resize leaves dimensions untouched");
    }

    #[test]
    fn test_set_options_validates() {
        let mut world = World::new(5, 8, 8, WorldOptions::default()).expect("valid world");
        let bad = WorldOptions { scale: 0.0, ..WorldOptions::default() };
        assert!(world.set_options(bad).is_err());
        assert!((world.options().scale - WorldOptions::default().scale).abs() < f64::EPSILON);
    }

    #[test]
    fn test_census_totals() {
        let mut world = flat_world(4, 4, 0.5);
        world.generate();
        let census = world.census();

        assert_eq!(census.total(), 64);
        assert_eq!(census.get(Block::Grass), 16);
        assert_eq!(census.get(Block::Dirt), 32);
        assert_eq!(census.solid(), 48);
        assert_eq!(census.iter().count(), Block::COUNT);
    }
}
