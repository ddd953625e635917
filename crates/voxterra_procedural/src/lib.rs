//! # VOXTERRA Procedural Generation
//!
//! Deterministic voxel terrain for a single bounded volume, and the culling
//! pass that turns it into render-worthy block instances.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: `(seed, width, height, options)` fully decides the grid
//! 2. **Dense**: one flat, owned buffer of block types; no chunking
//! 3. **Total**: out-of-bounds reads are air, out-of-bounds writes do nothing
//! 4. **Local culling**: visibility is a per-cell test against six neighbors
//!
//! ## Core Components
//!
//! - `WorldRng`: seeded ChaCha8 stream of values in [0, 1)
//! - `SimplexNoise`: 2D coherent noise built from the stream
//! - `World`: the grid, its generator and bounds-checked accessors
//! - `VisibleBlocks`: positions and types of every block with an exposed face
//! - `WorldConfig`: TOML-loaded construction parameters
//!
//! ## Example
//!
//! ```rust
//! use voxterra_procedural::{World, WorldOptions};
//!
//! let mut world = World::new(12345, 32, 16, WorldOptions::default())?;
//! world.generate();
//!
//! let visible = world.visible_blocks();
//! assert!(visible.count() <= world.len());
//! for batch in visible.batches() {
//!     println!("{}: {} instances", batch.block.properties().name, batch.len());
//! }
//! # Ok::<(), voxterra_procedural::WorldError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod noise;
pub mod rng;
pub mod visibility;
pub mod world;

pub use config::WorldConfig;
pub use error::{WorldError, WorldResult};
pub use noise::{NoiseSource, SimplexNoise};
pub use rng::{WorldRng, WorldSeed};
pub use visibility::{InstanceBatch, VisibleBlocks};
pub use world::{column_top, BlockCensus, World, WorldOptions};

pub use voxterra_shared::{Block, BlockCategory, BlockPos};
