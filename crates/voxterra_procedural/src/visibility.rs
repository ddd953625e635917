//! # Visibility Culling
//!
//! Reduces the dense grid to the blocks a renderer actually has to draw.
//!
//! A solid block is visible when at least one of its six face neighbors is
//! exposed: air, or outside the volume. Each cell is judged on its own
//! neighbors only, with no flood fill, so the pass is O(1) per cell and
//! O(width² × height) overall.
//!
//! Any two solid blocks occlude each other regardless of type.
//!
//! ## Output
//!
//! [`VisibleBlocks`] holds two index-aligned lists, positions and block
//! types, in scan order: X outer, Y middle, Z inner. The order is stable for
//! a fixed grid.

use tracing::debug;

use voxterra_shared::{Block, BlockPos};

use crate::noise::NoiseSource;
use crate::world::World;

/// Position and type of every visible block.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisibleBlocks {
    positions: Vec<BlockPos>,
    blocks: Vec<Block>,
}

impl VisibleBlocks {
    /// Number of visible blocks.
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.positions.len()
    }

    /// True if nothing is visible.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Positions, index-aligned with [`VisibleBlocks::blocks`].
    #[inline]
    #[must_use]
    pub fn positions(&self) -> &[BlockPos] {
        &self.positions
    }

    /// Block types, index-aligned with [`VisibleBlocks::positions`].
    #[inline]
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Positions as raw bytes (12 bytes each, `i32` x/y/z) for buffer upload.
    #[must_use]
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// `(position, block)` pairs in scan order.
    pub fn iter(&self) -> impl Iterator<Item = (BlockPos, Block)> + '_ {
        self.positions.iter().copied().zip(self.blocks.iter().copied())
    }

    /// Groups instances by block type, one batch per type that has any.
    ///
    /// Batches are ordered by block ID; positions keep scan order.
    #[must_use]
    pub fn batches(&self) -> Vec<InstanceBatch> {
        let mut grouped: [Vec<BlockPos>; Block::COUNT] = Default::default();
        for (pos, block) in self.iter() {
            grouped[block as usize].push(pos);
        }

        Block::ALL
            .into_iter()
            .zip(grouped)
            .filter(|(_, positions)| !positions.is_empty())
            .map(|(block, positions)| InstanceBatch { block, positions })
            .collect()
    }

    fn push(&mut self, pos: BlockPos, block: Block) {
        self.positions.push(pos);
        self.blocks.push(block);
    }
}

/// All visible instances of one block type.
///
/// A renderer builds one instanced mesh per batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstanceBatch {
    /// Block type shared by every instance.
    pub block: Block,
    /// Instance positions, in scan order.
    pub positions: Vec<BlockPos>,
}

impl InstanceBatch {
    /// Number of instances.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always false for batches produced by [`VisibleBlocks::batches`].
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl<N: NoiseSource> World<N> {
    /// Whether the block at `(x, y, z)` has at least one exposed face.
    ///
    /// Air is never visible. Out-of-bounds neighbors count as exposed.
    #[must_use]
    pub fn is_block_visible(&self, x: i32, y: i32, z: i32) -> bool {
        if self.get_block(x, y, z).is_air() {
            return false;
        }
        BlockPos::new(x, y, z)
            .neighbors()
            .into_iter()
            .any(|neighbor| self.block_at(neighbor).is_air())
    }

    /// Extracts every visible block in scan order.
    #[must_use]
    pub fn visible_blocks(&self) -> VisibleBlocks {
        let mut visible = VisibleBlocks::default();

        // Dimensions were validated at construction to fit a usize grid.
        let width = i32::try_from(self.width()).unwrap_or(i32::MAX);
        let height = i32::try_from(self.height()).unwrap_or(i32::MAX);

        for x in 0..width {
            for y in 0..height {
                for z in 0..width {
                    if self.is_block_visible(x, y, z) {
                        visible.push(BlockPos::new(x, y, z), self.get_block(x, y, z));
                    }
                }
            }
        }

        debug!(visible = visible.count(), cells = self.len(), "visible blocks extracted");
        visible
    }
}
