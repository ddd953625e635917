//! # Block Types
//!
//! The closed set of block types a voxel cell can hold, plus the static
//! metadata keyed by block type.
//!
//! ## ID Table
//!
//! | ID | Block    | Category   | Generative |
//! |----|----------|------------|------------|
//! | 0  | Air      | Terrain    | -          |
//! | 1  | Grass    | Terrain    | -          |
//! | 2  | Dirt     | Terrain    | -          |
//! | 3  | Stone    | Terrain    | yes        |
//! | 4  | Iron Ore | Ore        | yes        |
//! | 5  | Coal Ore | Ore        | yes        |
//! | 6  | Wood     | Vegetation | -          |
//!
//! IDs are stable. A renderer may key materials on them.

use serde::{Deserialize, Serialize};

/// A block type identifier.
///
/// Every voxel cell holds exactly one of these. `Air` is empty space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Block {
    /// Empty space.
    #[default]
    Air = 0,
    /// Surface layer of every terrain column.
    Grass = 1,
    /// Fill below the surface layer.
    Dirt = 2,
    /// Rock; host for future ore pockets.
    Stone = 3,
    /// Iron ore.
    IronOre = 4,
    /// Coal ore.
    CoalOre = 5,
    /// Tree trunks.
    Wood = 6,
}

impl Block {
    /// Number of block types.
    pub const COUNT: usize = 7;

    /// Every block type, in ID order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Air,
        Self::Grass,
        Self::Dirt,
        Self::Stone,
        Self::IronOre,
        Self::CoalOre,
        Self::Wood,
    ];

    /// Returns the numeric ID.
    #[inline]
    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Looks up a block by numeric ID.
    ///
    /// Unknown IDs return `None`.
    #[inline]
    #[must_use]
    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(Self::Air),
            1 => Some(Self::Grass),
            2 => Some(Self::Dirt),
            3 => Some(Self::Stone),
            4 => Some(Self::IronOre),
            5 => Some(Self::CoalOre),
            6 => Some(Self::Wood),
            _ => None,
        }
    }

    /// Returns true if this is an air block.
    #[inline]
    #[must_use]
    pub const fn is_air(self) -> bool {
        matches!(self, Self::Air)
    }

    /// Static display metadata for this block type.
    #[inline]
    #[must_use]
    pub fn properties(self) -> &'static BlockProperties {
        &BLOCK_PROPERTIES[self as usize]
    }

    /// Generative parameters, for the block types that carry them.
    #[inline]
    #[must_use]
    pub const fn generative(self) -> Option<GenerativeProperties> {
        match self {
            Self::Stone => Some(GenerativeProperties { scale: 30.0, scarcity: 0.5 }),
            Self::IronOre => Some(GenerativeProperties { scale: 20.0, scarcity: 0.9 }),
            Self::CoalOre => Some(GenerativeProperties { scale: 15.0, scarcity: 0.75 }),
            Self::Air | Self::Grass | Self::Dirt | Self::Wood => None,
        }
    }

    /// Category of this block type.
    #[inline]
    #[must_use]
    pub fn category(self) -> BlockCategory {
        self.properties().category
    }
}

/// Broad grouping used to filter block types in tooling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockCategory {
    /// Base terrain (including air).
    Terrain,
    /// Ores embedded in stone.
    Ore,
    /// Plants and trees.
    Vegetation,
}

/// Display metadata shared by every block type.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BlockProperties {
    /// Human-readable name.
    pub name: &'static str,
    /// Whether the block occupies its cell.
    pub solid: bool,
    /// Flat appearance color (0xRRGGBB).
    pub color: u32,
    /// Category for filtering.
    pub category: BlockCategory,
}

impl BlockProperties {
    /// Returns the color as normalized RGB components.
    #[must_use]
    pub fn rgb(&self) -> [f32; 3] {
        let r = (self.color >> 16) & 0xff;
        let g = (self.color >> 8) & 0xff;
        let b = self.color & 0xff;
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0]
    }
}

/// Noise parameters for block types that can spawn as pockets.
///
/// Not consumed by terrain generation yet; exposed for tuning.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerativeProperties {
    /// Noise sampling scale (larger = bigger pockets).
    pub scale: f64,
    /// Threshold in [0, 1]; higher means rarer.
    pub scarcity: f64,
}

/// Metadata table, indexed by block ID.
static BLOCK_PROPERTIES: [BlockProperties; Block::COUNT] = [
    BlockProperties { name: "Air", solid: false, color: 0x00_00_00, category: BlockCategory::Terrain },
    BlockProperties { name: "Grass", solid: true, color: 0x55_aa_55, category: BlockCategory::Terrain },
    BlockProperties { name: "Dirt", solid: true, color: 0x82_54_32, category: BlockCategory::Terrain },
    BlockProperties { name: "Stone", solid: true, color: 0x99_99_99, category: BlockCategory::Terrain },
    BlockProperties { name: "Iron Ore", solid: true, color: 0x99_55_55, category: BlockCategory::Ore },
    BlockProperties { name: "Coal Ore", solid: true, color: 0x66_66_66, category: BlockCategory::Ore },
    BlockProperties { name: "Wood", solid: true, color: 0x6c_4a_1e, category: BlockCategory::Vegetation },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trip_covers_table() {
        for (index, block) in Block::ALL.iter().enumerate() {
            assert_eq!(block.id() as usize, index, "ALL must be in ID order");
            assert_eq!(Block::from_id(block.id()), Some(*block));
        }
        assert_eq!(Block::from_id(7), None);
        assert_eq!(Block::from_id(255), None);
    }

    #[test]
    fn test_only_air_is_not_solid() {
        for block in Block::ALL {
            assert_eq!(
                block.properties().solid,
                !block.is_air(),
                "{} solidity mismatch",
                block.properties().name
            );
        }
    }

    #[test]
    fn test_generative_subset() {
        let generative: Vec<Block> = Block::ALL
            .into_iter()
            .filter(|block| block.generative().is_some())
            .collect();
        assert_eq!(generative, vec![Block::Stone, Block::IronOre, Block::CoalOre]);

        let iron = Block::IronOre.generative();
        assert_eq!(iron, Some(GenerativeProperties { scale: 20.0, scarcity: 0.9 }));
    }

    #[test]
    fn test_categories() {
        assert_eq!(Block::Grass.category(), BlockCategory::Terrain);
        assert_eq!(Block::CoalOre.category(), BlockCategory::Ore);
        assert_eq!(Block::Wood.category(), BlockCategory::Vegetation);
    }

    #[test]
    fn test_rgb() {
        let [r, g, b] = Block::Grass.properties().rgb();
        assert!((r - 0x55 as f32 / 255.0).abs() < f32::EPSILON);
        assert!((g - 0xaa as f32 / 255.0).abs() < f32::EPSILON);
        assert!((b - 0x55 as f32 / 255.0).abs() < f32::EPSILON);
    }
}
