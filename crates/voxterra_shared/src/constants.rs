//! # World Defaults & Control Surface
//!
//! Default generation parameters and the ranges a debug panel exposes for
//! them. The core never enforces these ranges.

// =============================================================================
// DEFAULT WORLD PARAMETERS
// =============================================================================

/// Default world seed
pub const DEFAULT_SEED: u64 = 0;

/// Default X/Z extent in blocks
pub const DEFAULT_WIDTH: u32 = 64;

/// Default Y extent in blocks
pub const DEFAULT_HEIGHT: u32 = 32;

/// Default noise sampling scale (larger = smoother terrain)
pub const DEFAULT_SCALE: f64 = 30.0;

/// Default height-field amplitude, as a fraction of world height
pub const DEFAULT_MAGNITUDE: f64 = 0.2;

/// Default height-field baseline, as a fraction of world height
pub const DEFAULT_OFFSET: f64 = 0.5;

// =============================================================================
// CONTROL SURFACE
// =============================================================================

/// Slider description for one tunable world parameter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParameterRange {
    /// Field name on the world or its options.
    pub name: &'static str,
    /// Display label.
    pub label: &'static str,
    /// Lowest slider value.
    pub min: f64,
    /// Highest slider value.
    pub max: f64,
    /// Slider increment.
    pub step: f64,
}

impl ParameterRange {
    /// Clamps a value into the slider range and snaps it to the step grid.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        let clamped = value.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        (self.min + steps * self.step).min(self.max)
    }

    /// Looks up a parameter by field name.
    #[must_use]
    pub fn find(name: &str) -> Option<&'static Self> {
        WORLD_PARAMETERS.iter().find(|param| param.name == name)
    }
}

/// Every tunable world parameter, in panel order.
pub const WORLD_PARAMETERS: [ParameterRange; 6] = [
    ParameterRange { name: "seed", label: "Seed", min: 0.0, max: 10_000.0, step: 1.0 },
    ParameterRange { name: "width", label: "Width", min: 8.0, max: 128.0, step: 1.0 },
    ParameterRange { name: "height", label: "Height", min: 8.0, max: 128.0, step: 1.0 },
    ParameterRange { name: "scale", label: "Scale", min: 1.0, max: 100.0, step: 1.0 },
    ParameterRange { name: "magnitude", label: "Magnitude", min: 0.0, max: 1.0, step: 0.01 },
    ParameterRange { name: "offset", label: "Offset", min: 0.0, max: 1.0, step: 0.01 },
];
