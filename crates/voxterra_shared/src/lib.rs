//! # VOXTERRA Shared
//!
//! Read-only data used by the procedural core and by every collaborator
//! that consumes its output.
//!
//! ## CRITICAL RULE
//!
//! This crate must NEVER depend on:
//! - the noise source or the `World`
//! - any GPU, window or asset-loading crate
//!
//! If you need generation logic, put it in `voxterra_procedural`.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod block;
pub mod constants;
pub mod position;

pub use block::{Block, BlockCategory, BlockProperties, GenerativeProperties};
pub use constants::{ParameterRange, WORLD_PARAMETERS};
pub use position::BlockPos;
