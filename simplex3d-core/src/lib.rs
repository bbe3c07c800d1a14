//! Per-instance 3D simplex noise for audio and control-rate signals.
//!
//! A [`Simplex3d`] owns one permutation table built from a seed and turns
//! three coordinate streams into one noise stream, either a frame at a time
//! ([`Simplex3d::evaluate`]) or a block at a time ([`Simplex3d::process_block`]).
//!
//! Instances never share state, so any number of them with different seeds
//! can run side by side.

pub mod config;
pub mod error;
mod generator;

pub use config::NoiseConfig;
pub use error::NoiseError;
pub use generator::{Simplex3d, create_instance};
