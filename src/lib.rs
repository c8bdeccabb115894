#![warn(clippy::all)]
#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod cable;
pub mod constants;
pub mod dynamics;
mod errors;
mod geometry;
pub mod load;
pub mod profile;
pub mod reactions;
pub mod summary;
pub mod tension;
pub mod thermal;
mod zipline;

pub use cable::CableSpec;
pub use errors::{LoadError, ZiplineError};
pub use geometry::{arc_length, point, Geometry, Point};
pub use load::{LoadState, RiderPose};
pub use profile::{CableProfile, LoadPlacement};
pub use reactions::{AnchorReactions, Reaction, Reactions};
pub use summary::{design_report, DesignReport, DesignSummary};
pub use zipline::{
    calculate_optimal_tension, calculate_zipline_curve, ZiplineParameters, ZiplineResult,
};
