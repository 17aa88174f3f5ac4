#![deny(clippy::all)]

//! Loads a tour-optimization problem (named 2D points plus a coordinate
//! system) and expands it into the full distance matrix an optimizer uses
//! as its cost table.

pub mod adjacency;
pub mod config;
pub mod distance;
pub mod error;
mod loader;
mod models;

pub use adjacency::{build, build_parallel, build_with_config, AdjacencyMatrix};
pub use config::BuildConfig;
pub use distance::{euclidean, geographic, DistanceFn, KM_PER_DEGREE};
pub use error::{ErrorKind, ProblemError, Result};
pub use loader::{load, load_with_config};
pub use models::{CoordinateKind, Point, Problem, ProblemInfo};
