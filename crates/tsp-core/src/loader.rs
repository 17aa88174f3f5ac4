use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::adjacency::build_with_config;
use crate::config::BuildConfig;
use crate::error::{ProblemError, Result};
use crate::models::{CoordinateKind, Point, Problem, ProblemInfo};

// On-disk shape. `type` stays a string here so an unknown kind is told apart
// from a structurally broken document.
#[derive(Deserialize)]
struct RawDocument {
    info: RawInfo,
    points: Vec<Point>,
}

#[derive(Deserialize)]
struct RawInfo {
    name: String,
    description: String,
    #[serde(rename = "type")]
    kind: String,
}

/// Load a problem file with the default build settings.
pub fn load(path: impl AsRef<Path>) -> Result<Problem> {
    load_with_config(path, &BuildConfig::default())
}

pub fn load_with_config(path: impl AsRef<Path>, config: &BuildConfig) -> Result<Problem> {
    let path = path.as_ref();
    debug!("reading problem file {}", path.display());

    let text = fs::read_to_string(path).map_err(|source| ProblemError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Problem::from_json_str(&text, config)
}

impl Problem {
    /// Parse a problem document and build its adjacency matrix.
    pub fn from_json_str(text: &str, config: &BuildConfig) -> Result<Problem> {
        let raw: RawDocument = serde_json::from_str(text)?;

        if raw.points.is_empty() {
            return Err(ProblemError::parse("problem has no points"));
        }
        let kind: CoordinateKind = raw.info.kind.parse()?;
        let info = ProblemInfo {
            name: raw.info.name,
            description: raw.info.description,
            kind,
        };
        debug!(
            "parsed problem '{}': {} {} points",
            info.name,
            raw.points.len(),
            kind
        );

        let adjacency = build_with_config(&raw.points, kind.strategy(), config);
        if let Some((i, j, d)) = adjacency.first_invalid_entry() {
            return Err(ProblemError::validation(format!(
                "distance between points {} and {} is {}",
                i, j, d
            )));
        }

        info!(
            "loaded problem '{}' ({}, {} points)",
            info.name,
            kind,
            raw.points.len()
        );
        Ok(Problem::new(info, raw.points, adjacency))
    }
}
