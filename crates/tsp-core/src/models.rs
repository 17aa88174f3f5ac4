use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::adjacency::AdjacencyMatrix;
use crate::error::{ProblemError, Result};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
}

// An explicit `null` label reads the same as a missing one.
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            name: String::new(),
        }
    }

    pub fn named(x: f64, y: f64, name: impl Into<String>) -> Self {
        Self {
            x,
            y,
            name: name.into(),
        }
    }
}

/// How point coordinates are interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateKind {
    /// Planar units, e.g. millimeters on a technical drawing
    Cartesian,
    /// `x`/`y` in decimal degrees
    Geographic,
}

impl CoordinateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CoordinateKind::Cartesian => "cartesian",
            CoordinateKind::Geographic => "geographic",
        }
    }
}

impl fmt::Display for CoordinateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CoordinateKind {
    type Err = ProblemError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "cartesian" => Ok(CoordinateKind::Cartesian),
            "geographic" => Ok(CoordinateKind::Geographic),
            other => Err(ProblemError::UnsupportedType {
                kind: other.to_string(),
            }),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProblemInfo {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: CoordinateKind,
}

/// A loaded problem. Built once by the loader, read-only afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Problem {
    info: ProblemInfo,
    points: Vec<Point>,
    adjacency: AdjacencyMatrix,
}

impl Problem {
    pub(crate) fn new(info: ProblemInfo, points: Vec<Point>, adjacency: AdjacencyMatrix) -> Self {
        debug_assert_eq!(points.len(), adjacency.dim());
        Self {
            info,
            points,
            adjacency,
        }
    }

    pub fn info(&self) -> &ProblemInfo {
        &self.info
    }

    /// Points in file order; the index is the point's identity in the matrix.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn adjacency(&self) -> &AdjacencyMatrix {
        &self.adjacency
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline(always)]
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.adjacency.get(from, to)
    }

    /// Length of the closed tour visiting `route` in order and returning to
    /// its first point.
    pub fn tour_length(&self, route: &[usize]) -> Result<f64> {
        let n = self.len();
        let mut visited = vec![false; n];
        for &node in route {
            if node >= n {
                return Err(ProblemError::validation(format!(
                    "tour visits point {} but the problem has only {} points",
                    node, n
                )));
            }
            if visited[node] {
                return Err(ProblemError::validation(format!(
                    "tour visits point {} more than once",
                    node
                )));
            }
            visited[node] = true;
        }

        let Some(&first) = route.first() else {
            return Ok(0.0);
        };
        let legs: f64 = route.windows(2).map(|w| self.distance(w[0], w[1])).sum();
        let last = route[route.len() - 1];
        Ok(legs + self.distance(last, first))
    }
}
