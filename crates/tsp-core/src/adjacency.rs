use crossbeam_channel::bounded;
use std::ops::Index;

use crate::config::BuildConfig;
use crate::distance::DistanceFn;
use crate::models::Point;

/// Square, symmetric, zero-diagonal distance matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct AdjacencyMatrix {
    // Flattened row-major for cache locality
    data: Vec<f64>,
    dim: usize,
}

impl AdjacencyMatrix {
    fn zeros(dim: usize) -> Self {
        Self {
            data: vec![0.0; dim * dim],
            dim,
        }
    }

    fn zero_diagonal(&mut self) {
        for i in 0..self.dim {
            self.data[i * self.dim + i] = 0.0;
        }
    }

    #[inline(always)]
    fn set_pair(&mut self, i: usize, j: usize, value: f64) {
        self.data[i * self.dim + j] = value;
        self.data[j * self.dim + i] = value;
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline(always)]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.dim + j]
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.dim..(i + 1) * self.dim]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunks_exact panics on 0
        self.data.chunks_exact(self.dim.max(1))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }

    /// First pair `(i, j)` whose distance is NaN, infinite or negative.
    pub(crate) fn first_invalid_entry(&self) -> Option<(usize, usize, f64)> {
        self.data
            .iter()
            .position(|d| !d.is_finite() || *d < 0.0)
            .map(|idx| (idx / self.dim, idx % self.dim, self.data[idx]))
    }
}

impl Index<(usize, usize)> for AdjacencyMatrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.data[i * self.dim + j]
    }
}

/// Distances from `points[i]` to every later point.
#[inline]
fn upper_row(points: &[Point], i: usize, distance: DistanceFn) -> Vec<f64> {
    let from = &points[i];
    points[i + 1..].iter().map(|to| distance(from, to)).collect()
}

/// Serial build: one strategy call per unordered pair.
pub fn build(points: &[Point], distance: DistanceFn) -> AdjacencyMatrix {
    let n = points.len();
    let mut matrix = AdjacencyMatrix::zeros(n);

    for (i, from) in points.iter().enumerate() {
        for (j, to) in points.iter().enumerate().skip(i + 1) {
            matrix.set_pair(i, j, distance(from, to));
        }
    }
    matrix.zero_diagonal();

    matrix
}

/// Parallel build. Rows of the upper triangle are striped across `workers`
/// threads; a single writer (the calling thread) mirrors them into the
/// matrix. Produces exactly the same bits as [`build`].
pub fn build_parallel(points: &[Point], distance: DistanceFn, workers: usize) -> AdjacencyMatrix {
    let n = points.len();
    let workers = workers.clamp(1, n.max(1));
    if workers == 1 {
        return build(points, distance);
    }

    let mut matrix = AdjacencyMatrix::zeros(n);
    let (row_tx, row_rx) = bounded::<(usize, Vec<f64>)>(workers * 2);

    std::thread::scope(|scope| {
        for worker in 0..workers {
            let tx = row_tx.clone();
            scope.spawn(move || {
                for i in (worker..n).step_by(workers) {
                    if tx.send((i, upper_row(points, i, distance))).is_err() {
                        return;
                    }
                }
            });
        }
        // Workers hold the remaining senders; the loop ends when they finish.
        drop(row_tx);

        for (i, row) in row_rx.iter() {
            for (offset, d) in row.into_iter().enumerate() {
                matrix.set_pair(i, i + 1 + offset, d);
            }
        }
    });

    matrix.zero_diagonal();

    matrix
}

pub fn build_with_config(
    points: &[Point],
    distance: DistanceFn,
    config: &BuildConfig,
) -> AdjacencyMatrix {
    match config.effective_workers(points.len()) {
        1 => build(points, distance),
        workers => build_parallel(points, distance, workers),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{euclidean, geographic};

    fn grid(n: usize) -> Vec<Point> {
        (0..n)
            .map(|i| Point::new((i * 37 % 101) as f64 * 1.5, (i * 53 % 89) as f64 * 0.7))
            .collect()
    }

    #[test]
    fn build_fills_both_triangles() {
        let points = vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0), Point::new(6.0, 8.0)];
        let m = build(&points, euclidean);
        assert_eq!(m.dim(), 3);
        assert_eq!(
            m.to_rows(),
            vec![
                vec![0.0, 5.0, 10.0],
                vec![5.0, 0.0, 5.0],
                vec![10.0, 5.0, 0.0],
            ]
        );
        assert_eq!(m[(2, 0)], 10.0);
        assert_eq!(m.row(1), &[5.0, 0.0, 5.0]);
    }

    #[test]
    fn single_point_gives_one_zero() {
        let m = build(&[Point::new(1.0, 2.0)], geographic);
        assert_eq!(m.dim(), 1);
        assert_eq!(m.as_slice(), &[0.0]);
        assert_eq!(m.rows().count(), 1);
    }

    #[test]
    fn coincident_points_have_zero_distance() {
        let points = vec![Point::new(5.0, 5.0), Point::new(5.0, 5.0)];
        let m = build(&points, euclidean);
        assert_eq!(m.get(0, 1), 0.0);
        assert!(m.first_invalid_entry().is_none());
    }

    #[test]
    fn parallel_matches_serial_bit_for_bit() {
        let points = grid(97);
        let serial = build(&points, geographic);
        for workers in [2, 3, 8, 200] {
            let parallel = build_parallel(&points, geographic, workers);
            assert_eq!(parallel.dim(), serial.dim());
            for (a, b) in serial.as_slice().iter().zip(parallel.as_slice()) {
                assert_eq!(a.to_bits(), b.to_bits());
            }
        }
    }

    #[test]
    fn config_picks_parallel_path_above_threshold() {
        let points = grid(40);
        let config = BuildConfig::new().with_workers(4).with_parallel_threshold(10);
        assert_eq!(build_with_config(&points, euclidean, &config), build(&points, euclidean));
    }

    #[test]
    fn overflowing_coordinates_are_reported() {
        let points = vec![Point::new(-1e200, 0.0), Point::new(1e200, 0.0)];
        let m = build(&points, euclidean);
        let (i, j, d) = m.first_invalid_entry().unwrap();
        assert_eq!((i, j), (0, 1));
        assert!(d.is_infinite());
    }
}
