use crate::config::{ClusterConfig, EmptyClusterPolicy};
use crate::error::ClusterError;
use crate::point::Point2;
use log::debug;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of a clustering run.
///
/// Ownership transfers to the caller; the engine keeps no state beyond what
/// a [`crate::KMeans`] model retains for later `predict` calls.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Clustering {
    /// Cluster index for each input point, in input order.
    /// Every entry is a valid index into `centroids`.
    pub assignments: Vec<usize>,

    /// Final centroid coordinates. Contains the effective cluster count:
    /// `min(k, number of points)` entries.
    pub centroids: Vec<Point2>,

    /// Number of refinement passes performed.
    pub iterations: usize,

    /// Whether the run stopped because a full pass changed no assignment
    /// (as opposed to hitting the iteration limit).
    pub converged: bool,
}

pub(crate) fn validate(points: &[Point2], config: &ClusterConfig) -> Result<(), ClusterError> {
    if config.k == 0 {
        return Err(ClusterError::InvalidK(
            "k must be greater than 0".to_string(),
        ));
    }
    if points.is_empty() {
        return Err(ClusterError::EmptyInput);
    }
    Ok(())
}

/// Select the initial centroids by sampling k points without replacement.
///
/// Plain uniform sampling, no k-means++ weighting. Duplicate input
/// coordinates can therefore yield coincident initial centroids.
pub(crate) fn initialize_centroids(
    points: &[Point2],
    k: usize,
    rng: &mut ChaCha8Rng,
) -> Vec<Point2> {
    let indices: Vec<usize> = (0..points.len()).collect();
    indices
        .choose_multiple(rng, k)
        .map(|&index| points[index])
        .collect()
}

/// Index of the centroid nearest to `point`, ties broken to the lowest index.
fn nearest_centroid(point: &Point2, centroids: &[Point2]) -> usize {
    let mut best = 0usize;
    let mut best_dist = f64::INFINITY;

    for (index, centroid) in centroids.iter().enumerate() {
        let dist = point.squared_distance(centroid);
        // Strict comparison keeps the first centroid on exact ties.
        if dist < best_dist {
            best_dist = dist;
            best = index;
        }
    }

    best
}

/// Assignment pass: move every point to its nearest centroid.
///
/// Returns whether any assignment changed. Per-point work is independent,
/// so the pass runs in parallel over the point set.
pub(crate) fn assign_points(
    points: &[Point2],
    centroids: &[Point2],
    assignments: &mut [usize],
) -> bool {
    points
        .par_iter()
        .zip(assignments.par_iter_mut())
        .map(|(point, slot)| {
            let nearest = nearest_centroid(point, centroids);
            let moved = *slot != nearest;
            *slot = nearest;
            moved
        })
        .reduce(|| false, |a, b| a || b)
}

/// Update pass: recompute each centroid as the mean of its assigned points.
///
/// Empty clusters are handled according to `policy`.
pub(crate) fn update_centroids(
    points: &[Point2],
    assignments: &[usize],
    centroids: &mut [Point2],
    policy: EmptyClusterPolicy,
    rng: &mut ChaCha8Rng,
) {
    let k = centroids.len();
    let mut sums = vec![Point2::new(0.0, 0.0); k];
    let mut counts = vec![0usize; k];

    for (point, &cluster) in points.iter().zip(assignments) {
        sums[cluster].x += point.x;
        sums[cluster].y += point.y;
        counts[cluster] += 1;
    }

    for cluster in 0..k {
        if counts[cluster] > 0 {
            let n = counts[cluster] as f64;
            centroids[cluster] = Point2::new(sums[cluster].x / n, sums[cluster].y / n);
        } else {
            centroids[cluster] = match policy {
                EmptyClusterPolicy::CollapseToOrigin => Point2::new(0.0, 0.0),
                EmptyClusterPolicy::Reseed => points
                    .choose(rng)
                    .copied()
                    .unwrap_or(Point2::new(0.0, 0.0)),
            };
        }
    }
}

/// Run Lloyd iteration over an owned point set.
///
/// Alternates assignment and update passes until a full assignment pass
/// changes nothing, or `config.max_iters` passes have run. There is no
/// tolerance-based centroid-movement check.
pub(crate) fn lloyd(
    points: &[Point2],
    config: &ClusterConfig,
) -> Result<Clustering, ClusterError> {
    validate(points, config)?;

    let effective_k = config.k.min(points.len());
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);

    let mut centroids = initialize_centroids(points, effective_k, &mut rng);
    let mut assignments = vec![0usize; points.len()];
    let mut iterations = 0;
    let mut converged = false;

    for iteration in 0..config.max_iters {
        iterations = iteration + 1;

        // The first pass has no previous assignments to compare against.
        let changed = assign_points(points, &centroids, &mut assignments) || iteration == 0;

        if !changed {
            converged = true;
            debug!("converged after {} iterations", iterations);
            break;
        }

        update_centroids(
            points,
            &assignments,
            &mut centroids,
            config.empty_cluster_policy,
            &mut rng,
        );

        debug!(
            "iteration {}/{}: assignments changed",
            iterations, config.max_iters
        );
    }

    Ok(Clustering {
        assignments,
        centroids,
        iterations,
        converged,
    })
}
