use crate::algorithm::{
    assign_points, initialize_centroids, update_centroids, validate, Clustering,
};
use crate::config::{ClusterConfig, EmptyClusterPolicy};
use crate::error::ClusterError;
use crate::point::Point2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Lazy per-iteration view of a clustering run.
///
/// Yields one [`Clustering`] snapshot per refinement pass, ending with the
/// converged (or iteration-limited) state. Each `next()` call performs
/// exactly one pass; nothing is recomputed, and an exhausted iterator stays
/// exhausted. This lets an animated consumer step through convergence
/// without re-running the algorithm or materializing every intermediate
/// state up front.
///
/// For a given configuration, the final snapshot equals the result of
/// [`crate::KMeans::fit_predict`] with that same configuration.
///
/// # Example
///
/// ```
/// use exocluster::KMeans;
///
/// let records = vec![(0.0, 0.0), (0.0, 1.0), (10.0, 0.0), (10.0, 1.0)];
/// let kmeans = KMeans::new(2);
///
/// let snapshots: Vec<_> = kmeans
///     .iteration_history(&records, |r| r.0, |r| r.1)
///     .unwrap()
///     .collect();
///
/// assert!(!snapshots.is_empty());
/// assert!(snapshots.last().unwrap().converged);
/// ```
pub struct IterationHistory {
    points: Vec<Point2>,
    centroids: Vec<Point2>,
    assignments: Vec<usize>,
    policy: EmptyClusterPolicy,
    max_iters: usize,
    iterations: usize,
    rng: ChaCha8Rng,
    done: bool,
}

impl IterationHistory {
    pub(crate) fn new(
        points: Vec<Point2>,
        config: ClusterConfig,
    ) -> Result<Self, ClusterError> {
        validate(&points, &config)?;

        let effective_k = config.k.min(points.len());
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let centroids = initialize_centroids(&points, effective_k, &mut rng);
        let assignments = vec![0usize; points.len()];

        Ok(Self {
            points,
            centroids,
            assignments,
            policy: config.empty_cluster_policy,
            max_iters: config.max_iters,
            iterations: 0,
            rng,
            done: false,
        })
    }

    fn snapshot(&self, converged: bool) -> Clustering {
        Clustering {
            assignments: self.assignments.clone(),
            centroids: self.centroids.clone(),
            iterations: self.iterations,
            converged,
        }
    }
}

impl Iterator for IterationHistory {
    type Item = Clustering;

    fn next(&mut self) -> Option<Clustering> {
        if self.done || self.iterations >= self.max_iters {
            self.done = true;
            return None;
        }

        // Same pass structure as the one-shot run: an assignment pass,
        // then an update pass unless nothing changed.
        let first = self.iterations == 0;
        let changed =
            assign_points(&self.points, &self.centroids, &mut self.assignments) || first;
        self.iterations += 1;

        if !changed {
            self.done = true;
        } else {
            update_centroids(
                &self.points,
                &self.assignments,
                &mut self.centroids,
                self.policy,
                &mut self.rng,
            );
        }

        Some(self.snapshot(!changed))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, Some(self.max_iters - self.iterations))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::lloyd;
    use crate::point::extract_points;

    fn corner_records() -> Vec<(f64, f64)> {
        vec![(0.0, 0.0), (0.0, 1.0), (10.0, 0.0), (10.0, 1.0)]
    }

    #[test]
    fn test_history_is_finite_and_bounded() {
        let config = ClusterConfig::new(2).with_seed(9).with_max_iters(5);
        let points = extract_points(&corner_records(), |r| r.0, |r| r.1).unwrap();

        let snapshots: Vec<_> = IterationHistory::new(points, config).unwrap().collect();

        assert!(!snapshots.is_empty());
        assert!(snapshots.len() <= 5);
        for (index, snapshot) in snapshots.iter().enumerate() {
            assert_eq!(snapshot.iterations, index + 1);
            assert_eq!(snapshot.assignments.len(), 4);
            assert_eq!(snapshot.centroids.len(), 2);
        }
    }

    #[test]
    fn test_history_last_snapshot_matches_one_shot_run() {
        let config = ClusterConfig::new(2).with_seed(42);
        let points = extract_points(&corner_records(), |r| r.0, |r| r.1).unwrap();

        let one_shot = lloyd(&points, &config).unwrap();
        let last = IterationHistory::new(points, config)
            .unwrap()
            .last()
            .unwrap();

        assert_eq!(last, one_shot);
    }

    #[test]
    fn test_history_stays_exhausted() {
        let config = ClusterConfig::new(1).with_seed(0);
        let points = extract_points(&corner_records(), |r| r.0, |r| r.1).unwrap();

        let mut history = IterationHistory::new(points, config).unwrap();
        while history.next().is_some() {}

        assert!(history.next().is_none());
        assert!(history.next().is_none());
    }

    #[test]
    fn test_history_rejects_invalid_input() {
        let config = ClusterConfig::new(0);
        let points = extract_points(&corner_records(), |r| r.0, |r| r.1).unwrap();

        assert!(matches!(
            IterationHistory::new(points, config),
            Err(ClusterError::InvalidK(_))
        ));

        let config = ClusterConfig::new(2);
        assert!(matches!(
            IterationHistory::new(Vec::new(), config),
            Err(ClusterError::EmptyInput)
        ));
    }
}
