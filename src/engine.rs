use crate::algorithm::{assign_points, lloyd, Clustering};
use crate::config::ClusterConfig;
use crate::error::ClusterError;
use crate::history::IterationHistory;
use crate::point::{extract_points, Point2};

/// 2D k-means clustering model.
///
/// Records stay caller-owned and caller-shaped: the model only ever reads
/// two numeric features per record, through the selector closures passed to
/// each call. It provides a scikit-learn style `fit()` / `predict()` /
/// `fit_predict()` interface.
///
/// # Example
///
/// ```
/// use exocluster::KMeans;
///
/// let records = vec![(0.0, 0.0), (0.2, 0.1), (9.8, 10.1), (10.0, 10.0)];
///
/// let mut kmeans = KMeans::new(2);
/// let result = kmeans.fit_predict(&records, |r| r.0, |r| r.1).unwrap();
///
/// assert_eq!(result.assignments.len(), 4);
/// assert_eq!(result.assignments[0], result.assignments[1]);
/// assert_eq!(result.assignments[2], result.assignments[3]);
/// ```
pub struct KMeans {
    /// Model configuration
    config: ClusterConfig,

    /// Fitted centroids (None until `fit` has run)
    centroids: Option<Vec<Point2>>,
}

impl KMeans {
    /// Create a new model with default configuration and the given number
    /// of clusters.
    pub fn new(k: usize) -> Self {
        Self {
            config: ClusterConfig::new(k),
            centroids: None,
        }
    }

    /// Create a new model with custom configuration.
    pub fn with_config(config: ClusterConfig) -> Self {
        Self {
            config,
            centroids: None,
        }
    }

    /// Fit the model: run the clustering algorithm and retain the final
    /// centroids for later `predict` calls.
    ///
    /// # Errors
    ///
    /// Returns an error if `k` is zero, `records` is empty, or a selector
    /// produces a non-finite value.
    pub fn fit<R, FX, FY>(
        &mut self,
        records: &[R],
        fx: FX,
        fy: FY,
    ) -> Result<&mut Self, ClusterError>
    where
        FX: Fn(&R) -> f64,
        FY: Fn(&R) -> f64,
    {
        let points = extract_points(records, fx, fy)?;
        let result = lloyd(&points, &self.config)?;
        self.centroids = Some(result.centroids);
        Ok(self)
    }

    /// Assignment-only pass: map each record to its nearest fitted centroid.
    ///
    /// Runs no refinement, so predicting the same records the model was
    /// fitted on reproduces the fit's assignments exactly.
    ///
    /// # Errors
    ///
    /// Returns [`ClusterError::NotFitted`] if `fit` has not run yet, or
    /// [`ClusterError::NonFiniteFeature`] on a bad selector value.
    pub fn predict<R, FX, FY>(
        &self,
        records: &[R],
        fx: FX,
        fy: FY,
    ) -> Result<Vec<usize>, ClusterError>
    where
        FX: Fn(&R) -> f64,
        FY: Fn(&R) -> f64,
    {
        let centroids = self.centroids.as_ref().ok_or(ClusterError::NotFitted)?;
        let points = extract_points(records, fx, fy)?;

        let mut assignments = vec![0usize; points.len()];
        assign_points(&points, centroids, &mut assignments);

        Ok(assignments)
    }

    /// Fit the model and return the full clustering result in one call.
    pub fn fit_predict<R, FX, FY>(
        &mut self,
        records: &[R],
        fx: FX,
        fy: FY,
    ) -> Result<Clustering, ClusterError>
    where
        FX: Fn(&R) -> f64,
        FY: Fn(&R) -> f64,
    {
        let points = extract_points(records, fx, fy)?;
        let result = lloyd(&points, &self.config)?;
        self.centroids = Some(result.centroids.clone());
        Ok(result)
    }

    /// Lazily step through the refinement, one [`Clustering`] snapshot per
    /// iteration.
    ///
    /// The returned iterator is finite and non-restartable; its last item is
    /// the same result a plain `fit_predict` with this configuration would
    /// return. The model itself is not mutated.
    pub fn iteration_history<R, FX, FY>(
        &self,
        records: &[R],
        fx: FX,
        fy: FY,
    ) -> Result<IterationHistory, ClusterError>
    where
        FX: Fn(&R) -> f64,
        FY: Fn(&R) -> f64,
    {
        let points = extract_points(records, fx, fy)?;
        IterationHistory::new(points, self.config.clone())
    }

    /// The fitted centroids, or `None` before `fit`.
    pub fn centroids(&self) -> Option<&[Point2]> {
        self.centroids.as_deref()
    }

    /// The configured number of clusters.
    pub fn k(&self) -> usize {
        self.config.k
    }

    /// The model configuration.
    pub fn config(&self) -> &ClusterConfig {
        &self.config
    }
}

/// Cluster `records` into `k` groups using the default configuration
/// (50 refinement passes, seed 0, origin-collapse empty-cluster policy).
///
/// Use [`KMeans::with_config`] for control over the seed, iteration limit,
/// or empty-cluster policy.
///
/// # Example
///
/// ```
/// use exocluster::cluster;
///
/// let records = vec![(0.0, 0.0), (0.0, 1.0), (10.0, 0.0), (10.0, 1.0)];
/// let result = cluster(&records, 2, |r| r.0, |r| r.1).unwrap();
///
/// assert_eq!(result.assignments.len(), 4);
/// assert_eq!(result.centroids.len(), 2);
/// ```
pub fn cluster<R, FX, FY>(
    records: &[R],
    k: usize,
    fx: FX,
    fy: FY,
) -> Result<Clustering, ClusterError>
where
    FX: Fn(&R) -> f64,
    FY: Fn(&R) -> f64,
{
    KMeans::new(k).fit_predict(records, fx, fy)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_blobs() -> Vec<(f64, f64)> {
        vec![
            (0.0, 0.0),
            (0.5, 0.5),
            (0.0, 0.5),
            (10.0, 10.0),
            (10.5, 10.5),
            (10.0, 10.5),
        ]
    }

    #[test]
    fn test_kmeans_new() {
        let kmeans = KMeans::new(4);

        assert_eq!(kmeans.k(), 4);
        assert!(kmeans.centroids().is_none());
    }

    #[test]
    fn test_kmeans_fit_stores_centroids() {
        let records = two_blobs();
        let mut kmeans = KMeans::new(2);

        kmeans.fit(&records, |r| r.0, |r| r.1).unwrap();

        let centroids = kmeans.centroids().unwrap();
        assert_eq!(centroids.len(), 2);
    }

    #[test]
    fn test_kmeans_predict_before_fit() {
        let records = two_blobs();
        let kmeans = KMeans::new(2);

        let result = kmeans.predict(&records, |r| r.0, |r| r.1);

        assert!(matches!(result, Err(ClusterError::NotFitted)));
    }

    #[test]
    fn test_kmeans_predict_matches_fit_predict() {
        let records = two_blobs();
        let mut kmeans = KMeans::new(2);

        let result = kmeans.fit_predict(&records, |r| r.0, |r| r.1).unwrap();
        assert!(result.converged);

        let predicted = kmeans.predict(&records, |r| r.0, |r| r.1).unwrap();
        assert_eq!(predicted, result.assignments);
    }

    #[test]
    fn test_kmeans_with_config() {
        let config = ClusterConfig::new(2).with_seed(42).with_max_iters(100);
        let mut kmeans = KMeans::with_config(config);

        let records = two_blobs();
        let result = kmeans.fit_predict(&records, |r| r.0, |r| r.1).unwrap();

        assert!(result.iterations <= 100);
        assert_eq!(kmeans.config().seed, 42);
    }

    #[test]
    fn test_cluster_free_function() {
        let records = two_blobs();
        let result = cluster(&records, 2, |r| r.0, |r| r.1).unwrap();

        assert_eq!(result.assignments.len(), records.len());
        assert_eq!(result.centroids.len(), 2);
    }

    #[test]
    fn test_cluster_propagates_invalid_k() {
        let records = two_blobs();
        let result = cluster(&records, 0, |r| r.0, |r| r.1);

        assert!(matches!(result, Err(ClusterError::InvalidK(_))));
    }
}
