/// What to do with a cluster that ends an update pass with zero points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyClusterPolicy {
    /// Collapse the empty cluster's centroid to the origin `(0, 0)`.
    ///
    /// The collapsed centroid usually keeps receiving zero points for the
    /// rest of the run, so the effective number of populated clusters can
    /// end up below k.
    #[default]
    CollapseToOrigin,

    /// Re-seed the empty cluster's centroid from a randomly chosen input
    /// point, keeping all k clusters in play.
    Reseed,
}

/// Configuration for a clustering run
#[derive(Debug, Clone)]
pub struct ClusterConfig {
    /// Number of clusters. When k exceeds the number of input points, the
    /// effective cluster count is silently reduced to the point count.
    pub k: usize,

    /// Maximum number of refinement passes
    pub max_iters: usize,

    /// Random seed for centroid initialization (and re-seeding, when the
    /// [`EmptyClusterPolicy::Reseed`] policy is selected)
    pub seed: u64,

    /// Policy applied to clusters that receive no points in an update pass
    pub empty_cluster_policy: EmptyClusterPolicy,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            k: 3,
            max_iters: 50,
            seed: 0,
            empty_cluster_policy: EmptyClusterPolicy::default(),
        }
    }
}

impl ClusterConfig {
    /// Create a new configuration with the specified number of clusters
    pub fn new(k: usize) -> Self {
        Self {
            k,
            ..Default::default()
        }
    }

    /// Set the maximum number of refinement passes
    pub fn with_max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = max_iters;
        self
    }

    /// Set the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the empty-cluster policy
    pub fn with_empty_cluster_policy(mut self, policy: EmptyClusterPolicy) -> Self {
        self.empty_cluster_policy = policy;
        self
    }
}
