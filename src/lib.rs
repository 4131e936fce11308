//! # exocluster
//!
//! A small 2D k-means clustering engine, built as the algorithmic core of an
//! educational astrobiology data lab: callers hand over a slice of records,
//! two numeric feature selectors (the plot axes), and a cluster count, and
//! get back per-point cluster assignments plus final centroid coordinates
//! for scatter-plot rendering.
//!
//! ## Features
//!
//! - **Typed feature selectors**: records stay caller-shaped; the engine
//!   reads two `f64` features per record through closures and never mutates
//!   the input
//! - **Seeded initialization**: a `u64` seed drives all randomness, so a
//!   given configuration and input reproduce bit-identical output
//! - **Explicit empty-cluster policy**: collapse degenerate clusters to the
//!   origin, or re-seed them from a random input point
//! - **Iteration history**: a lazy, finite iterator of per-pass snapshots
//!   for animated or step-through consumers
//!
//! ## Example
//!
//! ```rust
//! use exocluster::cluster;
//!
//! let records = vec![(0.0, 0.0), (0.0, 1.0), (10.0, 0.0), (10.0, 1.0)];
//!
//! let result = cluster(&records, 2, |r| r.0, |r| r.1).unwrap();
//!
//! assert_eq!(result.assignments.len(), 4);
//! assert_eq!(result.centroids.len(), 2);
//! ```
//!
//! ## Custom Configuration
//!
//! ```rust
//! use exocluster::{ClusterConfig, EmptyClusterPolicy, KMeans};
//!
//! let records = vec![(1.0, 2.0), (1.5, 1.8), (5.0, 8.0), (8.0, 8.0), (9.0, 11.0)];
//!
//! let config = ClusterConfig::new(2)
//!     .with_max_iters(100)
//!     .with_seed(42)
//!     .with_empty_cluster_policy(EmptyClusterPolicy::Reseed);
//!
//! let mut kmeans = KMeans::with_config(config);
//! let result = kmeans.fit_predict(&records, |r| r.0, |r| r.1).unwrap();
//!
//! assert!(result.iterations <= 100);
//! ```

mod algorithm;
mod config;
mod engine;
mod error;
mod history;
mod point;

pub use algorithm::Clustering;
pub use config::{ClusterConfig, EmptyClusterPolicy};
pub use engine::{cluster, KMeans};
pub use error::ClusterError;
pub use history::IterationHistory;
pub use point::{extract_points, Point2};
