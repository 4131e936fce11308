use thiserror::Error;

/// Error types for the clustering engine
#[derive(Error, Debug)]
pub enum ClusterError {
    /// The number of clusters k is invalid (must be > 0)
    #[error("Invalid k value: {0}")]
    InvalidK(String),

    /// No input records were supplied
    #[error("Empty input: at least one point is required")]
    EmptyInput,

    /// A feature selector produced a NaN or infinite value
    #[error("Non-finite feature value at record {index}: ({x}, {y})")]
    NonFiniteFeature {
        /// Index of the offending record in the input slice
        index: usize,
        /// Extracted x feature
        x: f64,
        /// Extracted y feature
        y: f64,
    },

    /// Model has not been fitted yet
    #[error("Model has not been fitted. Call fit() first.")]
    NotFitted,
}
