use crate::error::ClusterError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point in the 2D feature plane.
///
/// Both the extracted input points and the centroids use this
/// representation. Coordinates are IEEE double-precision.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point2 {
    /// Horizontal feature value
    pub x: f64,
    /// Vertical feature value
    pub y: f64,
}

impl Point2 {
    /// Create a point from its coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(&self, other: &Point2) -> f64 {
        self.squared_distance(other).sqrt()
    }

    /// Squared Euclidean distance.
    ///
    /// Ordering by squared distance is identical to ordering by distance,
    /// so the assignment pass skips the square root.
    #[inline]
    pub fn squared_distance(&self, other: &Point2) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Whether both coordinates are finite (neither NaN nor infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Evaluate the feature selectors against every record, producing the owned
/// point set the algorithm iterates over.
///
/// The engine never touches the records again after this step, and never
/// mutates them.
///
/// # Errors
///
/// Returns [`ClusterError::NonFiniteFeature`] for the first record whose
/// extracted pair contains a NaN or infinity.
pub fn extract_points<R, FX, FY>(
    records: &[R],
    fx: FX,
    fy: FY,
) -> Result<Vec<Point2>, ClusterError>
where
    FX: Fn(&R) -> f64,
    FY: Fn(&R) -> f64,
{
    let mut points = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let point = Point2::new(fx(record), fy(record));
        if !point.is_finite() {
            return Err(ClusterError::NonFiniteFeature {
                index,
                x: point.x,
                y: point.y,
            });
        }
        points.push(point);
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 4.0);

        assert_relative_eq!(a.distance(&b), 5.0, epsilon = 1e-12);
        assert_relative_eq!(a.squared_distance(&b), 25.0, epsilon = 1e-12);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Point2::new(-1.5, 2.0);
        let b = Point2::new(4.0, -3.25);

        assert_relative_eq!(a.distance(&b), b.distance(&a), epsilon = 1e-12);
    }

    #[test]
    fn test_extract_points() {
        let records = vec![(1.0, 2.0), (3.0, 4.0)];
        let points = extract_points(&records, |r| r.0, |r| r.1).unwrap();

        assert_eq!(points.len(), 2);
        assert_eq!(points[0], Point2::new(1.0, 2.0));
        assert_eq!(points[1], Point2::new(3.0, 4.0));
    }

    #[test]
    fn test_extract_points_rejects_nan() {
        let records = vec![(1.0, 2.0), (f64::NAN, 4.0)];
        let result = extract_points(&records, |r| r.0, |r| r.1);

        match result {
            Err(ClusterError::NonFiniteFeature { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected NonFiniteFeature, got {:?}", other),
        }
    }

    #[test]
    fn test_extract_points_rejects_infinity() {
        let records = vec![(1.0, f64::INFINITY)];
        let result = extract_points(&records, |r| r.0, |r| r.1);

        assert!(matches!(
            result,
            Err(ClusterError::NonFiniteFeature { index: 0, .. })
        ));
    }
}
