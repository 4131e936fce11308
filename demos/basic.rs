//! Basic example demonstrating exocluster usage
//!
//! Run with: cargo run --example basic --release

use exocluster::{ClusterConfig, KMeans};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A record the way the data lab sees it: one row per observed object,
/// with more fields than the two the clustering run cares about.
struct Observation {
    name: String,
    orbital_period_days: f64,
    radius_earths: f64,
}

fn main() {
    println!("=== exocluster example ===\n");

    // Generate synthetic observations around 3 known centers
    let centers = [(2.0, 1.0), (40.0, 4.0), (300.0, 11.0)];
    let per_cluster = 100;

    println!(
        "Generating {} observations around {} centers...",
        per_cluster * centers.len(),
        centers.len()
    );

    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut records = Vec::new();
    for (cluster_idx, &(period, radius)) in centers.iter().enumerate() {
        for i in 0..per_cluster {
            records.push(Observation {
                name: format!("object-{}-{}", cluster_idx, i),
                orbital_period_days: period + rng.gen_range(-1.0..1.0) * period * 0.1,
                radius_earths: radius + rng.gen_range(-0.5..0.5),
            });
        }
    }

    println!("True centers:");
    for (i, &(period, radius)) in centers.iter().enumerate() {
        println!("  Cluster {}: ({:.2} days, {:.2} R⊕)", i, period, radius);
    }
    println!();

    // Configure and run k-means
    let config = ClusterConfig::new(3).with_seed(42).with_max_iters(100);

    println!("Running k-means with k=3...\n");

    let mut kmeans = KMeans::with_config(config);
    let result = kmeans
        .fit_predict(
            &records,
            |o: &Observation| o.orbital_period_days,
            |o: &Observation| o.radius_earths,
        )
        .expect("Clustering failed");

    println!(
        "Finished after {} iterations (converged: {})\n",
        result.iterations, result.converged
    );

    // Print learned centroids
    println!("Learned centroids:");
    for (i, centroid) in result.centroids.iter().enumerate() {
        println!("  Centroid {}: ({:.4}, {:.4})", i, centroid.x, centroid.y);
    }
    println!();

    // Count observations per cluster
    let mut cluster_counts = vec![0usize; result.centroids.len()];
    for &label in &result.assignments {
        cluster_counts[label] += 1;
    }

    println!("Cluster distribution:");
    for (i, count) in cluster_counts.iter().enumerate() {
        println!(
            "  Cluster {}: {} observations ({:.1}%)",
            i,
            count,
            (*count as f64 / records.len() as f64) * 100.0
        );
    }
    println!();

    // Show first few assignments
    println!("First 10 assignments:");
    for (record, &label) in records.iter().zip(&result.assignments).take(10) {
        println!(
            "  {} at ({:.2}, {:.2}) -> Cluster {}",
            record.name, record.orbital_period_days, record.radius_earths, label
        );
    }

    println!("\n=== Done! ===");
}
