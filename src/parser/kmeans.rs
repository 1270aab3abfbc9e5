//! One-dimensional two-means clustering.
//!
//! Used as a self-calibrating threshold: instead of fixed pixel cutoffs, each
//! screenshot's own feature distribution is split into two groups.

/// Result of [`two_means`].
#[derive(Debug, Clone, PartialEq)]
pub struct TwoMeans {
    /// Cluster index (0 or 1) per input value
    pub assignments: Vec<usize>,
    /// Final centroids of clusters 0 and 1
    pub centroids: (f64, f64),
}

impl TwoMeans {
    /// Index of the cluster with the larger centroid (0 on ties).
    pub fn larger_cluster(&self) -> usize {
        if self.centroids.0 >= self.centroids.1 {
            0
        } else {
            1
        }
    }

    /// Index of the cluster with the smaller centroid (0 on ties).
    pub fn smaller_cluster(&self) -> usize {
        if self.centroids.0 <= self.centroids.1 {
            0
        } else {
            1
        }
    }

    /// Centroid of the given cluster.
    pub fn centroid(&self, cluster: usize) -> f64 {
        if cluster == 0 {
            self.centroids.0
        } else {
            self.centroids.1
        }
    }

    /// Absolute distance between the two centroids.
    pub fn separation(&self) -> f64 {
        (self.centroids.0 - self.centroids.1).abs()
    }

    /// Positions of the values assigned to `cluster`.
    pub fn members(&self, cluster: usize) -> impl Iterator<Item = usize> + '_ {
        self.assignments
            .iter()
            .enumerate()
            .filter(move |(_, &a)| a == cluster)
            .map(|(i, _)| i)
    }
}

/// Split `values` into two clusters by 1-D k-means.
///
/// Centroids start at the minimum and maximum value, so the result is
/// deterministic. Each round assigns every value to the nearer centroid
/// (ties go to cluster 0) and moves each centroid to the mean of its members;
/// a centroid without members keeps its position. At most `iterations` rounds
/// run (at least one), stopping early once assignments no longer change.
///
/// When all values are equal no clustering happens and everything is in
/// cluster 0 with both centroids at that value.
pub fn two_means(values: &[f64], iterations: usize) -> TwoMeans {
    if values.is_empty() {
        return TwoMeans {
            assignments: Vec::new(),
            centroids: (0.0, 0.0),
        };
    }

    let mut c0 = values.iter().copied().fold(f64::INFINITY, f64::min);
    let mut c1 = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if c0 == c1 {
        return TwoMeans {
            assignments: vec![0; values.len()],
            centroids: (c0, c1),
        };
    }

    let mut assignments = vec![0usize; values.len()];

    for round in 0..iterations.max(1) {
        let mut changed = false;
        let (mut sum0, mut sum1) = (0.0, 0.0);
        let (mut count0, mut count1) = (0usize, 0usize);

        for (slot, &v) in assignments.iter_mut().zip(values) {
            let cluster = if (v - c0).abs() <= (v - c1).abs() { 0 } else { 1 };
            if *slot != cluster {
                *slot = cluster;
                changed = true;
            }
            if cluster == 0 {
                sum0 += v;
                count0 += 1;
            } else {
                sum1 += v;
                count1 += 1;
            }
        }

        if count0 > 0 {
            c0 = sum0 / count0 as f64;
        }
        if count1 > 0 {
            c1 = sum1 / count1 as f64;
        }

        // Recomputing centroids from unchanged assignments is a fixed point.
        if round > 0 && !changed {
            break;
        }
    }

    TwoMeans {
        assignments,
        centroids: (c0, c1),
    }
}
