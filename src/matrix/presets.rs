//! Built-in matrices.

use super::distance::DistanceMatrix;

const DEMO_12: [[f64; 12]; 12] = [
    [0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0, 110.0],
    [120.0, 0.0, 22.0, 32.0, 42.0, 52.0, 602.0, 72.0, 82.0, 92.0, 102.0, 112.0],
    [140.0, 24.0, 0.0, 34.0, 44.0, 54.0, 64.0, 74.0, 84.0, 94.0, 104.0, 114.0],
    [160.0, 26.0, 36.0, 0.0, 460.0, 56.0, 66.0, 76.0, 86.0, 96.0, 106.0, 116.0],
    [180.0, 28.0, 38.0, 48.0, 0.0, 58.0, 68.0, 78.0, 88.0, 98.0, 108.0, 118.0],
    [200.0, 30.0, 40.0, 50.0, 60.0, 0.0, 70.0, 80.0, 90.0, 100.0, 110.0, 120.0],
    [22.0, 302.0, 420.0, 52.0, 62.0, 72.0, 0.0, 82.0, 92.0, 102.0, 112.0, 122.0],
    [24.0, 34.0, 44.0, 54.0, 64.0, 74.0, 84.0, 0.0, 94.0, 104.0, 114.0, 124.0],
    [26.0, 36.0, 46.0, 56.0, 66.0, 76.0, 86.0, 96.0, 0.0, 106.0, 116.0, 126.0],
    [28.0, 38.0, 48.0, 58.0, 68.0, 78.0, 88.0, 98.0, 108.0, 0.0, 118.0, 128.0],
    [30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0, 110.0, 120.0, 0.0, 130.0],
    [32.0, 42.0, 52.0, 62.0, 72.0, 82.0, 92.0, 102.0, 112.0, 122.0, 132.0, 0.0],
];

/// Fully connected, asymmetric 12-node demo matrix.
///
/// A few edges are deliberately expensive (1 -> 6, 3 -> 4, 6 -> 1,
/// 6 -> 2) so that the direct hop is not always the cheapest route.
pub fn demo_12() -> DistanceMatrix {
    let rows = DEMO_12.iter().map(|row| row.to_vec()).collect();
    DistanceMatrix::from_rows(rows).expect("demo matrix is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_12_shape() {
        let dm = demo_12();
        assert_eq!(dm.size(), 12);
        assert_eq!(dm.get(0, 1), 10.0);
        assert_eq!(dm.get(1, 6), 602.0);
        assert_eq!(dm.get(11, 10), 132.0);
        for i in 0..12 {
            assert_eq!(dm.get(i, i), 0.0);
        }
    }
}
