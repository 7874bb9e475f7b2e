//! Decorative field plot
//!
//! A closed-form intensity pattern around a point source at the origin,
//! used purely as page decoration. It is not a solver: the formula is
//! `cos(R) / (R + 0.1)` evaluated on a fixed grid.

/// Samples per axis
pub const GRID_SIZE: usize = 100;

/// Half-width of the plotted square, in arbitrary units
pub const EXTENT: f64 = 5.0;

/// Keeps the denominator away from zero at the source
pub const SOFTENING: f64 = 0.1;

/// Color stops of the red-to-blue diverging scale, low to high
pub const RD_BU: [(u8, u8, u8); 11] = [
    (103, 0, 31),
    (178, 24, 43),
    (214, 96, 77),
    (244, 165, 130),
    (253, 219, 199),
    (247, 247, 247),
    (209, 229, 240),
    (146, 197, 222),
    (67, 147, 195),
    (33, 102, 172),
    (5, 48, 97),
];

/// Intensity at distance `r` from the source
pub fn field_intensity(r: f64) -> f64 {
    r.cos() / (r + SOFTENING)
}

/// Coordinate of sample `index` along one axis.
///
/// The step is `2 * EXTENT / GRID_SIZE`, starting at `-EXTENT`, so sample
/// `GRID_SIZE / 2` lands exactly on the origin.
pub fn axis_coordinate(index: usize) -> f64 {
    let step = 2.0 * EXTENT / GRID_SIZE as f64;
    (index as f64 - (GRID_SIZE / 2) as f64) * step
}

/// Square grid of intensities, row-major (row = y, column = x)
#[derive(Debug, Clone, PartialEq)]
pub struct FieldGrid {
    size: usize,
    axis: Vec<f64>,
    values: Vec<f64>,
}

impl FieldGrid {
    /// Number of samples per axis
    pub fn size(&self) -> usize {
        self.size
    }

    /// Sample coordinates shared by both axes
    pub fn axis(&self) -> &[f64] {
        &self.axis
    }

    /// Intensity at `(row, col)`
    pub fn value(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.values.get(row * self.size + col).copied()
    }

    /// Iterate rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks(self.size)
    }

    /// Owned 2D copy, `z[row][col]`
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }

    /// Smallest and largest intensity
    pub fn min_max(&self) -> (f64, f64) {
        self.values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }

    /// Nearest-sample reduction to `rows x cols`, for displays smaller
    /// than the grid. Dimensions are clamped to the grid size.
    pub fn downsample(&self, rows: usize, cols: usize) -> Vec<Vec<f64>> {
        let rows = rows.clamp(1, self.size);
        let cols = cols.clamp(1, self.size);
        (0..rows)
            .map(|r| {
                let src_row = r * self.size / rows;
                (0..cols)
                    .map(|c| self.values[src_row * self.size + c * self.size / cols])
                    .collect()
            })
            .collect()
    }
}

/// Build the decorative field. Deterministic: same output on every call.
///
/// Both axes run from -5.0 to 4.9 in steps of 0.1, not a closed [-5, 5]
/// linspace: the grid is one step short on the positive side so that
/// sample 50 sits on the origin and `Z[50][50]` is exactly 10.
pub fn decorative_field() -> FieldGrid {
    let axis: Vec<f64> = (0..GRID_SIZE).map(axis_coordinate).collect();
    let mut values = Vec::with_capacity(GRID_SIZE * GRID_SIZE);
    for &y in &axis {
        for &x in &axis {
            values.push(field_intensity(x.hypot(y)));
        }
    }
    tracing::trace!(size = GRID_SIZE, "built decorative field grid");
    FieldGrid {
        size: GRID_SIZE,
        axis,
        values,
    }
}

/// Position of `value` within `[min, max]`, in `0.0..=1.0`
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if !value.is_finite() || max <= min {
        return 0.5;
    }
    ((value - min) / (max - min)).clamp(0.0, 1.0)
}

/// Interpolate the diverging scale at `t` (0 = red end, 1 = blue end)
pub fn diverging_color(t: f64) -> (u8, u8, u8) {
    let t = if t.is_nan() { 0.5 } else { t.clamp(0.0, 1.0) };
    let scaled = t * (RD_BU.len() - 1) as f64;
    let lower = scaled.floor() as usize;
    let upper = (lower + 1).min(RD_BU.len() - 1);
    let frac = scaled - lower as f64;
    let (a, b) = (RD_BU[lower], RD_BU[upper]);
    let lerp = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * frac).round() as u8;
    (lerp(a.0, b.0), lerp(a.1, b.1), lerp(a.2, b.2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_is_deterministic() {
        let first = decorative_field();
        let second = decorative_field();
        let bits = |g: &FieldGrid| g.values.iter().map(|v| v.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&first), bits(&second));
    }

    #[test]
    fn test_grid_shape() {
        let grid = decorative_field();
        assert_eq!(grid.size(), 100);
        let rows = grid.to_rows();
        assert_eq!(rows.len(), 100);
        assert!(rows.iter().all(|r| r.len() == 100));
        assert_eq!(grid.axis()[0], -5.0);
        // one step short of +5 on the positive side
        assert!((grid.axis()[99] - 4.9).abs() < 1e-9);
    }

    #[test]
    fn test_center_is_peak() {
        let grid = decorative_field();
        assert_eq!(grid.axis()[50], 0.0);
        let center = grid.value(50, 50).unwrap();
        assert!((center - 10.0).abs() < 1e-12, "center was {center}");
        let (_, max) = grid.min_max();
        assert_eq!(max, center);
    }

    #[test]
    fn test_all_values_finite() {
        let grid = decorative_field();
        assert!(grid.rows().flatten().all(|v| v.is_finite()));
        assert!(field_intensity(0.0).is_finite());
    }

    #[test]
    fn test_radial_symmetry() {
        let grid = decorative_field();
        // (row 50 +/- k, col 50) are equidistant from the origin
        for k in 1..50 {
            assert_eq!(grid.value(50 + k, 50), grid.value(50 - k, 50));
            assert_eq!(grid.value(50, 50 + k), grid.value(50 + k, 50));
        }
    }

    #[test]
    fn test_out_of_range_lookup() {
        let grid = decorative_field();
        assert!(grid.value(100, 0).is_none());
        assert!(grid.value(0, 100).is_none());
    }

    #[test]
    fn test_downsample_dimensions() {
        let grid = decorative_field();
        let small = grid.downsample(20, 40);
        assert_eq!(small.len(), 20);
        assert!(small.iter().all(|r| r.len() == 40));
        // Full size reproduces the grid
        assert_eq!(grid.downsample(500, 500), grid.to_rows());
    }

    #[test]
    fn test_diverging_scale_ends() {
        assert_eq!(diverging_color(0.0), RD_BU[0]);
        assert_eq!(diverging_color(1.0), RD_BU[10]);
        assert_eq!(diverging_color(0.5), RD_BU[5]);
        assert_eq!(diverging_color(f64::NAN), RD_BU[5]);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(5.0, 0.0, 10.0), 0.5);
        assert_eq!(normalize(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(normalize(3.0, 3.0, 3.0), 0.5);
    }
}
