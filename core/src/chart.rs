//! Chart series built from literal data
//!
//! No aggregation happens here: each series is exactly the `(x, y)` pairs
//! it was built from, in order.

use crate::error::ContentError;
use crate::field::FieldGrid;

/// One `(label, value)` pair
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    pub x: String,
    pub y: f64,
}

/// Axis captions and title shared by both chart kinds
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartLabels {
    pub title: String,
    pub x_axis: String,
    pub y_axis: String,
}

impl ChartLabels {
    pub fn new(
        title: impl Into<String>,
        x_axis: impl Into<String>,
        y_axis: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            x_axis: x_axis.into(),
            y_axis: y_axis.into(),
        }
    }
}

/// Zip two parallel arrays into points, refusing mismatched lengths
pub fn zip_series<X, Y>(name: &str, xs: &[X], ys: &[Y]) -> Result<Vec<DataPoint>, ContentError>
where
    X: ToString,
    Y: Copy + Into<f64>,
{
    if xs.len() != ys.len() {
        return Err(ContentError::SeriesLengthMismatch {
            series: name.to_string(),
            x_len: xs.len(),
            y_len: ys.len(),
        });
    }
    Ok(pairs(xs, ys))
}

/// Zip two parallel arrays, stopping at the shorter one
pub fn pairs<X, Y>(xs: &[X], ys: &[Y]) -> Vec<DataPoint>
where
    X: ToString,
    Y: Copy + Into<f64>,
{
    xs.iter()
        .zip(ys)
        .map(|(x, &y)| DataPoint {
            x: x.to_string(),
            y: y.into(),
        })
        .collect()
}

/// Bar chart
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub labels: ChartLabels,
    pub points: Vec<DataPoint>,
    /// Tick label rotation in degrees; 0 keeps labels horizontal
    pub tick_angle: i16,
}

impl BarChart {
    pub fn new(labels: ChartLabels, points: Vec<DataPoint>) -> Self {
        Self {
            labels,
            points,
            tick_angle: 0,
        }
    }

    pub fn with_tick_angle(mut self, degrees: i16) -> Self {
        self.tick_angle = degrees;
        self
    }

    /// Labels need rotating (or, in a terminal, laying out sideways)
    pub fn rotated_ticks(&self) -> bool {
        self.tick_angle != 0
    }

    pub fn max_value(&self) -> f64 {
        max_y(&self.points)
    }
}

/// Line chart, optionally with point markers
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub labels: ChartLabels,
    pub points: Vec<DataPoint>,
    pub markers: bool,
}

impl LineChart {
    pub fn new(labels: ChartLabels, points: Vec<DataPoint>) -> Self {
        Self {
            labels,
            points,
            markers: false,
        }
    }

    pub fn with_markers(mut self) -> Self {
        self.markers = true;
        self
    }

    pub fn max_value(&self) -> f64 {
        max_y(&self.points)
    }
}

/// Pseudocolor plot of a field grid on the diverging scale
#[derive(Debug, Clone, PartialEq)]
pub struct Heatmap {
    pub labels: ChartLabels,
    /// Caption of the color bar
    pub color_label: String,
    pub grid: FieldGrid,
}

fn max_y(points: &[DataPoint]) -> f64 {
    points.iter().map(|p| p.y).fold(0.0, f64::max)
}
