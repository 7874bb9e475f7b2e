//! Character-cell charts
//!
//! The layout functions return plain lines so they can be checked without
//! a terminal; the element builders only add color and a title.

use crate::interactive::text_utils::{pad_left, pad_right, text_width, truncate};
use folio_core::chart::{BarChart, ChartLabels, DataPoint, LineChart};
use iocraft::prelude::*;

const BAR: char = '█';
const MARKER: char = '●';
const TRACE: char = '·';
const CHART_HEIGHT: usize = 8;
/// Widest label kept beside a horizontal bar
const MAX_SIDE_LABEL: usize = 28;

pub const BAR_COLOR: Color = Color::Rgb {
    r: 99,
    g: 110,
    b: 250,
};
pub const LINE_COLOR: Color = Color::Rgb {
    r: 239,
    g: 85,
    b: 59,
};

/// Integers without a fraction, everything else to one decimal
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

fn scale_max(points: &[DataPoint]) -> f64 {
    let max = points.iter().map(|p| p.y).fold(0.0, f64::max);
    if max > 0.0 {
        max
    } else {
        1.0
    }
}

/// Cells of a value scaled against `max` into `0..=cells`
fn scaled(value: f64, max: f64, cells: usize) -> usize {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    ((value / max) * cells as f64).round().clamp(0.0, cells as f64) as usize
}

/// Upright columns, one per point, with labels underneath
pub fn vertical_bars(points: &[DataPoint], height: usize, width: usize) -> Vec<String> {
    if points.is_empty() {
        return vec!["(no data)".to_string()];
    }

    let max = scale_max(points);
    let axis_width = text_width(&format_value(max)).max(1);
    let slot = (width.saturating_sub(axis_width + 2) / points.len()).clamp(3, 12);
    let bar_width = slot.saturating_sub(1).max(1);
    let heights: Vec<usize> = points.iter().map(|p| scaled(p.y, max, height)).collect();

    let mut lines = Vec::with_capacity(height + 3);
    let values: String = points
        .iter()
        .zip(&heights)
        .map(|(p, &h)| {
            // value sits on top of its bar only once the bar reaches the top
            let label = if h == height { format_value(p.y) } else { String::new() };
            pad_right(&label, slot)
        })
        .collect();
    lines.push(format!("{} {}", " ".repeat(axis_width + 1), values.trim_end()));

    for level in (1..=height).rev() {
        let axis = if level == height {
            pad_left(&format_value(max), axis_width)
        } else {
            " ".repeat(axis_width)
        };
        let row: String = points
            .iter()
            .zip(&heights)
            .map(|(p, &h)| {
                if h >= level {
                    format!("{} ", BAR.to_string().repeat(bar_width))
                } else if h + 1 == level && h > 0 {
                    pad_right(&format_value(p.y), slot)
                } else {
                    " ".repeat(slot)
                }
            })
            .collect();
        lines.push(format!("{axis} │{}", row.trim_end()));
    }

    lines.push(format!(
        "{} └{}",
        pad_left("0", axis_width),
        "─".repeat(slot * points.len())
    ));
    let labels: String = points.iter().map(|p| pad_right(&p.x, slot)).collect();
    lines.push(format!("{}  {}", " ".repeat(axis_width), labels.trim_end()));
    lines
}

/// One row per point with the label at the side; used when tick labels are
/// too long to sit under upright bars
pub fn horizontal_bars(points: &[DataPoint], width: usize) -> Vec<String> {
    if points.is_empty() {
        return vec!["(no data)".to_string()];
    }

    let max = scale_max(points);
    let label_width = points
        .iter()
        .map(|p| text_width(&p.x))
        .max()
        .unwrap_or(0)
        .min(MAX_SIDE_LABEL);
    let value_width = points
        .iter()
        .map(|p| text_width(&format_value(p.y)))
        .max()
        .unwrap_or(1);
    let bar_room = width
        .saturating_sub(label_width + value_width + 4)
        .max(1);

    points
        .iter()
        .map(|p| {
            let bar = BAR.to_string().repeat(scaled(p.y, max, bar_room));
            format!(
                "{} │{} {}",
                pad_left(&p.x, label_width),
                bar,
                format_value(p.y)
            )
        })
        .collect()
}

/// Points placed on a `height x width` grid and joined by a dotted trace
pub fn line_plot(points: &[DataPoint], height: usize, width: usize, markers: bool) -> Vec<String> {
    if points.is_empty() {
        return vec!["(no data)".to_string()];
    }

    let max = scale_max(points);
    let axis_width = text_width(&format_value(max)).max(1);
    // at least one column per label so the last point stays inside the grid
    let label_width = points
        .iter()
        .map(|p| text_width(&p.x))
        .max()
        .unwrap_or(0)
        .max(1);
    let plot_width = width
        .saturating_sub(axis_width + 2)
        .max(label_width * points.len())
        .max(points.len());
    let height = height.max(2);

    let column = |i: usize| -> usize {
        if points.len() == 1 {
            0
        } else {
            i * (plot_width - label_width) / (points.len() - 1)
        }
    };
    let row = |value: f64| -> usize { height - 1 - scaled(value, max, height - 1) };

    let mut grid = vec![vec![' '; plot_width]; height];
    for (i, pair) in points.windows(2).enumerate() {
        let (x0, x1) = (column(i), column(i + 1));
        let (y0, y1) = (row(pair[0].y) as f64, row(pair[1].y) as f64);
        for x in x0..=x1 {
            let t = if x1 == x0 { 0.0 } else { (x - x0) as f64 / (x1 - x0) as f64 };
            let y = (y0 + (y1 - y0) * t).round() as usize;
            grid[y.min(height - 1)][x] = TRACE;
        }
    }
    for (i, point) in points.iter().enumerate() {
        grid[row(point.y)][column(i)] = if markers { MARKER } else { TRACE };
    }

    let mut lines: Vec<String> = grid
        .into_iter()
        .enumerate()
        .map(|(r, cells)| {
            let axis = if r == 0 {
                pad_left(&format_value(max), axis_width)
            } else {
                " ".repeat(axis_width)
            };
            let cells: String = cells.into_iter().collect();
            format!("{axis} │{}", cells.trim_end())
        })
        .collect();

    lines.push(format!(
        "{} └{}",
        pad_left("0", axis_width),
        "─".repeat(plot_width)
    ));
    let mut labels = vec![' '; plot_width + label_width];
    for (i, point) in points.iter().enumerate() {
        for (offset, ch) in truncate(&point.x, label_width).chars().enumerate() {
            if let Some(cell) = labels.get_mut(column(i) + offset) {
                *cell = ch;
            }
        }
    }
    let labels: String = labels.into_iter().collect();
    lines.push(format!("{}  {}", " ".repeat(axis_width), labels.trim_end()));
    lines
}

fn chart_frame(labels: &ChartLabels, lines: Vec<String>, color: Color) -> AnyElement<'static> {
    element! {
        View(flex_direction: FlexDirection::Column, margin_bottom: 1) {
            Text(content: labels.title.clone(), weight: Weight::Bold)
            Text(
                content: format!("{} by {}", labels.y_axis, labels.x_axis),
                color: Color::DarkGrey,
            )
            #(lines.into_iter().enumerate().map(|(i, line)| element! {
                Text(key: i, content: line, color: color, wrap: TextWrap::NoWrap)
            }))
        }
    }
    .into()
}

pub fn bar_chart(chart: &BarChart, width: u16) -> AnyElement<'static> {
    let lines = if chart.rotated_ticks() {
        horizontal_bars(&chart.points, width as usize)
    } else {
        vertical_bars(&chart.points, CHART_HEIGHT, width as usize)
    };
    chart_frame(&chart.labels, lines, BAR_COLOR)
}

pub fn line_chart(chart: &LineChart, width: u16) -> AnyElement<'static> {
    let lines = line_plot(&chart.points, CHART_HEIGHT, width as usize, chart.markers);
    chart_frame(&chart.labels, lines, LINE_COLOR)
}
