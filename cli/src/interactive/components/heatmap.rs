//! Heatmap drawn with colored block characters

use folio_core::chart::Heatmap;
use folio_core::field::{diverging_color, normalize, FieldGrid};
use iocraft::prelude::*;

type Rgb = (u8, u8, u8);

const CELL: &str = "█";
const LEGEND_STEPS: usize = 24;

/// Colors of the grid reduced to `rows x cols`, top row first.
///
/// Row 0 of the grid is the lowest y, so rows are flipped for display.
pub fn heatmap_cells(grid: &FieldGrid, rows: usize, cols: usize) -> Vec<Vec<Rgb>> {
    let (min, max) = grid.min_max();
    grid.downsample(rows, cols)
        .into_iter()
        .rev()
        .map(|row| {
            row.into_iter()
                .map(|v| diverging_color(normalize(v, min, max)))
                .collect()
        })
        .collect()
}

/// Adjacent cells of the same color merged into `(color, count)` runs
pub fn color_runs(row: &[Rgb]) -> Vec<(Rgb, usize)> {
    let mut runs: Vec<(Rgb, usize)> = Vec::new();
    for &color in row {
        match runs.last_mut() {
            Some((last, count)) if *last == color => *count += 1,
            _ => runs.push((color, 1)),
        }
    }
    runs
}

/// Grid columns that fit in `width` terminal columns, with rows at half
/// that since cells are about twice as tall as wide
pub fn heatmap_dimensions(width: u16, size: usize) -> (usize, usize) {
    let cols = (width as usize).saturating_sub(14).clamp(20, 64).min(size);
    (cols / 2, cols)
}

fn rgb((r, g, b): Rgb) -> Color {
    Color::Rgb { r, g, b }
}

fn cell_row(colors: &[Rgb]) -> Vec<MixedTextContent> {
    color_runs(colors)
        .into_iter()
        .map(|(color, count)| MixedTextContent::new(CELL.repeat(count)).color(rgb(color)))
        .collect()
}

pub fn heatmap(map: &Heatmap, width: u16) -> AnyElement<'static> {
    let (rows, cols) = heatmap_dimensions(width, map.grid.size());
    let cells = heatmap_cells(&map.grid, rows, cols);
    let (min, max) = map.grid.min_max();
    let legend: Vec<Rgb> = (0..LEGEND_STEPS)
        .map(|i| diverging_color(i as f64 / (LEGEND_STEPS - 1) as f64))
        .collect();

    element! {
        View(flex_direction: FlexDirection::Column, margin_bottom: 1) {
            Text(content: map.labels.title.clone(), weight: Weight::Bold)
            Text(content: map.labels.y_axis.clone(), color: Color::DarkGrey)
            #(cells.iter().enumerate().map(|(i, row)| element! {
                MixedText(key: i, contents: cell_row(row), wrap: TextWrap::NoWrap)
            }))
            Text(
                content: format!("{:^width$}", map.labels.x_axis, width = cols),
                color: Color::DarkGrey,
            )
            View(margin_top: 1, flex_direction: FlexDirection::Row, gap: 1) {
                Text(content: map.color_label.clone(), color: Color::DarkGrey)
                Text(content: format!("{min:.2}"))
                MixedText(contents: cell_row(&legend), wrap: TextWrap::NoWrap)
                Text(content: format!("{max:.2}"))
            }
        }
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::field::{decorative_field, RD_BU};

    #[test]
    fn test_cells_shape_and_peak() {
        let grid = decorative_field();
        let cells = heatmap_cells(&grid, 10, 20);
        assert_eq!(cells.len(), 10);
        assert!(cells.iter().all(|row| row.len() == 20));
        // the peak at the origin maps to the far end of the scale
        assert_eq!(cells[4][10], *RD_BU.last().unwrap());
    }

    #[test]
    fn test_color_runs() {
        let a = (1, 2, 3);
        let b = (4, 5, 6);
        assert_eq!(color_runs(&[a, a, b, a]), vec![(a, 2), (b, 1), (a, 1)]);
        assert!(color_runs(&[]).is_empty());
    }

    #[test]
    fn test_dimensions_fit_width() {
        assert_eq!(heatmap_dimensions(100, 100), (32, 64));
        assert_eq!(heatmap_dimensions(40, 100), (13, 26));
        assert_eq!(heatmap_dimensions(10, 100), (10, 20));
    }
}
