use approx::assert_relative_eq;

use crate::color::ColorScale;
use crate::error::RenderError;
use crate::figure::{Axis, ColorBar, Figure};
use crate::layout::*;

fn figure() -> Figure {
    Figure {
        x: vec![0.0, 45.0, 90.0],
        y: vec![1.0, 2.0],
        z: vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 0.0]],
        scale: ColorScale::discrete(1.0, 5).unwrap(),
        x_axis: Axis::new("angle", 0.0, 90.0),
        y_axis: Axis::new("v", 0.5, 2.5),
        colorbar: ColorBar::new("regime"),
    }
}

#[test]
fn test_canvas_too_small() {
    assert!(matches!(
        Layout::new(100, 100),
        Err(RenderError::CanvasTooSmall { width: 100, height: 100 })
    ));
}

#[test]
fn test_plot_area() {
    let layout = Layout::new(900, 760).unwrap();
    assert!(layout.plot.width > 0.0 && layout.plot.height > 0.0);
    assert!(layout.colorbar.x > layout.plot.right());
    assert!(layout.colorbar.right() < 900.0);
    assert_relative_eq!(layout.colorbar.height, layout.plot.height);
}

#[test]
fn test_pixel_mapping() {
    let layout = Layout::new(900, 760).unwrap();
    let figure = figure();

    assert_relative_eq!(layout.x_pixel(&figure, 0.0), layout.plot.x);
    assert_relative_eq!(layout.x_pixel(&figure, 90.0), layout.plot.right());
    // y grows upwards
    assert_relative_eq!(layout.y_pixel(&figure, 0.5), layout.plot.bottom());
    assert_relative_eq!(layout.y_pixel(&figure, 2.5), layout.plot.y);
}

#[test]
fn test_cells_are_clipped() {
    let layout = Layout::new(900, 760).unwrap();
    let cells = layout.cells(&figure());

    assert_eq!(cells.len(), 6);
    for (cell, _) in &cells {
        assert!(cell.x >= layout.plot.x - 1e-9);
        assert!(cell.right() <= layout.plot.right() + 1e-9);
    }

    // The first and last columns are half cells at the axis limits
    let first = cells[0].0;
    let middle = cells[1].0;
    assert_relative_eq!(first.width * 2.0, middle.width, max_relative = 1e-12);
    assert_eq!(cells[5].1, 0.0);
}

#[test]
fn test_colorbar_bands_cover_bar() {
    let layout = Layout::new(900, 760).unwrap();
    let bands = layout.colorbar_bands(&figure());

    assert_eq!(bands.len(), 5);
    assert_relative_eq!(bands[0].0.bottom(), layout.colorbar.bottom());
    assert_relative_eq!(bands[4].0.y, layout.colorbar.y, epsilon = 1e-9);
    let total: f64 = bands.iter().map(|(r, _)| r.height).sum();
    assert_relative_eq!(total, layout.colorbar.height, max_relative = 1e-12);
}
