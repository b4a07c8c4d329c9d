use approx::assert_relative_eq;

use crate::color::ColorScale;
use crate::error::RenderError;
use crate::figure::*;

fn figure(rows: usize, columns: usize) -> Figure {
    Figure {
        x: (0..columns).map(|i| i as f64).collect(),
        y: (0..rows).map(|i| i as f64).collect(),
        z: vec![vec![1.0; columns]; rows],
        scale: ColorScale::discrete(1.0, 5).unwrap(),
        x_axis: Axis::new("x", 0.0, columns as f64),
        y_axis: Axis::new("y", 0.0, rows as f64),
        colorbar: ColorBar::new("value"),
    }
}

#[test]
fn test_content_types() {
    assert_eq!(ImageFormat::Svg.content_type(), "image/svg+xml");
    assert_eq!(ImageFormat::Png.content_type(), "image/png");
    assert_eq!(ImageFormat::Jpeg.content_type(), "image/jpeg");
    assert_eq!(ImageFormat::Pdf.content_type(), "application/pdf");
}

#[test]
fn test_tick_step() {
    let axis = Axis::new("Impact angle", 0.0, 90.0).with_tick_step(15.0);
    assert_eq!(axis.ticks, vec![0.0, 15.0, 30.0, 45.0, 60.0, 75.0, 90.0]);

    let axis = Axis::new("v", 0.99, 4.01).with_tick_step(0.5);
    assert_eq!(axis.ticks.len(), 7);
    assert_relative_eq!(axis.ticks[0], 1.0);
    assert_relative_eq!(axis.ticks[6], 4.0);
}

#[test]
fn test_validate_shape() {
    assert!(figure(3, 4).validate().is_ok());

    let mut short = figure(3, 4);
    short.z.pop();
    assert!(matches!(
        short.validate(),
        Err(RenderError::RowCount { expected: 3, found: 2 })
    ));

    let mut ragged = figure(3, 4);
    ragged.z[1].push(2.0);
    assert!(matches!(
        ragged.validate(),
        Err(RenderError::ColumnCount { row: 1, expected: 4, found: 5 })
    ));

    let mut empty = figure(3, 4);
    empty.x.clear();
    assert!(matches!(empty.validate(), Err(RenderError::EmptyAxis("x"))));

    let mut flipped = figure(3, 4);
    flipped.y_axis = Axis::new("y", 2.0, 1.0);
    assert!(matches!(flipped.validate(), Err(RenderError::InvalidRange { axis: "y", .. })));
}

#[test]
fn test_cell_edges() {
    assert_eq!(cell_edges(&[]), Vec::<f64>::new());
    assert_eq!(cell_edges(&[2.0]), vec![1.5, 2.5]);
    assert_eq!(cell_edges(&[0.0, 1.0, 2.0]), vec![-0.5, 0.5, 1.5, 2.5]);
}
