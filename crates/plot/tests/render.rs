use plot::{Axis, ColorBar, ColorScale, Figure, ImageFormat, MapRenderer, RenderError, Renderer};

fn regime_map() -> Figure {
    let x: Vec<f64> = (0..91).map(|i| i as f64).collect();
    let y: Vec<f64> = (0..91).map(|i| 0.99 + 3.02 * i as f64 / 90.0).collect();
    let z = (0..91)
        .map(|row| (0..91).map(|column| ((row + column) % 6) as f64).collect())
        .collect();

    Figure {
        x,
        y,
        z,
        scale: ColorScale::discrete(1.0, 5).unwrap(),
        x_axis: Axis::new("Impact angle [deg]", 0.0, 90.0).with_tick_step(15.0),
        y_axis: Axis::new("v / v_esc", 0.99, 4.01).with_tick_step(0.5),
        colorbar: ColorBar::new("Collision regime & <outcome>").with_ticks(vec![
            (1.0, "Accretion".to_string()),
            (5.0, "Hit and Run".to_string()),
        ]),
    }
}

#[test]
fn test_svg_document() {
    let bytes = MapRenderer::default()
        .render(&regime_map(), ImageFormat::Svg)
        .unwrap();
    let svg = String::from_utf8(bytes).unwrap();

    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains("Impact angle [deg]"));
    assert!(svg.contains("Hit and Run"));
    assert!(svg.contains("Collision regime &amp; &lt;outcome&gt;"));
    // Zero cells are drawn black
    assert!(svg.contains("fill=\"#000000\""));
}

#[test]
fn test_png_matches_drawing() {
    let figure = regime_map();
    let bytes = MapRenderer::default().render(&figure, ImageFormat::Png).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

    let image = image::load_from_memory(&bytes).unwrap().to_rgb8();
    assert_eq!(image.dimensions(), (900, 760));

    // Centre of the cell at angle 46, ratio 2.5: plot area is 590 x 660 px
    // starting at (80, 30)
    let x = (80.0 + 590.0 * 46.0 / 90.0) as u32;
    let y = (30.0 + 660.0 * 0.5) as u32;
    let expected = figure.scale.color_for(figure.z[45][46]);
    assert_eq!(image.get_pixel(x, y).0, [expected.r, expected.g, expected.b]);

    // Background outside the plot stays white
    assert_eq!(image.get_pixel(5, 5).0, [255, 255, 255]);
}

#[test]
fn test_pdf_document() {
    let bytes = MapRenderer::default()
        .render(&regime_map(), ImageFormat::Pdf)
        .unwrap();
    assert_eq!(&bytes[..5], b"%PDF-");
}

#[test]
fn test_jpeg_signature() {
    let bytes = MapRenderer::new(400, 300)
        .render(&regime_map(), ImageFormat::Jpeg)
        .unwrap();
    assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
}

#[test]
fn test_invalid_figure_is_rejected() {
    let mut figure = regime_map();
    figure.z.truncate(10);
    assert!(matches!(
        MapRenderer::default().render(&figure, ImageFormat::Png),
        Err(RenderError::RowCount { expected: 91, found: 10 })
    ));
}
