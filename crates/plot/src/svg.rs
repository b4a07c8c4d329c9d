//! SVG back end.

use std::fmt::Write;

use crate::figure::Figure;
use crate::layout::{Layout, Rect};

const FONT: &str = "font-family=\"sans-serif\" font-size=\"13\" fill=\"#222222\"";
const TICK_LENGTH: f64 = 5.0;

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Formats a tick value without trailing zeros.
pub fn tick_label(value: f64) -> String {
    let text = format!("{:.2}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" { "0".to_string() } else { text.to_string() }
}

fn rect(out: &mut String, r: &Rect, fill: &str) {
    let _ = writeln!(
        out,
        r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}" stroke="{}" stroke-width="0.3"/>"#,
        r.x, r.y, r.width, r.height, fill, fill
    );
}

fn line(out: &mut String, x1: f64, y1: f64, x2: f64, y2: f64) {
    let _ = writeln!(
        out,
        r##"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="#222222" stroke-width="1"/>"##,
        x1, y1, x2, y2
    );
}

fn text(out: &mut String, x: f64, y: f64, anchor: &str, content: &str) {
    let _ = writeln!(
        out,
        r#"<text x="{:.2}" y="{:.2}" text-anchor="{}" {}>{}</text>"#,
        x,
        y,
        anchor,
        FONT,
        escape(content)
    );
}

fn rotated_text(out: &mut String, x: f64, y: f64, content: &str) {
    let _ = writeln!(
        out,
        r#"<text x="{:.2}" y="{:.2}" text-anchor="middle" transform="rotate(-90, {:.2}, {:.2})" {}>{}</text>"#,
        x,
        y,
        x,
        y,
        FONT,
        escape(content)
    );
}

/// Renders a validated figure as an SVG document.
pub fn render(figure: &Figure, layout: &Layout) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = layout.width,
        h = layout.height
    );
    let _ = writeln!(out, r#"<rect width="100%" height="100%" fill="white"/>"#);

    out.push_str("<g shape-rendering=\"crispEdges\">\n");
    for (cell, value) in layout.cells(figure) {
        rect(&mut out, &cell, &figure.scale.color_for(value).to_hex());
    }
    out.push_str("</g>\n");

    let plot = layout.plot;
    let _ = writeln!(
        out,
        r##"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="none" stroke="#222222" stroke-width="1"/>"##,
        plot.x, plot.y, plot.width, plot.height
    );

    for &tick in &figure.x_axis.ticks {
        let x = layout.x_pixel(figure, tick);
        line(&mut out, x, plot.bottom(), x, plot.bottom() + TICK_LENGTH);
        text(&mut out, x, plot.bottom() + 20.0, "middle", &tick_label(tick));
    }
    for &tick in &figure.y_axis.ticks {
        let y = layout.y_pixel(figure, tick);
        line(&mut out, plot.x - TICK_LENGTH, y, plot.x, y);
        text(&mut out, plot.x - 8.0, y + 4.0, "end", &tick_label(tick));
    }
    text(
        &mut out,
        plot.x + 0.5 * plot.width,
        plot.bottom() + 45.0,
        "middle",
        &figure.x_axis.label,
    );
    rotated_text(&mut out, plot.x - 50.0, plot.y + 0.5 * plot.height, &figure.y_axis.label);

    for (band, index) in layout.colorbar_bands(figure) {
        rect(&mut out, &band, &figure.scale.band_color(index).to_hex());
    }
    let bar = layout.colorbar;
    let _ = writeln!(
        out,
        r##"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="none" stroke="#222222" stroke-width="1"/>"##,
        bar.x, bar.y, bar.width, bar.height
    );
    for (value, label) in &figure.colorbar.ticks {
        let y = layout.colorbar_pixel(figure, *value);
        line(&mut out, bar.right(), y, bar.right() + TICK_LENGTH, y);
        text(&mut out, bar.right() + 8.0, y + 4.0, "start", label);
    }
    rotated_text(
        &mut out,
        bar.right() + 120.0,
        bar.y + 0.5 * bar.height,
        &figure.colorbar.label,
    );

    out.push_str("</svg>\n");
    out
}
