use crate::geometry::describe_arc;
use crate::scene::{Primitive, StrokeStyle, TextAnchor, TextNode};
use crate::stats::LanguageShare;
use rand::Rng;
use rand::rngs::StdRng;

/// Wedges at or below this span advance the donut cursor but emit no path.
pub const MIN_WEDGE_SPAN: f32 = 1.0;

/// Inner cutout of the donut, as a fraction of the outer radius.
const DONUT_HOLE_RATIO: f32 = 0.6;

const BAR_HEIGHT: f32 = 8.0;
const BAR_RADIUS: f32 = 4.0;

#[derive(Debug, Clone, PartialEq)]
pub struct DonutSlice {
    pub start_angle: f32,
    pub end_angle: f32,
    pub color: String,
}

/// Converts shares into contiguous angular slices starting at 12 o'clock.
/// The cursor advances by the signed span, so a degenerate negative
/// "Others" remainder keeps the remaining slices tiling the circle.
pub fn donut_slices(shares: &[LanguageShare]) -> Vec<DonutSlice> {
    let mut slices = Vec::with_capacity(shares.len());
    let mut angle = 0.0_f32;
    for share in shares {
        let span = share.percent * 3.6;
        slices.push(DonutSlice {
            start_angle: angle,
            end_angle: angle + span,
            color: share.color.clone(),
        });
        angle += span;
    }
    slices
}

/// Background track plus a left-aligned fill, drawn at the local origin.
/// The percent is taken as given: values past 100 overdraw the track, and
/// a non-positive fill width emits the track alone.
pub fn bar(track_length: f32, percent: f32, color: &str) -> Vec<Primitive> {
    let mut nodes = vec![Primitive::Rect {
        x: 0.0,
        y: 0.0,
        width: track_length,
        height: BAR_HEIGHT,
        rx: BAR_RADIUS,
        fill: None,
        class: Some("bar-bg".to_string()),
        opacity: None,
    }];
    let fill_width = track_length * percent / 100.0;
    if fill_width > 0.0 {
        nodes.push(Primitive::Rect {
            x: 0.0,
            y: 0.0,
            width: fill_width,
            height: BAR_HEIGHT,
            rx: BAR_RADIUS,
            fill: Some(color.to_string()),
            class: None,
            opacity: None,
        });
    }
    nodes
}

/// Circular progress: the foreground circle is dashed with the full
/// circumference and offset by the unfilled fraction, rotated -90 degrees
/// so the sweep starts at 12 o'clock.
pub fn ring(
    cx: f32,
    cy: f32,
    radius: f32,
    stroke_width: f32,
    percent: f32,
    color: &str,
    track_color: &str,
    label: &str,
) -> Vec<Primitive> {
    let circumference = 2.0 * std::f32::consts::PI * radius;
    let offset = circumference * (1.0 - percent / 100.0);
    vec![
        Primitive::Circle {
            cx,
            cy,
            r: radius,
            fill: None,
            stroke: Some(StrokeStyle::plain(track_color, stroke_width)),
            transform: None,
        },
        Primitive::Circle {
            cx,
            cy,
            r: radius,
            fill: None,
            stroke: Some(StrokeStyle {
                color: color.to_string(),
                width: stroke_width,
                dasharray: Some(circumference),
                dashoffset: Some(offset),
                round_cap: true,
            }),
            transform: Some(format!("rotate(-90 {cx:.2} {cy:.2})")),
        },
        Primitive::Text(TextNode {
            x: cx,
            y: cy + radius * 0.16,
            content: label.to_string(),
            font_size: (radius * 0.42).round(),
            bold: true,
            anchor: TextAnchor::Middle,
            ..Default::default()
        }),
    ]
}

/// Wedge fan, hole, and center count for an ordered share list.
pub fn donut(cx: f32, cy: f32, outer_radius: f32, shares: &[LanguageShare], hole_color: &str) -> Vec<Primitive> {
    let mut nodes = Vec::new();
    for slice in donut_slices(shares) {
        let span = slice.end_angle - slice.start_angle;
        if span <= MIN_WEDGE_SPAN {
            continue;
        }
        nodes.push(Primitive::Path {
            d: describe_arc(cx, cy, outer_radius, slice.start_angle, slice.end_angle),
            fill: Some(slice.color),
            stroke: None,
            opacity: None,
        });
    }
    nodes.push(Primitive::Circle {
        cx,
        cy,
        r: outer_radius * DONUT_HOLE_RATIO,
        fill: Some(hole_color.to_string()),
        stroke: None,
        transform: None,
    });
    nodes.push(Primitive::Text(TextNode {
        x: cx,
        y: cy + outer_radius * 0.12,
        content: shares.len().to_string(),
        font_size: (outer_radius * 0.38).round(),
        bold: true,
        anchor: TextAnchor::Middle,
        ..Default::default()
    }));
    nodes
}

/// Bounded random walk across `samples` evenly spaced x positions. Every
/// y stays inside `[margin, height - margin]`; the clamp is part of the
/// generator, not left to callers.
pub fn sparkline_walk(
    samples: usize,
    width: f32,
    height: f32,
    margin: f32,
    step: f32,
    rng: &mut StdRng,
) -> Vec<(f32, f32)> {
    let mut points = Vec::with_capacity(samples);
    let mut y = height / 2.0;
    for idx in 0..samples {
        let x = if samples > 1 {
            width * idx as f32 / (samples - 1) as f32
        } else {
            0.0
        };
        let delta = rng.gen_range(-step..=step);
        y = (y + delta).clamp(margin, height - margin);
        points.push((x, y));
    }
    points
}

/// Filled area with a vertical fade plus a stroke polyline over the same
/// points, drawn at the local origin.
pub fn sparkline(
    width: f32,
    height: f32,
    samples: usize,
    step: f32,
    margin: f32,
    color: &str,
    gradient_id: &str,
    rng: &mut StdRng,
) -> Vec<Primitive> {
    let points = sparkline_walk(samples, width, height, margin, step, rng);
    if points.is_empty() {
        return Vec::new();
    }

    let mut area = format!("M 0.00 {height:.2}");
    for (x, y) in &points {
        area.push_str(&format!(" L {x:.2} {y:.2}"));
    }
    area.push_str(&format!(" L {width:.2} {height:.2} Z"));

    let mut line = String::new();
    for (idx, (x, y)) in points.iter().enumerate() {
        let command = if idx == 0 { 'M' } else { 'L' };
        line.push_str(&format!("{command} {x:.2} {y:.2} "));
    }

    vec![
        Primitive::Path {
            d: area,
            fill: Some(format!("url(#{gradient_id})")),
            stroke: None,
            opacity: None,
        },
        Primitive::Path {
            d: line.trim_end().to_string(),
            fill: None,
            stroke: Some(StrokeStyle::plain(color, 2.0)),
            opacity: None,
        },
    ]
}

/// Decorative cell grid. Each cell draws twice from the generator: the
/// first draw can raise the opacity to 0.6, the second to 0.9.
pub fn activity_cells(
    cols: usize,
    rows: usize,
    cell_size: f32,
    pitch: f32,
    color: &str,
    rng: &mut StdRng,
) -> Vec<Primitive> {
    let mut nodes = Vec::with_capacity(cols * rows);
    for col in 0..cols {
        for row in 0..rows {
            let mut opacity = 0.1;
            if rng.gen_range(0.0..1.0) > 0.7 {
                opacity = 0.6;
            }
            if rng.gen_range(0.0..1.0) > 0.9 {
                opacity = 0.9;
            }
            nodes.push(Primitive::Rect {
                x: col as f32 * pitch,
                y: row as f32 * pitch,
                width: cell_size,
                height: cell_size,
                rx: 2.0,
                fill: Some(color.to_string()),
                class: None,
                opacity: Some(opacity),
            });
        }
    }
    nodes
}
