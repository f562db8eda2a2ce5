//! Scene writer backed by `plotters`.
//!
//! Polar coordinates are projected onto a square pixel canvas. SVG goes
//! through `SVGBackend`; png, bmp and jpeg go through `BitMapBackend`.
//! Bitmap text goes through the `ttf` feature (on by default), which loads
//! system fonts through fontconfig at runtime. When no font can be loaded
//! the bitmap keeps its grid and markers and the labels are skipped with a
//! warning.

use crate::domain::model::MarkerShape;
use crate::domain::ports::{ImageFormat, SceneWriter};
use crate::domain::scene::{DrawCommand, LabelStyle, PolarPoint, Scene, VAlign};
use crate::utils::error::{RadarError, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontFamily, FontStyle};
use std::fs;
use std::path::Path;

const MARGIN_PX: f64 = 20.0;
/// 最外層文字之外再留的半徑
const EXTENT_PADDING: f64 = 0.5;
const MARKER_RADIUS_PT: f64 = 3.0;
const DASH_PX: f64 = 6.0;
const GAP_PX: f64 = 4.0;
const POINTS_PER_INCH: f64 = 72.0;

const GRID: RGBColor = RGBColor(204, 204, 204);
const BOUNDARY: RGBColor = RGBColor(128, 128, 128);

/// tab10
const MARKER_COLORS: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

#[derive(Debug, Clone, Default)]
pub struct PlottersWriter;

impl PlottersWriter {
    pub fn new() -> Self {
        Self
    }

    /// 點陣圖能否畫出文字：需要 `ttf` feature 並且系統上找得到字型
    pub fn bitmap_labels_available() -> bool {
        cfg!(feature = "ttf") && font_loads()
    }
}

#[cfg(feature = "ttf")]
fn font_loads() -> bool {
    let sample = LabelStyle {
        font_size: 10.0,
        bold: false,
        v_align: VAlign::Center,
    };
    label_style(&sample, 1.0).font.layout_box("A").is_ok()
}

#[cfg(not(feature = "ttf"))]
fn font_loads() -> bool {
    false
}

impl SceneWriter for PlottersWriter {
    fn write_scene(&self, scene: &Scene, path: &Path, format: ImageFormat) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let size = (scene.size_px, scene.size_px);
        match format {
            ImageFormat::Svg => {
                let area = SVGBackend::new(path, size).into_drawing_area();
                paint(&area, scene, true)?;
                area.present().map_err(render_error("write svg"))?;
            }
            ImageFormat::Png | ImageFormat::Bmp | ImageFormat::Jpeg => {
                let with_text = Self::bitmap_labels_available();
                if !with_text {
                    tracing::warn!(
                        "⚠️ No usable font for bitmap text, labels are omitted from {:?} output",
                        format
                    );
                }
                let area = BitMapBackend::new(path, size).into_drawing_area();
                paint(&area, scene, with_text)?;
                area.present().map_err(render_error("write bitmap"))?;
            }
        }

        tracing::debug!("Canvas written to {}", path.display());
        Ok(())
    }

    fn display(&self, path: &Path) -> Result<()> {
        tracing::debug!("Headless canvas, nothing to display for {}", path.display());
        Ok(())
    }
}

fn render_error<E: std::fmt::Display>(what: &'static str) -> impl Fn(E) -> RadarError {
    move |e| RadarError::RenderError {
        message: format!("failed to {what}: {e}"),
    }
}

struct Projection {
    center: f64,
    scale: f64,
    theta_offset: f64,
    direction: f64,
}

impl Projection {
    fn new(scene: &Scene) -> Self {
        let outermost = scene
            .commands
            .iter()
            .flat_map(|command| match command {
                DrawCommand::Line { from, to, .. } => vec![from.r, to.r],
                DrawCommand::Text { at, .. } | DrawCommand::Marker { at, .. } => vec![at.r],
            })
            .fold(scene.axes.radial_limit.1, f64::max);
        let center = scene.size_px as f64 / 2.0;
        let usable = (center - MARGIN_PX).max(1.0);

        Self {
            center,
            scale: usable / (outermost + EXTENT_PADDING),
            theta_offset: scene.axes.theta_offset,
            direction: scene.axes.theta_direction,
        }
    }

    fn point(&self, p: PolarPoint) -> (f64, f64) {
        let angle = self.theta_offset + self.direction * p.theta;
        let radius = p.r * self.scale;
        (
            self.center + radius * angle.cos(),
            self.center - radius * angle.sin(),
        )
    }

    fn pixel(&self, p: PolarPoint) -> (i32, i32) {
        let (x, y) = self.point(p);
        (x.round() as i32, y.round() as i32)
    }

    fn length(&self, r: f64) -> i32 {
        (r * self.scale).round() as i32
    }

    fn origin(&self) -> (i32, i32) {
        let c = self.center.round() as i32;
        (c, c)
    }
}

fn paint<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    scene: &Scene,
    with_text: bool,
) -> Result<()> {
    let projection = Projection::new(scene);
    let pt_to_px = scene.dpi as f64 / POINTS_PER_INCH;

    area.fill(&WHITE).map_err(render_error("clear canvas"))?;

    for tick in &scene.axes.radial_ticks {
        area.draw(&Circle::new(
            projection.origin(),
            projection.length(*tick),
            GRID.stroke_width(1),
        ))
        .map_err(render_error("draw radial grid"))?;
    }
    area.draw(&Circle::new(
        projection.origin(),
        projection.length(scene.axes.radial_limit.1),
        BLACK.stroke_width(1),
    ))
    .map_err(render_error("draw outer spine"))?;

    let marker_radius = (MARKER_RADIUS_PT * pt_to_px).round().max(1.0) as i32;
    let mut marker_count = 0usize;

    for command in &scene.commands {
        match command {
            DrawCommand::Line { from, to } => {
                let from = projection.point(*from);
                let to = projection.point(*to);
                for (start, end) in dash_segments(from, to, DASH_PX, GAP_PX) {
                    area.draw(&PathElement::new(
                        vec![round_point(start), round_point(end)],
                        BOUNDARY.stroke_width(1),
                    ))
                    .map_err(render_error("draw line"))?;
                }
            }
            DrawCommand::Text { .. } if !with_text => {}
            DrawCommand::Text { at, text, style } => {
                let text_style = label_style(style, pt_to_px);
                area.draw_text(text, &text_style, projection.pixel(*at))
                    .map_err(render_error("draw text"))?;
            }
            DrawCommand::Marker { at, shape, .. } => {
                let color = MARKER_COLORS[marker_count % MARKER_COLORS.len()];
                marker_count += 1;
                let (x, y) = projection.pixel(*at);
                draw_marker(area, (x, y), marker_radius, *shape, color)?;
            }
        }
    }

    Ok(())
}

fn draw_marker<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    (x, y): (i32, i32),
    radius: i32,
    shape: MarkerShape,
    color: RGBColor,
) -> Result<()> {
    let half_base = (radius as f64 * 0.866).round() as i32;
    let half_height = radius / 2;
    match shape {
        MarkerShape::Circle => area
            .draw(&Circle::new((x, y), radius, color.filled()))
            .map_err(render_error("draw marker")),
        MarkerShape::TriangleUp => area
            .draw(&Polygon::new(
                vec![
                    (x, y - radius),
                    (x - half_base, y + half_height),
                    (x + half_base, y + half_height),
                ],
                color.filled(),
            ))
            .map_err(render_error("draw marker")),
        MarkerShape::TriangleDown => area
            .draw(&Polygon::new(
                vec![
                    (x, y + radius),
                    (x - half_base, y - half_height),
                    (x + half_base, y - half_height),
                ],
                color.filled(),
            ))
            .map_err(render_error("draw marker")),
    }
}

fn label_style(style: &LabelStyle, pt_to_px: f64) -> TextStyle<'static> {
    let weight = if style.bold {
        FontStyle::Bold
    } else {
        FontStyle::Normal
    };
    let v = match style.v_align {
        VAlign::Top => VPos::Top,
        VAlign::Center => VPos::Center,
        VAlign::Baseline => VPos::Bottom,
    };

    TextStyle::from(FontDesc::new(
        FontFamily::SansSerif,
        style.font_size * pt_to_px,
        weight,
    ))
    .pos(Pos::new(HPos::Center, v))
}

fn round_point((x, y): (f64, f64)) -> (i32, i32) {
    (x.round() as i32, y.round() as i32)
}

/// 把一條線切成虛線段
fn dash_segments(
    from: (f64, f64),
    to: (f64, f64),
    dash: f64,
    gap: f64,
) -> Vec<((f64, f64), (f64, f64))> {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let length = dx.hypot(dy);
    if length <= f64::EPSILON {
        return Vec::new();
    }

    let (ux, uy) = (dx / length, dy / length);
    let mut segments = Vec::new();
    let mut offset = 0.0;
    while offset < length {
        let end = (offset + dash).min(length);
        segments.push((
            (from.0 + ux * offset, from.1 + uy * offset),
            (from.0 + ux * end, from.1 + uy * end),
        ));
        offset = end + gap;
    }
    segments
}
