//! Draw commands produced by the composer and replayed by a canvas.
//!
//! A [`Scene`] is a recording of a polar chart: axis settings plus an ordered
//! list of primitives. Later commands are drawn on top of earlier ones.

use crate::domain::model::MarkerShape;

/// 極座標點，theta 為弧度
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarPoint {
    pub theta: f64,
    pub r: f64,
}

impl PolarPoint {
    pub fn new(theta: f64, r: f64) -> Self {
        Self { theta, r }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PolarAxes {
    /// 0 弧度在畫面上的位置 (從 3 點鐘方向逆時針量)
    pub theta_offset: f64,
    /// 1.0 逆時針，-1.0 順時針
    pub theta_direction: f64,
    pub radial_limit: (f64, f64),
    /// 每個值畫一個同心圓，不加文字
    pub radial_ticks: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
    Baseline,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelStyle {
    pub font_size: f64,
    pub bold: bool,
    /// 水平方向一律置中
    pub v_align: VAlign,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// 虛線
    Line { from: PolarPoint, to: PolarPoint },
    Text {
        at: PolarPoint,
        text: String,
        style: LabelStyle,
    },
    Marker {
        at: PolarPoint,
        shape: MarkerShape,
        label: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub size_px: u32,
    /// 字型大小以點為單位，換算像素時使用
    pub dpi: u32,
    pub axes: PolarAxes,
    pub commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new(size_px: u32, dpi: u32, axes: PolarAxes) -> Self {
        Self {
            size_px,
            dpi,
            axes,
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn markers(&self) -> impl Iterator<Item = (&PolarPoint, MarkerShape, &str)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Marker { at, shape, label } => Some((at, *shape, label.as_str())),
            _ => None,
        })
    }

    pub fn marker_count(&self) -> usize {
        self.markers().count()
    }
}
