use crate::core::geometry::{QuadrantGeometry, RadialJitter};
use crate::domain::model::{MarkerShape, Radar, Status, TechnologyEntry};
use crate::domain::scene::{DrawCommand, LabelStyle, PolarAxes, PolarPoint, Scene, VAlign};
use crate::utils::error::{RadarError, Result};
use rand::Rng;
use std::f64::consts::FRAC_PI_2;

const LABEL_FONT_SIZE: f64 = 10.0;
const QUADRANT_FONT_SIZE: f64 = 12.0;
/// quadrant 標籤放在最外圈之外
const QUADRANT_LABEL_OFFSET: f64 = 1.5;

/// 外觀參數，不影響版面演算法本身
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartStyle {
    pub size_inches: u32,
    pub dpi: u32,
    pub jitter: RadialJitter,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            size_inches: 12,
            dpi: 100,
            jitter: RadialJitter::default(),
        }
    }
}

impl ChartStyle {
    pub fn size_px(&self) -> u32 {
        self.size_inches.saturating_mul(self.dpi)
    }
}

/// 畫出 radar 骨架: 同心圓、category 標籤、quadrant 邊界線與標籤。
///
/// 0 度在正上方並順時針前進。繪製順序決定疊放順序，technology 標記最後才畫。
pub fn draw_chart(categories: &[String], quadrants: &[String], style: &ChartStyle) -> Result<Scene> {
    let geometry = QuadrantGeometry::new(quadrants.len())?;
    if categories.is_empty() {
        return Err(RadarError::ConfigError {
            message: "category count must be at least 1".to_string(),
        });
    }

    let outer_radius = categories.len() as f64;
    let axes = PolarAxes {
        theta_offset: FRAC_PI_2,
        theta_direction: -1.0,
        radial_limit: (0.0, outer_radius),
        radial_ticks: (1..=categories.len()).map(|tick| tick as f64).collect(),
    };
    let mut scene = Scene::new(style.size_px(), style.dpi, axes);

    let category_label = LabelStyle {
        font_size: LABEL_FONT_SIZE,
        bold: true,
        v_align: VAlign::Baseline,
    };
    for (index, label) in categories.iter().enumerate() {
        let radius = index as f64 + 0.5;
        for theta in [0.0, FRAC_PI_2] {
            scene.push(DrawCommand::Text {
                at: PolarPoint::new(theta, radius),
                text: label.clone(),
                style: category_label,
            });
        }
    }

    for index in 0..quadrants.len() {
        let angle = geometry.start_angle(index);
        scene.push(DrawCommand::Line {
            from: PolarPoint::new(angle, 0.0),
            to: PolarPoint::new(angle, outer_radius),
        });
    }

    let quadrant_label = LabelStyle {
        font_size: QUADRANT_FONT_SIZE,
        bold: true,
        v_align: VAlign::Center,
    };
    let label_radius = outer_radius + QUADRANT_LABEL_OFFSET;
    for (index, name) in quadrants.iter().enumerate() {
        scene.push(DrawCommand::Text {
            at: PolarPoint::new(geometry.center_angle(index), label_radius),
            text: name.clone(),
            style: quadrant_label,
        });
    }

    tracing::debug!(
        "Chart skeleton: {} quadrants, {} categories, {} commands",
        quadrants.len(),
        categories.len(),
        scene.commands.len()
    );

    Ok(scene)
}

/// 取得名稱與標記形狀；未知的狀態會記錄警告並退回圓點
pub fn classify(entry: &TechnologyEntry) -> (&str, MarkerShape) {
    let shape = match &entry.status {
        Status::Current => MarkerShape::Circle,
        Status::Incoming => MarkerShape::TriangleUp,
        Status::Outgoing => MarkerShape::TriangleDown,
        Status::Unknown(tag) => {
            tracing::warn!(
                "⚠️ Unknown tech status '{}' for '{}', should be 'incoming' or 'outgoing'",
                tag,
                entry.name
            );
            MarkerShape::Circle
        }
    };
    (entry.name.as_str(), shape)
}

/// 依宣告順序放置每個 technology 的標記與名稱
pub fn draw_technologies<R: Rng>(
    scene: &mut Scene,
    radar: &Radar,
    jitter: &RadialJitter,
    rng: &mut R,
) -> Result<()> {
    let geometry = QuadrantGeometry::new(radar.quadrants().len())?;
    let name_style = LabelStyle {
        font_size: LABEL_FONT_SIZE,
        bold: false,
        v_align: VAlign::Top,
    };

    for (quadrant, cells) in radar.technologies() {
        let quadrant_index = radar.quadrant_index(quadrant)?;

        for (category, entries) in cells {
            let category_index = radar.category_index(category)?;
            let count = entries.len();

            for (index, entry) in entries.iter().enumerate() {
                let angle = geometry.technology_angle(quadrant_index, index, count);
                let radius = jitter.random_radius(category_index, rng);
                let (name, shape) = classify(entry);
                let at = PolarPoint::new(angle, radius);

                tracing::debug!(
                    "📍 {} [{}/{}] at θ={:.3} r={:.3} ({})",
                    name,
                    quadrant,
                    category,
                    angle,
                    radius,
                    shape.as_str()
                );

                scene.push(DrawCommand::Marker {
                    at,
                    shape,
                    label: name.to_string(),
                });
                scene.push(DrawCommand::Text {
                    at,
                    text: name.to_string(),
                    style: name_style,
                });
            }
        }
    }

    Ok(())
}
