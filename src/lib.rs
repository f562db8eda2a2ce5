pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use app::{run, RunOutcome};
#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::PlottersWriter;
pub use config::{load_radar, RadarDocument};
pub use core::composer::{classify, draw_chart, draw_technologies, ChartStyle};
pub use core::geometry::{QuadrantGeometry, RadialJitter};
pub use core::renderer::{resolve_output_path, RadarRenderer};
pub use domain::model::{MarkerShape, Radar, Status, TechnologyEntry};
pub use domain::ports::{ImageFormat, SceneWriter};
pub use domain::scene::{DrawCommand, PolarPoint, Scene};
pub use utils::error::{RadarError, Result};
