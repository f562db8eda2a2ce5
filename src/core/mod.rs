pub mod composer;
pub mod geometry;
pub mod renderer;

pub use crate::domain::model::{MarkerShape, Radar, Status, TechnologyEntry};
pub use crate::domain::ports::{ImageFormat, SceneWriter};
pub use crate::utils::error::Result;
