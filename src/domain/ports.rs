use crate::domain::scene::Scene;
use crate::utils::error::{RadarError, Result};
use std::path::Path;

/// 輸出影像格式，由副檔名決定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Svg,
    Png,
    Bmp,
    Jpeg,
}

impl ImageFormat {
    pub const DEFAULT_EXTENSION: &'static str = "svg";

    pub fn from_extension(extension: &str) -> Result<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "svg" => Ok(ImageFormat::Svg),
            "png" => Ok(ImageFormat::Png),
            "bmp" => Ok(ImageFormat::Bmp),
            "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
            _ => Err(RadarError::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }
}

/// 把 Scene 實際畫出並寫入檔案的畫布
pub trait SceneWriter {
    fn write_scene(&self, scene: &Scene, path: &Path, format: ImageFormat) -> Result<()>;

    /// 互動顯示；headless 環境下不做任何事
    fn display(&self, _path: &Path) -> Result<()> {
        Ok(())
    }
}
