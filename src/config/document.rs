use crate::domain::model::{CategoryCells, Radar, TechnologyEntry};
use crate::utils::error::{RadarError, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

/// YAML 輸入文件
///
/// ```yaml
/// quadrants: [Languages, Tools]
/// categories: [Adopt, Trial]
/// technologies:
///   Languages:
///     Adopt: [Go]
///   Tools:
///     Trial:
///       - Terraform: incoming
///     Adopt:
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct RadarDocument {
    pub quadrants: Vec<String>,
    pub categories: Vec<String>,
    /// `null` 的 quadrant 或 cell 表示沒有 technology
    pub technologies: IndexMap<String, Option<IndexMap<String, Option<Vec<TechnologyEntry>>>>>,
}

impl RadarDocument {
    /// 從 YAML 檔案載入
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(RadarError::InputNotFound {
                    path: path.display().to_string(),
                });
            }
            Err(e) => return Err(RadarError::IoError(e)),
        };

        Self::from_yaml_str(&content).map_err(|e| match e {
            RadarError::DocumentError { message, .. } => RadarError::DocumentError {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })
    }

    /// 從 YAML 字串解析
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| RadarError::DocumentError {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })
    }

    pub fn into_radar(self) -> Result<Radar> {
        let technologies = self
            .technologies
            .into_iter()
            .map(|(quadrant, cells)| {
                let cells: CategoryCells = cells
                    .unwrap_or_default()
                    .into_iter()
                    .map(|(category, entries)| (category, entries.unwrap_or_default()))
                    .collect();
                (quadrant, cells)
            })
            .collect();

        Radar::new(self.quadrants, self.categories, technologies)
    }
}

/// 載入並驗證 radar
pub fn load_radar<P: AsRef<Path>>(path: P) -> Result<Radar> {
    let document = RadarDocument::from_file(&path)?;
    let radar = document.into_radar()?;
    tracing::info!(
        "📄 Loaded {} quadrants, {} categories, {} technologies",
        radar.quadrants().len(),
        radar.categories().len(),
        radar.technology_count()
    );
    Ok(radar)
}
