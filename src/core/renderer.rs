use crate::core::composer::{draw_chart, draw_technologies, ChartStyle};
use crate::domain::model::Radar;
use crate::domain::ports::{ImageFormat, SceneWriter};
use crate::domain::scene::Scene;
use crate::utils::error::Result;
use rand::Rng;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// 骨架 -> 標記 -> 輸出，每個階段只執行一次
pub struct RadarRenderer<W: SceneWriter> {
    writer: W,
    style: ChartStyle,
}

impl<W: SceneWriter> RadarRenderer<W> {
    pub fn new(writer: W, style: ChartStyle) -> Self {
        Self { writer, style }
    }

    /// 只產生 Scene，不寫檔
    pub fn compose<R: Rng>(&self, radar: &Radar, rng: &mut R) -> Result<Scene> {
        tracing::info!("🧭 Drawing chart skeleton...");
        let mut scene = draw_chart(radar.categories(), radar.quadrants(), &self.style)?;

        tracing::info!("📍 Placing {} technologies...", radar.technology_count());
        draw_technologies(&mut scene, radar, &self.style.jitter, rng)?;

        Ok(scene)
    }

    pub fn render<R: Rng>(&self, radar: &Radar, output: &Path, rng: &mut R) -> Result<PathBuf> {
        let scene = self.compose(radar, rng)?;

        let (path, format) = resolve_output_path(output)?;
        tracing::info!("💾 Saving {} markers to {} ({:?})", scene.marker_count(), path.display(), format);
        self.writer.write_scene(&scene, &path, format)?;
        self.writer.display(&path)?;

        Ok(path)
    }
}

/// 依副檔名決定格式；沒有副檔名時補上 `.svg`
pub fn resolve_output_path(output: &Path) -> Result<(PathBuf, ImageFormat)> {
    match output.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if !ext.is_empty() => Ok((output.to_path_buf(), ImageFormat::from_extension(ext)?)),
        _ => {
            let mut name = OsString::from(output.as_os_str());
            if !name.to_string_lossy().ends_with('.') {
                name.push(".");
            }
            name.push(ImageFormat::DEFAULT_EXTENSION);
            Ok((PathBuf::from(name), ImageFormat::Svg))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{CategoryCells, TechnologyEntry};
    use crate::utils::error::RadarError;
    use indexmap::IndexMap;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingWriter {
        written: RefCell<Vec<(PathBuf, ImageFormat, usize)>>,
        displayed: RefCell<Vec<PathBuf>>,
    }

    impl SceneWriter for &RecordingWriter {
        fn write_scene(&self, scene: &Scene, path: &Path, format: ImageFormat) -> Result<()> {
            self.written
                .borrow_mut()
                .push((path.to_path_buf(), format, scene.marker_count()));
            Ok(())
        }

        fn display(&self, path: &Path) -> Result<()> {
            self.displayed.borrow_mut().push(path.to_path_buf());
            Ok(())
        }
    }

    fn radar_with_quadrant(quadrant: &str) -> Radar {
        let mut cells = CategoryCells::new();
        cells.insert(
            "Adopt".to_string(),
            vec![TechnologyEntry::bare("Go"), TechnologyEntry::bare("Rust")],
        );
        let mut technologies = IndexMap::new();
        technologies.insert(quadrant.to_string(), cells);
        Radar::new(
            vec!["Languages".to_string()],
            vec!["Adopt".to_string()],
            technologies,
        )
        .unwrap()
    }

    #[test]
    fn test_resolve_output_path() {
        let (path, format) = resolve_output_path(Path::new("out/radar.png")).unwrap();
        assert_eq!(path, PathBuf::from("out/radar.png"));
        assert_eq!(format, ImageFormat::Png);

        let (path, format) = resolve_output_path(Path::new("radar")).unwrap();
        assert_eq!(path, PathBuf::from("radar.svg"));
        assert_eq!(format, ImageFormat::Svg);

        let (path, _) = resolve_output_path(Path::new("radar.")).unwrap();
        assert_eq!(path, PathBuf::from("radar.svg"));

        let (_, format) = resolve_output_path(Path::new("radar.JPG")).unwrap();
        assert_eq!(format, ImageFormat::Jpeg);

        assert!(matches!(
            resolve_output_path(Path::new("radar.pdf")),
            Err(RadarError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_render_writes_once_and_displays() {
        let writer = RecordingWriter::default();
        let renderer = RadarRenderer::new(&writer, ChartStyle::default());
        let radar = radar_with_quadrant("Languages");

        let path = renderer
            .render(&radar, Path::new("radar"), &mut StdRng::seed_from_u64(3))
            .unwrap();

        assert_eq!(path, PathBuf::from("radar.svg"));
        let written = writer.written.borrow();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0], (PathBuf::from("radar.svg"), ImageFormat::Svg, 2));
        assert_eq!(writer.displayed.borrow().len(), 1);
    }

    #[test]
    fn test_render_stops_on_unknown_quadrant() {
        let writer = RecordingWriter::default();
        let renderer = RadarRenderer::new(&writer, ChartStyle::default());
        let radar = radar_with_quadrant("Unknown");

        let err = renderer
            .render(&radar, Path::new("radar.svg"), &mut StdRng::seed_from_u64(3))
            .unwrap_err();

        assert!(err.to_string().contains("Unknown"));
        assert!(writer.written.borrow().is_empty());
        assert!(writer.displayed.borrow().is_empty());
    }
}
