use crate::adapters::PlottersWriter;
use crate::config::{load_radar, CliConfig};
use crate::core::renderer::RadarRenderer;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    Rendered(PathBuf),
    DryRun { markers: usize },
}

/// 載入 -> 版面 -> 輸出
pub fn run(config: &CliConfig) -> Result<RunOutcome> {
    config.validate()?;
    let style = config.chart_style()?;

    tracing::info!("📁 Loading radar from: {}", config.input_yaml.display());
    let radar = load_radar(&config.input_yaml)?;

    let mut rng = match config.seed {
        Some(seed) => {
            tracing::debug!("Using jitter seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let renderer = RadarRenderer::new(PlottersWriter::new(), style);

    if config.dry_run {
        tracing::info!("🔍 DRY RUN MODE - no image will be written");
        let scene = renderer.compose(&radar, &mut rng)?;
        for (at, shape, name) in scene.markers() {
            tracing::info!(
                "  {} θ={:.1}° r={:.2} ({})",
                name,
                at.theta.to_degrees(),
                at.r,
                shape.as_str()
            );
        }
        return Ok(RunOutcome::DryRun {
            markers: scene.marker_count(),
        });
    }

    let path = renderer.render(&radar, &config.output, &mut rng)?;
    Ok(RunOutcome::Rendered(path))
}
