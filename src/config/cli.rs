use crate::core::composer::ChartStyle;
use crate::core::geometry::RadialJitter;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_range, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "tech-radar")]
#[command(version)]
#[command(about = "Render a technology radar from a YAML description")]
pub struct CliConfig {
    /// Name of the input file
    #[arg(long = "input-yaml", default_value = "tech_radar.yml")]
    pub input_yaml: PathBuf,

    /// Name of the output file; the extension selects the image format
    #[arg(long, default_value = "tech_radar.svg")]
    pub output: PathBuf,

    /// Tech radar size in inches
    #[arg(long, default_value = "12")]
    pub size: u32,

    /// Minimum offset of the random radius inside a ring
    #[arg(long = "min-radius", default_value = "0.2")]
    pub min_radius: f64,

    /// Maximum offset of the random radius inside a ring
    #[arg(long = "max-radius", default_value = "0.8")]
    pub max_radius: f64,

    /// Seed for the radius jitter, for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Lay out the radar without writing the image
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            input_yaml: PathBuf::from("tech_radar.yml"),
            output: PathBuf::from("tech_radar.svg"),
            size: 12,
            min_radius: 0.2,
            max_radius: 0.8,
            seed: None,
            dry_run: false,
            verbose: false,
        }
    }
}

impl CliConfig {
    pub fn chart_style(&self) -> Result<ChartStyle> {
        Ok(ChartStyle {
            size_inches: self.size,
            jitter: RadialJitter::new(self.min_radius, self.max_radius)?,
            ..ChartStyle::default()
        })
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input_yaml", &self.input_yaml.to_string_lossy())?;
        validate_path("output", &self.output.to_string_lossy())?;
        validate_range("size", self.size, 1, 100)?;
        self.chart_style().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["tech-radar"]);
        assert_eq!(config.input_yaml, PathBuf::from("tech_radar.yml"));
        assert_eq!(config.output, PathBuf::from("tech_radar.svg"));
        assert_eq!(config.size, 12);
        assert!(config.validate().is_ok());

        let style = config.chart_style().unwrap();
        assert_eq!(style.size_px(), 1200);
        assert_eq!(style.jitter, RadialJitter::default());
    }

    #[test]
    fn test_overrides() {
        let config = CliConfig::parse_from([
            "tech-radar",
            "--input-yaml",
            "radar.yaml",
            "--output",
            "radar.png",
            "--size",
            "8",
            "--min-radius",
            "0.1",
            "--max-radius",
            "0.9",
            "--seed",
            "42",
        ]);
        assert_eq!(config.seed, Some(42));
        let style = config.chart_style().unwrap();
        assert_eq!(style.size_px(), 800);
        assert_eq!(style.jitter.min_offset(), 0.1);
        assert_eq!(style.jitter.max_offset(), 0.9);
    }

    #[test]
    fn test_invalid_values() {
        let mut config = CliConfig::default();
        config.size = 0;
        assert!(config.validate().is_err());

        let mut config = CliConfig::default();
        config.min_radius = 0.9;
        config.max_radius = 0.1;
        assert!(config.validate().is_err());
    }
}
