use crate::config::toml_config::{CanvasConfig, SiteConfig};
use crate::utils::error::{PortfolioError, Result};
use clap::Parser;
use kurbo::Size;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "portfolio.toml";

#[derive(Debug, Clone, Parser)]
#[command(name = "portfolio-feed")]
#[command(about = "Render the repository feed of a portfolio page")]
pub struct CliConfig {
    /// Path to the TOML site configuration (optional when portfolio.toml is absent)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Directory that template and output paths are resolved against
    #[arg(long, default_value = ".")]
    pub base_dir: String,

    /// Override [feed] owner
    #[arg(long)]
    pub owner: Option<String>,

    /// Override [feed] api_base
    #[arg(long)]
    pub api_base: Option<String>,

    /// Override [page] template
    #[arg(long)]
    pub template: Option<String>,

    /// Override [page] output
    #[arg(long)]
    pub output: Option<String>,

    /// Render and report without writing the page
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    /// 載入設定檔後套用命令列覆蓋
    pub fn resolve(&self) -> Result<SiteConfig> {
        let mut site = load_site_config(self.config.as_deref())?;

        if let Some(owner) = &self.owner {
            site.feed.owner = owner.clone();
        }
        if let Some(api_base) = &self.api_base {
            site.feed.api_base = api_base.clone();
        }
        if let Some(template) = &self.template {
            site.page.template = template.clone();
        }
        if let Some(output) = &self.output {
            site.page.output = output.clone();
        }

        Ok(site)
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "particle-field")]
#[command(about = "Run the background particle field and write SVG snapshots")]
pub struct ParticleCli {
    /// Path to the TOML site configuration
    #[arg(short, long)]
    pub config: Option<String>,

    /// Number of frames to simulate
    #[arg(long, default_value = "120")]
    pub frames: u64,

    /// Write a snapshot every N frames (the last frame is always written)
    #[arg(long, default_value = "30")]
    pub snapshot_every: u64,

    /// Directory for SVG snapshots
    #[arg(long, default_value = "dist/frames")]
    pub output_dir: String,

    /// Override [canvas] viewport as WIDTHxHEIGHT
    #[arg(long, value_parser = parse_viewport)]
    pub viewport: Option<Size>,

    /// Resize the viewport to WIDTHxHEIGHT at --resize-at
    #[arg(long, value_parser = parse_viewport, requires = "resize_at")]
    pub resize: Option<Size>,

    /// Frame index at which --resize applies
    #[arg(long)]
    pub resize_at: Option<u64>,

    /// Override [canvas] fps
    #[arg(long)]
    pub fps: Option<u32>,

    /// Seed for reproducible particle placement
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ParticleCli {
    pub fn resolve(&self) -> Result<SiteConfig> {
        let mut site = load_site_config(self.config.as_deref())?;

        if let Some(viewport) = self.viewport {
            site.canvas.width = viewport.width;
            site.canvas.height = viewport.height;
        }
        if let Some(fps) = self.fps {
            site.canvas.fps = fps;
        }
        if let Some(size) = self.resize {
            CanvasConfig::validate_viewport("resize", size)?;
        }

        Ok(site)
    }
}

fn load_site_config(path: Option<&str>) -> Result<SiteConfig> {
    match path {
        Some(path) => SiteConfig::from_file(path),
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => SiteConfig::from_file(DEFAULT_CONFIG_FILE),
        None => {
            tracing::debug!("No {} found, using built-in defaults", DEFAULT_CONFIG_FILE);
            Ok(SiteConfig::default())
        }
    }
}

pub fn parse_viewport(value: &str) -> Result<Size> {
    let invalid = |reason: &str| PortfolioError::InvalidConfigValueError {
        field: "viewport".to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let (w, h) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| invalid("expected WIDTHxHEIGHT"))?;
    let width: f64 = w.trim().parse().map_err(|_| invalid("width is not a number"))?;
    let height: f64 = h.trim().parse().map_err(|_| invalid("height is not a number"))?;

    if width <= 0.0 || height <= 0.0 {
        return Err(invalid("dimensions must be positive"));
    }
    Ok(Size::new(width, height))
}
