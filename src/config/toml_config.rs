use crate::adapters::github::{GitHubSourceConfig, DEFAULT_API_BASE, DEFAULT_PER_PAGE};
use crate::core::catalog::MetadataCatalog;
use crate::core::feed::PageTargets;
use crate::core::frame_ticker::DEFAULT_FPS;
use crate::core::particle_field::ParticleSettings;
use crate::core::rank::TOP_PROJECTS;
use crate::core::ProjectMetadata;
use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::{
    validate_element_id, validate_non_empty_string, validate_path, validate_positive_number,
    validate_range, validate_url, Validate,
};
use kurbo::Size;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub feed: FeedConfig,
    pub page: PageConfig,
    pub canvas: CanvasConfig,
    pub particles: ParticleSettings,
    /// 若設定則完全取代內建的專案清單
    pub projects: Option<HashMap<String, ProjectMetadata>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub owner: String,
    pub api_base: String,
    pub per_page: usize,
    pub limit: usize,
    pub timeout_seconds: u64,
    pub user_agent: Option<String>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            owner: "neilyneilynig".to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            per_page: DEFAULT_PER_PAGE,
            limit: TOP_PROJECTS,
            timeout_seconds: 10,
            user_agent: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub template: String,
    pub output: String,
    pub container_id: String,
    pub repo_count_id: Option<String>,
    pub stars_count_id: Option<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        let targets = PageTargets::default();
        Self {
            template: "site/index.html".to_string(),
            output: "dist/index.html".to_string(),
            container_id: targets.container_id,
            repo_count_id: targets.repo_count_id,
            stars_count_id: targets.stars_count_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: f64,
    pub height: f64,
    pub fps: u32,
    pub background: Option<[u8; 3]>,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            fps: DEFAULT_FPS,
            background: Some([10, 10, 20]),
        }
    }
}

pub const MAX_CANVAS_EDGE: f64 = 16384.0;

impl CanvasConfig {
    pub fn viewport(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// 畫布尺寸必須落在 1..=MAX_CANVAS_EDGE
    pub fn validate_viewport(field_name: &str, size: Size) -> Result<()> {
        validate_range(&format!("{}.width", field_name), size.width, 1.0, MAX_CANVAS_EDGE)?;
        validate_range(&format!("{}.height", field_name), size.height, 1.0, MAX_CANVAS_EDGE)
    }
}

impl SiteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PortfolioError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PortfolioError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PORTFOLIO_OWNER})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn catalog(&self) -> MetadataCatalog {
        match &self.projects {
            Some(projects) => MetadataCatalog::new(projects.clone()),
            None => MetadataCatalog::builtin(),
        }
    }

    pub fn page_targets(&self) -> PageTargets {
        PageTargets {
            container_id: self.page.container_id.clone(),
            repo_count_id: self.page.repo_count_id.clone(),
            stars_count_id: self.page.stars_count_id.clone(),
        }
    }

    pub fn github_source_config(&self) -> GitHubSourceConfig {
        let defaults = GitHubSourceConfig::default();
        GitHubSourceConfig {
            api_base: self.feed.api_base.clone(),
            per_page: self.feed.per_page,
            timeout: Duration::from_secs(self.feed.timeout_seconds),
            user_agent: self.feed.user_agent.clone().unwrap_or(defaults.user_agent),
        }
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("feed.owner", &self.feed.owner)?;
        validate_url("feed.api_base", &self.feed.api_base)?;
        validate_range("feed.per_page", self.feed.per_page, 1, 100)?;
        validate_positive_number("feed.limit", self.feed.limit, 1)?;
        validate_positive_number("feed.timeout_seconds", self.feed.timeout_seconds as usize, 1)?;

        validate_path("page.template", &self.page.template)?;
        validate_path("page.output", &self.page.output)?;
        validate_element_id("page.container_id", &self.page.container_id)?;
        if let Some(id) = &self.page.repo_count_id {
            validate_element_id("page.repo_count_id", id)?;
        }
        if let Some(id) = &self.page.stars_count_id {
            validate_element_id("page.stars_count_id", id)?;
        }

        CanvasConfig::validate_viewport("canvas", self.canvas.viewport())?;
        validate_range("canvas.fps", self.canvas.fps, 1, 240)?;

        self.particles.validate()?;

        if let Some(projects) = &self.projects {
            for (name, meta) in projects {
                validate_non_empty_string(&format!("projects.{}.icon", name), &meta.icon)?;
            }
        }

        Ok(())
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
