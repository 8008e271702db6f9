pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, ParticleCli};
pub use config::SiteConfig;

pub use adapters::{
    document::HtmlDocument, github::GitHubSource, storage::LocalStorage, svg_canvas::SvgCanvas,
};
pub use crate::core::{
    engine::{EngineReport, PortfolioEngine},
    feed::FeedRenderer,
    particle_field::ParticleField,
};
pub use utils::error::{PortfolioError, Result};
