pub mod card;
pub mod catalog;
pub mod engine;
pub mod feed;
pub mod frame_ticker;
pub mod particle_field;
pub mod rank;

pub use crate::domain::model::{
    FeedSummary, ProjectCard, ProjectMetadata, RenderOutcome, RepositoryRecord,
};
pub use crate::domain::ports::{Canvas, Container, RepositorySource, Rgba, Storage};
pub use crate::utils::error::Result;
