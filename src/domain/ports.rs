use crate::domain::model::RepositoryRecord;
use crate::utils::error::Result;
use async_trait::async_trait;
use kurbo::{Point, Size};

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Remote listing of an owner's repositories.
///
/// Implementations fail soft: transport, status and parse failures are logged
/// and reported as an empty listing.
#[async_trait]
pub trait RepositorySource: Send + Sync {
    async fn fetch_repositories(&self, owner: &str) -> Vec<RepositoryRecord>;
}

/// Page elements addressed by id. The `bool` results report whether the element exists.
pub trait Container {
    fn has_element(&self, id: &str) -> Result<bool>;
    fn set_inner_html(&mut self, id: &str, html: &str) -> Result<bool>;
    fn set_text(&mut self, id: &str, text: &str) -> Result<bool>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

/// Drawing surface used by the particle field.
pub trait Canvas {
    fn resize(&mut self, size: Size);
    fn clear(&mut self);
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba);
    fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: Rgba);
}
