use crate::adapters::document::HtmlDocument;
use crate::core::feed::FeedRenderer;
use crate::core::{RenderOutcome, RepositorySource, Storage};
use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineReport {
    /// None on a dry run.
    pub output_path: Option<String>,
    pub outcome: RenderOutcome,
}

/// Reads the page template, renders the feed into it and writes the finished page.
pub struct PortfolioEngine<S: Storage, R: RepositorySource> {
    storage: S,
    renderer: FeedRenderer<R>,
    owner: String,
    template_path: String,
    output_path: String,
    dry_run: bool,
}

impl<S: Storage, R: RepositorySource> PortfolioEngine<S, R> {
    pub fn new(
        storage: S,
        renderer: FeedRenderer<R>,
        owner: impl Into<String>,
        template_path: impl Into<String>,
        output_path: impl Into<String>,
    ) -> Self {
        Self {
            storage,
            renderer,
            owner: owner.into(),
            template_path: template_path.into(),
            output_path: output_path.into(),
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub async fn run(&self) -> Result<EngineReport> {
        tracing::info!("Loading page template: {}", self.template_path);
        let template = self.storage.read_file(&self.template_path).await?;
        let mut page = HtmlDocument::from_bytes(template)?;

        let outcome = self.renderer.render(&self.owner, &mut page).await?;

        if self.dry_run {
            tracing::info!("Dry run, page not written");
            return Ok(EngineReport {
                output_path: None,
                outcome,
            });
        }

        // 失敗提示也一併寫出，與瀏覽器中看到的一致
        self.storage
            .write_file(&self.output_path, page.as_str().as_bytes())
            .await?;
        tracing::debug!("Page written to {}", self.output_path);

        Ok(EngineReport {
            output_path: Some(self.output_path.clone()),
            outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::MetadataCatalog;
    use crate::core::feed::FAILURE_PLACEHOLDER;
    use crate::core::RepositoryRecord;
    use crate::utils::error::PortfolioError;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        async fn put(&self, path: &str, data: &str) {
            self.files
                .lock()
                .await
                .insert(path.to_string(), data.as_bytes().to_vec());
        }

        async fn get_file(&self, path: &str) -> Option<String> {
            let files = self.files.lock().await;
            files
                .get(path)
                .map(|data| String::from_utf8_lossy(data).into_owned())
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                PortfolioError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct FixedSource(Vec<RepositoryRecord>);

    #[async_trait]
    impl RepositorySource for FixedSource {
        async fn fetch_repositories(&self, _owner: &str) -> Vec<RepositoryRecord> {
            self.0.clone()
        }
    }

    const TEMPLATE: &str = r#"<main><div id="projects-grid"></div><b id="repo-count">-</b><b id="stars-count">-</b></main>"#;

    fn repo(name: &str, stars: u64) -> RepositoryRecord {
        RepositoryRecord {
            name: name.to_string(),
            description: None,
            html_url: format!("https://github.com/octo/{}", name),
            homepage: None,
            stargazers_count: stars,
            language: None,
        }
    }

    fn engine(storage: MockStorage, records: Vec<RepositoryRecord>) -> PortfolioEngine<MockStorage, FixedSource> {
        let renderer = FeedRenderer::new(FixedSource(records), MetadataCatalog::builtin());
        PortfolioEngine::new(storage, renderer, "octo", "site/index.html", "dist/index.html")
    }

    #[tokio::test]
    async fn test_run_writes_rendered_page() {
        let storage = MockStorage::default();
        storage.put("site/index.html", TEMPLATE).await;

        let report = engine(storage.clone(), vec![repo("netwatch", 2), repo("misc", 5)])
            .run()
            .await
            .unwrap();

        assert_eq!(report.output_path.as_deref(), Some("dist/index.html"));
        let page = storage.get_file("dist/index.html").await.unwrap();
        assert!(page.contains(r#"<b id="repo-count">2</b>"#));
        assert!(page.contains(r#"<b id="stars-count">7</b>"#));
        assert_eq!(page.matches(r#"class="project-card""#).count(), 2);
        // netwatch 為精選，排在星數較多的 misc 之前
        assert!(page.find(">netwatch<").unwrap() < page.find(">misc<").unwrap());
    }

    #[tokio::test]
    async fn test_run_with_empty_feed_writes_failure_placeholder() {
        let storage = MockStorage::default();
        storage.put("site/index.html", TEMPLATE).await;

        let report = engine(storage.clone(), vec![]).run().await.unwrap();

        assert_eq!(report.outcome, RenderOutcome::Unavailable);
        let page = storage.get_file("dist/index.html").await.unwrap();
        assert!(page.contains(FAILURE_PLACEHOLDER));
        assert!(page.contains(r#"<b id="repo-count">-</b>"#));
    }

    #[tokio::test]
    async fn test_dry_run_does_not_write() {
        let storage = MockStorage::default();
        storage.put("site/index.html", TEMPLATE).await;

        let report = engine(storage.clone(), vec![repo("a", 1)])
            .with_dry_run(true)
            .run()
            .await
            .unwrap();

        assert_eq!(report.output_path, None);
        assert!(matches!(report.outcome, RenderOutcome::Rendered(_)));
        assert!(storage.get_file("dist/index.html").await.is_none());
    }

    #[tokio::test]
    async fn test_missing_template_fails() {
        let result = engine(MockStorage::default(), vec![]).run().await;
        assert!(matches!(result, Err(PortfolioError::IoError(_))));
    }
}
