use crate::core::card::build_card;
use crate::core::catalog::MetadataCatalog;
use crate::core::rank::{rank_and_select, TOP_PROJECTS};
use crate::core::{
    Container, FeedSummary, ProjectCard, RenderOutcome, RepositoryRecord, RepositorySource,
};
use crate::utils::error::Result;

pub const LOADING_PLACEHOLDER: &str =
    r#"<p style="text-align: center; color: var(--text-muted);">Loading projects...</p>"#;
pub const FAILURE_PLACEHOLDER: &str =
    r#"<p style="text-align: center; color: var(--text-muted);">Failed to load projects</p>"#;

/// Element ids the renderer writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTargets {
    pub container_id: String,
    pub repo_count_id: Option<String>,
    pub stars_count_id: Option<String>,
}

impl Default for PageTargets {
    fn default() -> Self {
        Self {
            container_id: "projects-grid".to_string(),
            repo_count_id: Some("repo-count".to_string()),
            stars_count_id: Some("stars-count".to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FeedBatch {
    pub cards: Vec<ProjectCard>,
    pub summary: FeedSummary,
}

pub struct FeedRenderer<R: RepositorySource> {
    source: R,
    catalog: MetadataCatalog,
    targets: PageTargets,
    limit: usize,
}

impl<R: RepositorySource> FeedRenderer<R> {
    pub fn new(source: R, catalog: MetadataCatalog) -> Self {
        Self {
            source,
            catalog,
            targets: PageTargets::default(),
            limit: TOP_PROJECTS,
        }
    }

    pub fn with_targets(mut self, targets: PageTargets) -> Self {
        self.targets = targets;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn catalog(&self) -> &MetadataCatalog {
        &self.catalog
    }

    /// 排序、截斷並產生卡片；統計值取自完整的抓取結果
    pub fn transform(&self, records: &[RepositoryRecord]) -> FeedBatch {
        let ranked = rank_and_select(records, &self.catalog, self.limit);
        let cards: Vec<ProjectCard> = ranked
            .iter()
            .map(|record| build_card(record, &self.catalog))
            .collect();

        let summary = FeedSummary {
            total_repositories: records.len(),
            total_stars: records.iter().map(|r| r.stargazers_count).sum(),
            displayed: cards.iter().map(|card| card.name.clone()).collect(),
        };

        FeedBatch { cards, summary }
    }

    pub fn load<C: Container>(&self, batch: &FeedBatch, container: &mut C) -> Result<()> {
        let markup: String = batch.cards.iter().map(ProjectCard::to_html).collect();
        container.set_inner_html(&self.targets.container_id, &markup)?;

        if let Some(id) = &self.targets.repo_count_id {
            let total = batch.summary.total_repositories.to_string();
            if !container.set_text(id, &total)? {
                tracing::debug!("Summary element #{} not found, skipping", id);
            }
        }

        if let Some(id) = &self.targets.stars_count_id {
            if !container.set_text(id, &batch.summary.stars_display())? {
                tracing::debug!("Summary element #{} not found, skipping", id);
            }
        }

        Ok(())
    }

    pub async fn render<C: Container>(&self, owner: &str, container: &mut C) -> Result<RenderOutcome> {
        let container_id = &self.targets.container_id;
        if !container.has_element(container_id)? {
            tracing::warn!("Container #{} not found in page, skipping render", container_id);
            return Ok(RenderOutcome::MissingContainer);
        }

        container.set_inner_html(container_id, LOADING_PLACEHOLDER)?;

        tracing::info!("Fetching repositories for {}", owner);
        let records = self.source.fetch_repositories(owner).await;

        if records.is_empty() {
            tracing::warn!("No repositories available, showing failure placeholder");
            container.set_inner_html(container_id, FAILURE_PLACEHOLDER)?;
            return Ok(RenderOutcome::Unavailable);
        }

        let batch = self.transform(&records);
        tracing::debug!("Ranked projects: {:?}", batch.summary.displayed);

        self.load(&batch, container)?;
        tracing::info!(
            "Rendered {} of {} repositories ({} stars)",
            batch.cards.len(),
            batch.summary.total_repositories,
            batch.summary.total_stars
        );

        Ok(RenderOutcome::Rendered(batch.summary))
    }
}
