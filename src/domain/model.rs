use serde::{Deserialize, Serialize};

/// One entry of the remote repository listing. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub homepage: Option<String>,
    pub stargazers_count: u64,
    #[serde(default)]
    pub language: Option<String>,
}

impl RepositoryRecord {
    /// The listing API returns `""` for repositories whose homepage was cleared.
    pub fn live_demo_url(&self) -> Option<&str> {
        self.homepage.as_deref().filter(|url| !url.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    pub icon: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub name: String,
    pub icon: String,
    pub tags: Vec<String>,
    pub featured: bool,
    pub description: String,
    pub html_url: String,
    pub homepage: Option<String>,
}

/// Aggregates over the whole fetch result, not only the displayed cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSummary {
    pub total_repositories: usize,
    pub total_stars: u64,
    pub displayed: Vec<String>,
}

impl FeedSummary {
    pub fn stars_display(&self) -> String {
        if self.total_stars > 0 {
            self.total_stars.to_string()
        } else {
            "★".to_string()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    Rendered(FeedSummary),
    /// The fetch produced nothing; the failure placeholder is showing.
    Unavailable,
    /// The page has no container element, nothing was fetched.
    MissingContainer,
}
