use crate::core::{RepositoryRecord, RepositorySource};
use crate::utils::error::{PortfolioError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_PER_PAGE: usize = 20;

#[derive(Debug, Clone)]
pub struct GitHubSourceConfig {
    pub api_base: String,
    pub per_page: usize,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for GitHubSourceConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            per_page: DEFAULT_PER_PAGE,
            timeout: Duration::from_secs(10),
            user_agent: concat!("portfolio-feed/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Read-only client for `GET /users/{owner}/repos`.
pub struct GitHubSource {
    client: Client,
    config: GitHubSourceConfig,
}

impl GitHubSource {
    pub fn new(config: GitHubSourceConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self { client, config })
    }

    /// 組出列表端點，owner 以 path segment 形式加入
    pub fn listing_url(&self, owner: &str) -> Result<Url> {
        let mut url = Url::parse(&self.config.api_base)?;
        url.path_segments_mut()
            .map_err(|_| PortfolioError::InvalidConfigValueError {
                field: "feed.api_base".to_string(),
                value: self.config.api_base.clone(),
                reason: "URL cannot be used as a base".to_string(),
            })?
            .pop_if_empty()
            .extend(["users", owner, "repos"]);
        url.query_pairs_mut()
            .append_pair("sort", "updated")
            .append_pair("per_page", &self.config.per_page.to_string());
        Ok(url)
    }

    async fn try_fetch(&self, owner: &str) -> Result<Vec<RepositoryRecord>> {
        let url = self.listing_url(owner)?;
        tracing::debug!("Making API request to: {}", url);

        let response = self.client.get(url).send().await?;
        tracing::debug!("API response status: {}", response.status());

        let records = response
            .error_for_status()?
            .json::<Vec<RepositoryRecord>>()
            .await?;
        Ok(records)
    }
}

#[async_trait]
impl RepositorySource for GitHubSource {
    async fn fetch_repositories(&self, owner: &str) -> Vec<RepositoryRecord> {
        match self.try_fetch(owner).await {
            Ok(records) => {
                tracing::debug!("Fetched {} repositories for {}", records.len(), owner);
                records
            }
            Err(e) => {
                tracing::error!("Failed to fetch repos: {}", e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn source_for(server: &MockServer) -> GitHubSource {
        GitHubSource::new(GitHubSourceConfig {
            api_base: server.base_url(),
            ..GitHubSourceConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_listing_url() {
        let source = GitHubSource::new(GitHubSourceConfig::default()).unwrap();
        let url = source.listing_url("neilyneilynig").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.github.com/users/neilyneilynig/repos?sort=updated&per_page=20"
        );
    }

    #[test]
    fn test_listing_url_keeps_base_path() {
        let source = GitHubSource::new(GitHubSourceConfig {
            api_base: "https://ghe.example.com/api/v3/".to_string(),
            ..GitHubSourceConfig::default()
        })
        .unwrap();
        let url = source.listing_url("octo").unwrap();
        assert_eq!(url.path(), "/api/v3/users/octo/repos");
    }

    #[tokio::test]
    async fn test_fetch_successful_listing() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/users/octo/repos")
                .query_param("sort", "updated")
                .query_param("per_page", "20");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([
                    {
                        "name": "netwatch",
                        "description": "LAN scanner",
                        "html_url": "https://github.com/octo/netwatch",
                        "homepage": null,
                        "stargazers_count": 4,
                        "language": "Python"
                    },
                    {
                        "name": "dotfiles",
                        "description": null,
                        "html_url": "https://github.com/octo/dotfiles",
                        "homepage": "",
                        "stargazers_count": 0,
                        "language": null
                    }
                ]));
        });

        let records = source_for(&server).fetch_repositories("octo").await;

        api_mock.assert();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "netwatch");
        assert_eq!(records[0].stargazers_count, 4);
        assert_eq!(records[1].description, None);
    }

    #[tokio::test]
    async fn test_fetch_server_error_yields_empty() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/users/octo/repos");
            then.status(500);
        });

        let records = source_for(&server).fetch_repositories("octo").await;

        api_mock.assert();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_malformed_record_aborts_batch() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/users/octo/repos");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([
                    {"name": "ok", "html_url": "https://github.com/octo/ok", "stargazers_count": 1},
                    {"name": "broken", "stargazers_count": "many"}
                ]));
        });

        let records = source_for(&server).fetch_repositories("octo").await;

        api_mock.assert();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_unreachable_host_yields_empty() {
        let source = GitHubSource::new(GitHubSourceConfig {
            api_base: "http://127.0.0.1:9".to_string(),
            timeout: Duration::from_secs(2),
            ..GitHubSourceConfig::default()
        })
        .unwrap();

        assert!(source.fetch_repositories("octo").await.is_empty());
    }
}
