use std::time::Duration;

use anyhow::Result;
use reqwest::Client;
use serde_json::json;

use super::GitHubError;
use super::models::{GraphQlResponse, RepositoryNode};
use crate::config::GitHubConfig;

/// GraphQL查询：账号的置顶仓库，最多6个，每个最多6个主题
const PINNED_REPOS_QUERY: &str = r#"
query PinnedRepos($login: String!) {
  user(login: $login) {
    pinnedItems(first: 6, types: REPOSITORY) {
      nodes {
        ... on Repository {
          name
          description
          url
          owner { login }
          primaryLanguage { name }
          repositoryTopics(first: 6) {
            nodes { topic { name } }
          }
        }
      }
    }
  }
}
"#;

const USER_AGENT: &str = "pinfolio-rs";

/// GitHub API客户端
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    token: String,
    graphql_url: String,
    rest_url: String,
}

impl GitHubClient {
    /// 创建新的GitHub客户端
    pub fn new(config: &GitHubConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            token: config.token.clone(),
            graphql_url: config.graphql_url.clone(),
            rest_url: config.rest_url.clone(),
        })
    }

    /// 查询账号的置顶仓库节点列表。
    /// HTTP状态码非成功、GraphQL层错误、传输失败均视为致命错误
    pub async fn pinned_repositories(
        &self,
        login: &str,
    ) -> Result<Vec<RepositoryNode>, GitHubError> {
        let response = self
            .client
            .post(&self.graphql_url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("User-Agent", USER_AGENT)
            .json(&json!({
                "query": PINNED_REPOS_QUERY,
                "variables": { "login": login },
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GitHubError::Status(response.status()));
        }

        let payload: GraphQlResponse = response.json().await?;
        payload.into_nodes()
    }

    /// 获取仓库README的原始文本。
    /// 任何失败（状态码、传输、正文读取）以及空正文都降级为None，不向上传播，不重试
    pub async fn readme_raw(&self, owner: &str, repo: &str) -> Option<String> {
        let url = format!("{}/repos/{}/{}/readme", self.rest_url, owner, repo);
        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/vnd.github.raw")
            .send()
            .await
            .ok()?;

        if !response.status().is_success() {
            return None;
        }

        let text = response.text().await.ok()?;
        if text.is_empty() { None } else { Some(text) }
    }
}
