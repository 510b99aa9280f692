use serde::Deserialize;

use super::GitHubError;

/// GraphQL响应体
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse {
    pub data: Option<GraphQlData>,
    pub errors: Option<Vec<GraphQlError>>,
}

/// GraphQL错误条目
#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlData {
    pub user: Option<UserNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserNode {
    pub pinned_items: PinnedItems,
}

/// 置顶条目连接
#[derive(Debug, Default, Deserialize)]
pub struct PinnedItems {
    #[serde(default)]
    pub nodes: Vec<RepositoryNode>,
}

/// 置顶仓库节点
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryNode {
    pub name: String,
    pub description: Option<String>,
    pub url: String,
    pub owner: OwnerNode,
    pub primary_language: Option<LanguageNode>,
    #[serde(default)]
    pub repository_topics: TopicConnection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OwnerNode {
    pub login: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LanguageNode {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TopicConnection {
    #[serde(default)]
    pub nodes: Vec<TopicNode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopicNode {
    pub topic: Topic,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Topic {
    pub name: String,
}

impl RepositoryNode {
    /// 主题名称列表（保持返回顺序）
    pub fn topic_names(&self) -> Vec<String> {
        self.repository_topics
            .nodes
            .iter()
            .map(|node| node.topic.name.clone())
            .collect()
    }
}

impl GraphQlResponse {
    /// 在边界处校验响应：GraphQL错误列表转换为错误，
    /// 缺失的 data/user 按空列表处理（未知用户名不视为错误）
    pub fn into_nodes(self) -> Result<Vec<RepositoryNode>, GitHubError> {
        if let Some(errors) = &self.errors
            && !errors.is_empty()
        {
            let message = errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(GitHubError::GraphQl(message));
        }

        Ok(self
            .data
            .and_then(|data| data.user)
            .map(|user| user.pinned_items.nodes)
            .unwrap_or_default())
    }
}
