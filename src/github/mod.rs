//! GitHub数据访问层 - 置顶仓库查询与README获取

pub mod client;
pub mod models;

use reqwest::StatusCode;
use thiserror::Error;

pub use client::GitHubClient;

/// GitHub主查询的错误类型。
/// 主查询失败对整个获取操作是致命的；单个README获取失败会就地降级，不会产生此错误。
#[derive(Debug, Error)]
pub enum GitHubError {
    /// HTTP响应状态码非成功
    #[error("GitHub API error: {0}")]
    Status(StatusCode),

    /// GraphQL层返回错误列表（多条消息以分号连接）
    #[error("GitHub GraphQL error: {0}")]
    GraphQl(String),

    /// 传输层错误
    #[error("GitHub request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
