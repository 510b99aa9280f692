use serde::{Deserialize, Serialize};

use crate::github::models::RepositoryNode;

/// 没有任何可用描述来源时的占位文案
pub const NO_DESCRIPTION: &str = "No description.";

/// 没有主语言和主题时的占位技术标签
pub const FALLBACK_TECH: &str = "Code";

/// 置顶项目的规范化记录。构造后不可变，每次获取都重新构造
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinnedProject {
    /// 项目标题（仓库名）
    pub title: String,
    /// 项目描述：README摘要 → 仓库描述 → 占位文案，保证非空
    pub description: String,
    /// 技术标签：主语言优先，其后为主题，精确匹配去重并保序，保证非空
    pub tech: Vec<String>,
    /// 仓库地址
    pub github: String,
}

impl PinnedProject {
    /// 由仓库节点与README摘要组装规范化记录
    pub fn from_node(node: RepositoryNode, readme_summary: Option<String>) -> Self {
        let description = first_non_empty([readme_summary, node.description.clone()])
            .unwrap_or_else(|| NO_DESCRIPTION.to_string());

        let mut tech: Vec<String> = Vec::new();
        if let Some(language) = &node.primary_language
            && !language.name.trim().is_empty()
        {
            tech.push(language.name.clone());
        }
        for topic in node.topic_names() {
            if !topic.trim().is_empty() && !tech.contains(&topic) {
                tech.push(topic);
            }
        }
        if tech.is_empty() {
            tech.push(FALLBACK_TECH.to_string());
        }

        Self {
            title: node.name,
            description,
            tech,
            github: node.url,
        }
    }
}

/// 从左到右取第一个非空候选值
fn first_non_empty<I>(candidates: I) -> Option<String>
where
    I: IntoIterator<Item = Option<String>>,
{
    candidates
        .into_iter()
        .flatten()
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

// Include tests
#[cfg(test)]
mod tests;
