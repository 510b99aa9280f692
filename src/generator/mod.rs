//! 数据生成工作流 - 获取置顶仓库、提取README摘要并组装规范化记录

use anyhow::Result;
use futures::future;

use crate::config::Config;
use crate::github::GitHubClient;
use crate::summary::SummaryExtractor;
use crate::types::project::PinnedProject;

pub mod outlet;

use outlet::{DiskOutlet, Outlet};

/// 获取置顶项目并组装规范化记录。
/// 构建期入口与运行时数据加载共用此函数。
/// 主查询失败向上传播；单个README获取失败就地降级为无摘要。
pub async fn fetch_pinned_projects(config: &Config) -> Result<Vec<PinnedProject>> {
    // 无访问令牌时不发起任何网络请求
    if config.github.token.trim().is_empty() {
        return Ok(Vec::new());
    }

    let client = GitHubClient::new(&config.github)?;
    let nodes = client.pinned_repositories(&config.username).await?;

    if config.verbose {
        println!("🔄 已获取 {} 个置顶仓库，开始提取README摘要...", nodes.len());
    }

    let extractor = SummaryExtractor::with_max_length(config.summary.max_length);

    // 各仓库的README相互独立，并发获取后统一收集；
    // 子任务内部已将失败降级为None，收集阶段不会观察到错误
    let summaries = future::join_all(nodes.iter().map(|node| {
        let client = &client;
        let extractor = &extractor;
        async move {
            let text = client.readme_raw(&node.owner.login, &node.name).await?;
            let summary = extractor.summarize(&text);
            if summary.is_empty() { None } else { Some(summary) }
        }
    }))
    .await;

    // 按GraphQL响应顺序组装，置顶顺序对调用方有意义
    let projects = nodes
        .into_iter()
        .zip(summaries)
        .map(|(node, summary)| PinnedProject::from_node(node, summary))
        .collect();

    Ok(projects)
}

/// 启动数据生成工作流（构建期入口）：获取置顶项目并写入静态JSON产物。
/// 缺失令牌时告警但仍写出合法的空数组，下游始终能读到有效文件
pub async fn launch(config: &Config) -> Result<()> {
    if config.github.token.trim().is_empty() {
        eprintln!("⚠️ 警告: 未配置GitHub访问令牌，将写入空的置顶项目列表");
    } else {
        println!("🔄 正在获取 {} 的置顶仓库...", config.username);
    }

    let projects = fetch_pinned_projects(config).await?;

    let outlet = DiskOutlet::new(config.output_path.clone());
    outlet.save(&projects).await?;

    println!("✅ 置顶项目数据生成完成，共 {} 个项目", projects.len());
    Ok(())
}
