use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

/// 应用程序配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct Config {
    /// GitHub用户名（置顶仓库所属账号）
    pub username: String,

    /// 输出文件路径（静态JSON产物）
    pub output_path: PathBuf,

    /// GitHub API配置
    pub github: GitHubConfig,

    /// README摘要提取配置
    pub summary: SummaryConfig,

    /// 是否启用详细日志
    pub verbose: bool,
}

/// GitHub API配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct GitHubConfig {
    /// 访问令牌。为空时不发起任何网络请求，置顶项目列表为空
    pub token: String,

    /// GraphQL API地址
    pub graphql_url: String,

    /// REST API基地址
    pub rest_url: String,

    /// 请求超时时间（秒）
    pub timeout_seconds: u64,
}

/// README摘要提取配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct SummaryConfig {
    /// 摘要最大字符数
    pub max_length: usize,
}

impl Config {
    /// 从文件加载配置
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let mut file =
            File::open(path).context(format!("Failed to open config file: {:?}", path))?;
        let mut content = String::new();
        file.read_to_string(&mut content)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            username: std::env::var("GITHUB_USERNAME")
                .unwrap_or_else(|_| String::from("swagat110")),
            output_path: PathBuf::from("./public/pinned-projects.json"),
            github: GitHubConfig::default(),
            summary: SummaryConfig::default(),
            verbose: false,
        }
    }
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            token: std::env::var("PINNED_REPOS_TOKEN")
                .or_else(|_| std::env::var("GITHUB_TOKEN"))
                .unwrap_or_default(),
            graphql_url: String::from("https://api.github.com/graphql"),
            rest_url: String::from("https://api.github.com"),
            timeout_seconds: 30,
        }
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self { max_length: 320 }
    }
}
