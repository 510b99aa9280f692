use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

/// Pinfolio-RS - 由Rust驱动的作品集置顶项目数据生成引擎
#[derive(Parser, Debug)]
#[command(name = "pinfolio-rs")]
#[command(
    about = "Data generation engine for portfolio sites. It fetches pinned repositories from GitHub, derives a plain-text summary from each README, and writes the normalized project list as a static JSON artifact."
)]
#[command(version)]
pub struct Args {
    /// GitHub用户名
    #[arg(short, long)]
    pub username: Option<String>,

    /// 输出文件路径
    #[arg(short, long, default_value = "./public/pinned-projects.json")]
    pub output_path: PathBuf,

    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// GitHub访问令牌（默认读取 PINNED_REPOS_TOKEN / GITHUB_TOKEN 环境变量）
    #[arg(long)]
    pub token: Option<String>,

    /// 请求超时时间（秒）
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// 摘要最大字符数
    #[arg(long)]
    pub max_summary_length: Option<usize>,

    /// 是否启用详细日志
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// 将CLI参数转换为配置
    pub fn into_config(self) -> Config {
        let mut config = if let Some(config_path) = &self.config {
            // 如果显式指定了配置文件路径，从该路径加载
            Config::from_file(config_path)
                .unwrap_or_else(|e| panic!("⚠️ 无法读取配置文件 {:?}: {}", config_path, e))
        } else {
            // 如果没有显式指定配置文件，尝试从默认位置加载
            let default_config_path = std::env::current_dir()
                .unwrap_or_else(|_| std::path::PathBuf::from("."))
                .join("pinfolio.toml");

            if default_config_path.exists() {
                Config::from_file(&default_config_path).unwrap_or_else(|e| {
                    panic!(
                        "⚠️ 无法读取默认配置文件 {:?}: {}",
                        default_config_path, e
                    )
                })
            } else {
                Config::default()
            }
        };

        // CLI参数优先级最高，覆盖配置文件中的设置
        config.output_path = self.output_path;

        if let Some(username) = self.username {
            config.username = username;
        }
        if let Some(token) = self.token {
            config.github.token = token;
        }
        if let Some(timeout_seconds) = self.timeout_seconds {
            config.github.timeout_seconds = timeout_seconds;
        }
        if let Some(max_summary_length) = self.max_summary_length {
            config.summary.max_length = max_summary_length;
        }
        config.verbose = self.verbose;

        config
    }
}
