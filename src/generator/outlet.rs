use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::types::project::PinnedProject;

/// 产物输出接口
pub trait Outlet {
    async fn save(&self, projects: &[PinnedProject]) -> Result<()>;
}

/// 磁盘输出：将项目列表序列化为JSON并写入固定路径
pub struct DiskOutlet {
    output_path: PathBuf,
}

impl DiskOutlet {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }
}

impl Outlet for DiskOutlet {
    async fn save(&self, projects: &[PinnedProject]) -> Result<()> {
        // 确保父目录存在
        if let Some(parent_dir) = self.output_path.parent()
            && !parent_dir.as_os_str().is_empty()
            && !parent_dir.exists()
        {
            fs::create_dir_all(parent_dir)
                .context(format!("Failed to create output directory: {:?}", parent_dir))?;
        }

        let json =
            serde_json::to_string_pretty(projects).context("Failed to serialize projects")?;
        fs::write(&self.output_path, json)
            .context(format!("Failed to write output file: {:?}", self.output_path))?;

        println!("💾 已保存置顶项目数据: {}", self.output_path.display());
        Ok(())
    }
}
