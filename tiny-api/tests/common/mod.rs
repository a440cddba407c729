//! 测试辅助工具
//!
//! 为端到端测试提供临时工作目录

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use tiny_api::ScanConfig;

static NEXT_DIR: AtomicUsize = AtomicUsize::new(0);

/// 测试结束时自动删除的临时目录
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn new(name: &str) -> Self {
        let root = std::env::temp_dir().join(format!(
            "tiny-api-{}-{}-{}",
            name,
            std::process::id(),
            NEXT_DIR.fetch_add(1, Ordering::SeqCst)
        ));
        std::fs::create_dir_all(&root).unwrap();
        Self { root }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// 写入源文件，返回其路径
    pub fn source(&self, contents: &str) -> PathBuf {
        let path = self.path("input.txt");
        std::fs::write(&path, contents).unwrap();
        path
    }

    /// 以此目录为输入输出位置的扫描配置
    pub fn config(&self, contents: &str) -> ScanConfig {
        ScanConfig {
            input: self.source(contents),
            output: self.path("output.txt"),
            ..ScanConfig::default()
        }
    }

    pub fn read(&self, path: &Path) -> String {
        std::fs::read_to_string(path).unwrap()
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        std::fs::remove_dir_all(&self.root).ok();
    }
}
