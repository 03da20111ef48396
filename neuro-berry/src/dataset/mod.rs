//! 数据集操作: 下载、解压、`train`/`test`/`masks` 目录整理.
//!
//! 远程存储与解压工具都是外部协作者, 分别由 [`ObjectStore`] 和
//! [`ArchiveExtractor`] 抽象, 核心库只负责调度和目录布局.

use std::path::{Path, PathBuf};

mod config;
mod extract;
mod fetch;
mod layout;

pub use config::PrepConfig;
pub use extract::{ArchiveExtractor, ZipExtractor};
pub use fetch::{GsutilStore, LocalMirror, ObjectStore};
pub use layout::{PrepSummary, Preparer};

/// 获取 `{用户主目录}/dataset` 目录.
pub fn home_dataset_dir() -> Option<PathBuf> {
    let mut ans = dirs::home_dir()?;
    ans.push("dataset");
    Some(ans)
}

/// 获取 `{用户主目录}/dataset` 目录下给定继续项组成的全路径.
pub fn home_dataset_dir_with<P: AsRef<Path>, I: IntoIterator<Item = P>>(it: I) -> Option<PathBuf> {
    let mut ans = home_dataset_dir()?;
    ans.extend(it);
    Some(ans)
}
