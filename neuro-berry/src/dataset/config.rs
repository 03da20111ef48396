use crate::consts::{
    DATASET_PREFIX, DEFAULT_BUCKET_URL, DEFAULT_DATA_DIR, DOWNLOAD_MARKER, MASK_DIMS, TEST_OPTS,
    TRAIN_OPTS,
};
use crate::{Idx2d, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 数据集准备的全部配置.
///
/// 可以从 JSON 文件读取; 缺省字段取 NeuroFinder 参考部署的值.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrepConfig {
    /// 远程存储位置, 如 `gs://uga-dsp/project3`.
    pub bucket_url: String,

    /// 本地数据集目录.
    pub data_dir: PathBuf,

    /// 训练集文件编号, 如 `00.00`.
    pub train_opts: Vec<String>,

    /// 测试集文件编号.
    pub test_opts: Vec<String>,

    /// 掩膜尺寸 (高, 宽).
    pub mask_dims: Idx2d,
}

impl Default for PrepConfig {
    fn default() -> Self {
        Self {
            bucket_url: DEFAULT_BUCKET_URL.to_string(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            train_opts: TRAIN_OPTS.iter().map(|s| s.to_string()).collect(),
            test_opts: TEST_OPTS.iter().map(|s| s.to_string()).collect(),
            mask_dims: MASK_DIMS,
        }
    }
}

impl PrepConfig {
    /// 以默认配置为基础, 替换数据集目录.
    pub fn with_data_dir<P: Into<PathBuf>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// 从 JSON 文件读取配置.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// 训练集数据集名, 形如 `neurofinder.00.00`.
    pub fn train_files(&self) -> Vec<String> {
        self.train_opts
            .iter()
            .map(|opt| format!("{DATASET_PREFIX}.{opt}"))
            .collect()
    }

    /// 测试集数据集名, 形如 `neurofinder.00.00.test`.
    pub fn test_files(&self) -> Vec<String> {
        self.test_opts
            .iter()
            .map(|opt| format!("{DATASET_PREFIX}.{opt}.test"))
            .collect()
    }

    /// 所有需要下载的归档名 (先训练集后测试集), 形如 `neurofinder.00.00.zip`.
    pub fn archive_names(&self) -> Vec<String> {
        self.train_files()
            .into_iter()
            .chain(self.test_files())
            .map(|name| format!("{name}.zip"))
            .collect()
    }

    /// `{data_dir}/train`.
    #[inline]
    pub fn train_dir(&self) -> PathBuf {
        self.data_dir.join("train")
    }

    /// `{data_dir}/test`.
    #[inline]
    pub fn test_dir(&self) -> PathBuf {
        self.data_dir.join("test")
    }

    /// `{data_dir}/masks`.
    #[inline]
    pub fn masks_dir(&self) -> PathBuf {
        self.data_dir.join("masks")
    }

    /// 下载完成标记 `{data_dir}/.downloaded`.
    #[inline]
    pub fn download_marker(&self) -> PathBuf {
        self.data_dir.join(DOWNLOAD_MARKER)
    }

    /// 训练集数据集 `name` 的区域文件 `{data_dir}/train/{name}/regions/regions.json`.
    pub fn regions_path(&self, name: &str) -> PathBuf {
        let mut ans = self.train_dir();
        ans.extend([name, "regions", "regions.json"]);
        ans
    }

    /// 训练集数据集 `name` 的掩膜文件 `{data_dir}/masks/{name}.png`.
    pub fn mask_path(&self, name: &str) -> PathBuf {
        self.masks_dir().join(format!("{name}.png"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables() {
        let config = PrepConfig::default();
        let train = config.train_files();
        let test = config.test_files();
        assert_eq!(train.len(), 19);
        assert_eq!(test.len(), 9);
        assert_eq!(train[0], "neurofinder.00.00");
        assert_eq!(train[18], "neurofinder.04.01");
        assert_eq!(test[0], "neurofinder.00.00.test");

        let archives = config.archive_names();
        assert_eq!(archives.len(), 28);
        assert_eq!(archives[0], "neurofinder.00.00.zip");
        assert_eq!(archives[27], "neurofinder.04.01.test.zip");
    }

    #[test]
    fn test_paths() {
        let config = PrepConfig::with_data_dir("/data/nf");
        assert_eq!(
            config.regions_path("neurofinder.01.00"),
            PathBuf::from("/data/nf/train/neurofinder.01.00/regions/regions.json")
        );
        assert_eq!(
            config.mask_path("neurofinder.01.00"),
            PathBuf::from("/data/nf/masks/neurofinder.01.00.png")
        );
        assert_eq!(config.test_dir(), PathBuf::from("/data/nf/test"));
        assert_eq!(config.download_marker(), PathBuf::from("/data/nf/.downloaded"));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: PrepConfig =
            serde_json::from_str(r#"{"train_opts": ["02.00"], "mask_dims": [64, 32]}"#).unwrap();
        assert_eq!(config.train_files(), vec!["neurofinder.02.00"]);
        assert_eq!(config.test_files().len(), 9);
        assert_eq!(config.mask_dims, (64, 32));
        assert_eq!(config.bucket_url, DEFAULT_BUCKET_URL);
    }
}
