//! 对 `neuro-berry::dataset` 的更一层封装. 从环境变量获取数据集配置.

use neuro_berry::dataset::{self, PrepConfig};
use neuro_berry::Result;
use std::env;
use std::path::PathBuf;

/// 获取数据集基本路径.
///
/// 1. 若环境变量 `$NEURO_DATA_DIR` 非空, 则返回其值;
/// 2. 否则, 返回 `$HOME/dataset/neuron_dataset`;
/// 3. 无法确定主目录时, 返回当前目录下的 `neuron_dataset`.
pub fn data_dir_from_env_or_home() -> PathBuf {
    match env::var("NEURO_DATA_DIR") {
        Ok(d) if !d.is_empty() => PathBuf::from(d),
        _ => dataset::home_dataset_dir_with([neuro_berry::consts::DEFAULT_DATA_DIR])
            .unwrap_or_else(|| PathBuf::from(neuro_berry::consts::DEFAULT_DATA_DIR)),
    }
}

/// 获取数据集准备配置.
///
/// 1. 若环境变量 `$NEURO_CONFIG` 非空, 则从该 JSON 文件读取, 文件中缺省的字段取默认值;
/// 2. 否则, 使用默认配置, 数据集目录取 [`data_dir_from_env_or_home`].
pub fn config_from_env_or_default() -> Result<PrepConfig> {
    match env::var("NEURO_CONFIG") {
        Ok(path) if !path.is_empty() => PrepConfig::from_json_file(path),
        _ => Ok(PrepConfig::with_data_dir(data_dir_from_env_or_home())),
    }
}
