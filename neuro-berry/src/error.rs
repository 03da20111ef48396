//! 运行时错误.

use crate::Idx2d;
use std::path::PathBuf;
use thiserror::Error;

/// 数据集准备与区域/掩膜转换过程中的错误.
///
/// 所有错误都同步返回给调用者, 核心库内部不做任何重试.
#[derive(Debug, Error)]
pub enum PrepError {
    /// 远程获取数据集失败.
    #[error("dataset `{0}` not found in remote storage")]
    DatasetNotFound(String),

    /// 区域文件缺少 `coordinates` 字段, 或坐标不是非负整数对.
    #[error("malformed region file {}: {reason}", path.display())]
    MalformedRegionFile {
        /// 出错的文件.
        path: PathBuf,
        /// 具体原因.
        reason: String,
    },

    /// 光栅化时某个区域坐标超出掩膜尺寸. 整次调用都会失败.
    #[error("region #{region} has coordinate {coord:?} outside mask of shape {dims:?}")]
    CoordinateOutOfBounds {
        /// 区域在输入列表中的下标.
        region: usize,
        /// 越界坐标.
        coord: Idx2d,
        /// 掩膜尺寸 (高, 宽).
        dims: Idx2d,
    },

    /// 数据集名列表与区域列表长度不一致.
    #[error("{names} dataset names but {regions} region lists")]
    LengthMismatch {
        /// 数据集名个数.
        names: usize,
        /// 区域列表个数.
        regions: usize,
    },

    /// 解压归档失败.
    #[error("failed to extract {}: {reason}", archive.display())]
    Extract {
        /// 归档文件.
        archive: PathBuf,
        /// 具体原因.
        reason: String,
    },

    /// 底层 I/O 错误.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// 图像编解码错误.
    #[error(transparent)]
    Image(#[from] image::ImageError),

    /// JSON 序列化错误.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// 本 crate 通用的 `Result`.
pub type Result<T> = std::result::Result<T, PrepError>;
