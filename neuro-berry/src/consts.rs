//! 通用常量.

use crate::Idx2d;

/// 单通道颜色与像素值.
pub mod gray {
    /// 二值掩膜中, 背景的像素值.
    pub const MASK_BACKGROUND: u8 = 0;

    /// 二值掩膜中, 前景 (神经元) 的像素值.
    pub const MASK_FOREGROUND: u8 = 1;

    /// 单通道黑色.
    pub const BLACK: u8 = 0b_0000_0000;

    /// 单通道白色.
    pub const WHITE: u8 = 0b_1111_1111;

    /// 像素是否是前景? 任何非零值都视为前景.
    #[inline]
    pub const fn is_foreground(p: u8) -> bool {
        p != MASK_BACKGROUND
    }

    /// 像素是否是背景?
    #[inline]
    pub const fn is_background(p: u8) -> bool {
        matches!(p, MASK_BACKGROUND)
    }
}

/// 标签图中背景的标签.
pub const BACKGROUND_LABEL: u32 = 0;

/// 参考部署中的掩膜尺寸 (高, 宽).
pub const MASK_DIMS: Idx2d = (512, 512);

/// NeuroFinder 数据集所在的 Google Storage 桶.
pub const DEFAULT_BUCKET_URL: &str = "gs://uga-dsp/project3";

/// 本地数据集目录名.
pub const DEFAULT_DATA_DIR: &str = "neuron_dataset";

/// 全部归档下载完成后写入数据集目录的标记文件.
pub const DOWNLOAD_MARKER: &str = ".downloaded";

/// 数据集文件名前缀.
pub const DATASET_PREFIX: &str = "neurofinder";

/// 训练集文件编号.
pub const TRAIN_OPTS: [&str; 19] = [
    "00.00", "00.01", "00.02", "00.03", "00.04", "00.05", "00.06", "00.07", "00.08", "00.09",
    "00.10", "00.11", "01.00", "01.01", "02.00", "02.01", "03.00", "04.00", "04.01",
];

/// 测试集文件编号.
pub const TEST_OPTS: [&str; 9] = [
    "00.00", "00.01", "01.00", "01.01", "02.00", "02.01", "03.00", "04.00", "04.01",
];
