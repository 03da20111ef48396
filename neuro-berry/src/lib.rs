#![warn(missing_docs)] // <= 合适时移除它.

//! 核心库. 提供 NeuroFinder 神经元数据集的准备工具, 以及神经元区域
//! (稀疏坐标列表) 与掩膜 (稠密二值图像) 之间的双向转换.
//!
//! 该 crate 目前仅提供 `safe` 接口.
//!
//! # 注意
//!
//! 1. 所有坐标均为 `(行, 列)` 形式的 [`Idx2d`], 与 `ndarray` 的 `(h, w)` 索引一致.
//! 2. 掩膜尺寸在每个数据集内固定 (参考部署中为 512×512),
//!   越界坐标会使整次光栅化失败, 而不会被静默裁剪.
//!
//! # 开发计划
//!
//! ### 区域 -> 掩膜 ✅
//!
//! 所有区域的所有坐标涂为前景, 其余为背景. 重叠区域合并为同一前景.
//!
//! 实现位于 `neuro-berry/src/convert/raster.rs`.
//!
//! ### 掩膜 -> 区域 ✅
//!
//! 1. 8-邻接连通分量标记, 标签按行优先发现顺序从 1 开始. ✅
//! 2. 剔除内部像素: 3×3 窗口内全部与中心同标签的像素为内部像素. ✅
//! 3. 越界邻居按背景处理, 因此贴边的前景像素一定是边缘像素. ✅
//!
//! 实现位于 `neuro-berry/src/eight` 与 `neuro-berry/src/convert/vector.rs`.
//!
//! ### 数据集输出记录 ✅
//!
//! 数据集名与区域列表一一配对, 长度不一致时报错而不截断.
//!
//! 实现位于 `neuro-berry/src/data/record.rs`.
//!
//! ### 数据集下载与目录整理 ✅
//!
//! 远程下载、解压、`train`/`test` 目录整理、`masks` 目录生成.
//!
//! 实现位于 `neuro-berry/src/dataset`.

/// 二维索引 `(行, 列)`, 同时也可一定程度上用作非负整数向量.
pub type Idx2d = (usize, usize);

type Area2d = Vec<Idx2d>;
type Areas2d = Vec<Area2d>;

/// 区域、记录、掩膜等基础数据结构.
mod data;

pub use data::{
    assemble, read_regions, write_records, BinaryMask, DatasetRecord, ImgWriteRaw, ImgWriteVis,
    LabelMap, LabelView, MaskView, PixelClass, Region,
};

pub mod consts;

pub mod convert;

pub mod dataset;

pub mod eight;

mod error;

pub use error::{PrepError, Result};

pub mod prelude;
