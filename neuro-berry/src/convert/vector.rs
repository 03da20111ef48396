use crate::{BinaryMask, LabelMap, LabelView, MaskView, Region, Result};
use std::path::{Path, PathBuf};

/// 可以被矢量化为区域列表的栅格.
///
/// 结果中每个区域对应一个连通分量 (或标签), 只保留边缘像素,
/// 坐标按行优先排列. 全背景时返回空列表.
pub trait ToRegions {
    /// 转换为只含边缘像素的区域列表.
    fn to_regions(&self) -> Vec<Region>;
}

/// 标签已给定: 按标签升序, 每个出现过的标签输出一个区域.
impl ToRegions for LabelView<'_> {
    fn to_regions(&self) -> Vec<Region> {
        self.boundary_areas()
            .into_values()
            .map(|coordinates| Region { coordinates })
            .collect()
    }
}

impl ToRegions for LabelMap {
    #[inline]
    fn to_regions(&self) -> Vec<Region> {
        self.as_view().to_regions()
    }
}

/// 先做 8-邻接连通分量标记, 第 `i` 个区域对应标签 `i + 1`.
impl ToRegions for MaskView<'_> {
    fn to_regions(&self) -> Vec<Region> {
        self.label().to_regions()
    }
}

impl ToRegions for BinaryMask {
    #[inline]
    fn to_regions(&self) -> Vec<Region> {
        self.as_view().to_regions()
    }
}

/// 将二值掩膜或标签图矢量化为只含边缘像素的区域列表.
#[inline]
pub fn vectorize<R: ToRegions + ?Sized>(raster: &R) -> Vec<Region> {
    raster.to_regions()
}

/// 读取掩膜图像并矢量化.
pub fn mask_file_to_regions<P: AsRef<Path>>(path: P) -> Result<Vec<Region>> {
    let path = path.as_ref();
    let mask = BinaryMask::open(path)?;
    let regions = vectorize(&mask);
    log::debug!("{}: {} regions", path.display(), regions.len());
    Ok(regions)
}

cfg_if::cfg_if! {
    if #[cfg(feature = "rayon")] {
        use rayon::prelude::*;

        /// 批量读取掩膜图像并矢量化. 每个文件独立返回结果, 顺序与输入一致;
        /// 某个文件失败不影响其它文件.
        pub fn vectorize_batch(paths: &[PathBuf]) -> Vec<Result<Vec<Region>>> {
            paths.par_iter().map(mask_file_to_regions).collect()
        }
    } else {
        /// 批量读取掩膜图像并矢量化. 每个文件独立返回结果, 顺序与输入一致;
        /// 某个文件失败不影响其它文件.
        pub fn vectorize_batch(paths: &[PathBuf]) -> Vec<Result<Vec<Region>>> {
            paths.iter().map(mask_file_to_regions).collect()
        }
    }
}
