//! 区域与掩膜之间的双向转换.
//!
//! - [`rasterize`]: 区域列表 -> 二值掩膜.
//! - [`vectorize`]: 二值掩膜或标签图 -> 只含边缘像素的区域列表.
//!
//! 两个方向都是无状态的纯函数; 先光栅化再矢量化是有损的,
//! 只能恢复每个区域的边缘, 重叠区域也无法再被区分.

mod raster;
mod vector;

pub use raster::{rasterize, region_file_to_mask};
pub use vector::{mask_file_to_regions, vectorize, vectorize_batch, ToRegions};
