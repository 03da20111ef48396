use crate::{Idx2d, PrepError, Result};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 一个神经元区域: 若干 `(行, 列)` 像素坐标.
///
/// JSON 格式为 `{"coordinates": [[r, c], ...]}`, 其它字段 (如 `id`) 在读取时被忽略.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// 区域内的像素坐标.
    pub coordinates: Vec<Idx2d>,
}

impl Region {
    /// 以行优先顺序排序并去重后构造区域, 保证坐标两两不同.
    pub fn from_pixels<I: IntoIterator<Item = Idx2d>>(it: I) -> Self {
        Self {
            coordinates: it.into_iter().sorted_unstable().dedup().collect(),
        }
    }

    /// 坐标个数.
    #[inline]
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// 是否不含任何坐标.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }
}

impl FromIterator<Idx2d> for Region {
    #[inline]
    fn from_iter<T: IntoIterator<Item = Idx2d>>(iter: T) -> Self {
        Self::from_pixels(iter)
    }
}

/// 从 JSON 文本解析区域列表. `path` 仅用于报错.
///
/// 每个区域的坐标经排序去重, 与 [`Region::from_pixels`] 一致.
pub(crate) fn parse_regions(text: &str, path: &Path) -> Result<Vec<Region>> {
    let regions: Vec<Region> =
        serde_json::from_str(text).map_err(|e| PrepError::MalformedRegionFile {
            path: path.to_owned(),
            reason: e.to_string(),
        })?;
    Ok(regions
        .into_iter()
        .map(|r| Region::from_pixels(r.coordinates))
        .collect())
}

/// 读取 `regions.json` 格式的区域列表.
///
/// 缺少 `coordinates` 字段、坐标不是非负整数对、或 JSON 本身不合法时, 返回
/// [`PrepError::MalformedRegionFile`]. 文件不存在等底层错误返回 [`PrepError::Io`].
pub fn read_regions<P: AsRef<Path>>(path: P) -> Result<Vec<Region>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    parse_regions(&text, path)
}
