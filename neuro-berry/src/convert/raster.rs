use crate::{read_regions, BinaryMask, Idx2d, PrepError, Region, Result};
use std::path::Path;

/// 将区域列表光栅化为给定尺寸 `(高, 宽)` 的二值掩膜.
///
/// 任何区域的任何坐标都被涂为前景, 其余为背景; 重叠区域合并为前景.
/// 只要有一个坐标越界, 整次调用即返回 [`PrepError::CoordinateOutOfBounds`],
/// 不会返回部分结果. 空列表得到全背景掩膜.
pub fn rasterize(regions: &[Region], dims: Idx2d) -> Result<BinaryMask> {
    let (h_len, w_len) = dims;
    for (idx, region) in regions.iter().enumerate() {
        if let Some(&coord) = region
            .coordinates
            .iter()
            .find(|(h, w)| *h >= h_len || *w >= w_len)
        {
            return Err(PrepError::CoordinateOutOfBounds {
                region: idx,
                coord,
                dims,
            });
        }
    }

    let mut mask = BinaryMask::new(dims);
    for region in regions {
        mask.fill_batch(region.coordinates.iter().copied());
    }
    Ok(mask)
}

/// 读取 `regions.json` 并光栅化为掩膜.
pub fn region_file_to_mask<P: AsRef<Path>>(path: P, dims: Idx2d) -> Result<BinaryMask> {
    let path = path.as_ref();
    let regions = read_regions(path)?;
    log::debug!("{}: {} regions", path.display(), regions.len());
    rasterize(&regions, dims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::gray::*;
    use crate::consts::MASK_DIMS;

    fn region(coords: &[Idx2d]) -> Region {
        Region::from_pixels(coords.iter().copied())
    }

    #[test]
    fn test_rasterize_empty() {
        let mask = rasterize(&[], MASK_DIMS).unwrap();
        assert_eq!(mask.shape(), MASK_DIMS);
        assert!(mask.as_view().is_background());
    }

    #[test]
    fn test_rasterize_marks_exact_pixels() {
        let regions = [region(&[(0, 0), (1, 2)]), region(&[(3, 3)])];
        let mask = rasterize(&regions, (4, 5)).unwrap();
        let view = mask.as_view();
        assert_eq!(view.foreground_count(), 3);
        assert_eq!(mask[(0, 0)], MASK_FOREGROUND);
        assert_eq!(mask[(1, 2)], MASK_FOREGROUND);
        assert_eq!(mask[(3, 3)], MASK_FOREGROUND);
        assert_eq!(mask[(3, 4)], MASK_BACKGROUND);
    }

    #[test]
    fn test_rasterize_overlap_collapses() {
        let regions = [region(&[(1, 1), (1, 2)]), region(&[(1, 2), (2, 2)])];
        let mask = rasterize(&regions, (3, 3)).unwrap();
        assert_eq!(mask.as_view().foreground_count(), 3);
        assert!(mask.as_view().iter().all(|&p| p <= MASK_FOREGROUND));
    }

    #[test]
    fn test_rasterize_rejects_out_of_bounds() {
        let regions = [region(&[(0, 0)]), region(&[(1, 1), (2, 4)])];
        let err = rasterize(&regions, (4, 4)).unwrap_err();
        assert!(matches!(
            err,
            PrepError::CoordinateOutOfBounds {
                region: 1,
                coord: (2, 4),
                dims: (4, 4)
            }
        ));

        let err = rasterize(&[region(&[(4, 0)])], (4, 4)).unwrap_err();
        assert!(matches!(err, PrepError::CoordinateOutOfBounds { coord: (4, 0), .. }));
    }

    #[test]
    fn test_region_file_to_mask() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("regions.json");
        std::fs::write(&path, r#"[{"coordinates": [[0, 1], [2, 2]]}]"#).unwrap();
        let mask = region_file_to_mask(&path, (3, 3)).unwrap();
        assert_eq!(mask.as_view().foreground_pos::<Vec<_>>(), vec![(0, 1), (2, 2)]);

        std::fs::write(&path, r#"[{"coordinates": [[0, 1], [3, 2]]}]"#).unwrap();
        assert!(matches!(
            region_file_to_mask(&path, (3, 3)),
            Err(PrepError::CoordinateOutOfBounds { .. })
        ));
    }
}
