use crate::consts::gray::*;
use crate::consts::BACKGROUND_LABEL;
use crate::Idx2d;
use ndarray::iter::Iter;
use ndarray::{Array2, ArrayView2, Ix2};
use std::ops::{Index, IndexMut};

/// 不可变、借用的二维二值掩膜.
///
/// 像素值为 [`MASK_BACKGROUND`] 或任意非零值 (前景).
pub struct MaskView<'a> {
    /// 底层数据的轻量级视图, 借用于 [`BinaryMask`] 或调用者自己的数组.
    data: ArrayView2<'a, u8>,
}

impl<'a> From<ArrayView2<'a, u8>> for MaskView<'a> {
    #[inline]
    fn from(data: ArrayView2<'a, u8>) -> Self {
        Self::new(data)
    }
}

/// 不可变、借用的二维标签图.
///
/// [`BACKGROUND_LABEL`] 为背景, 其余每个值标识一个连通分量.
pub struct LabelView<'a> {
    /// 底层数据的轻量级视图, 借用于 [`LabelMap`] 或调用者自己的数组.
    data: ArrayView2<'a, u32>,
}

impl<'a> From<ArrayView2<'a, u32>> for LabelView<'a> {
    #[inline]
    fn from(data: ArrayView2<'a, u32>) -> Self {
        Self::new(data)
    }
}

/// 像素在标签图中的分类.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PixelClass {
    /// 背景像素.
    Background,

    /// 3×3 窗口内所有像素都与中心同标签的前景像素.
    Interior,

    /// 3×3 窗口内至少有一个像素 (含越界位置) 与中心标签不同的前景像素.
    Boundary,
}

impl PixelClass {
    /// 是否为边缘像素.
    #[inline]
    pub fn is_boundary(&self) -> bool {
        matches!(self, Self::Boundary)
    }
}

/// 二维栅格不可变方法集合.
macro_rules! impl_raster_immut {
    ($life: lifetime, $view: ty, $array: ty, $elem: ty) => {
        impl<$life> Index<Idx2d> for $view {
            type Output = $elem;

            #[inline]
            fn index(&self, index: Idx2d) -> &Self::Output {
                &self.data[index]
            }
        }

        /// 不可变方法集合.
        impl<$life> $view {
            /// 直接初始化.
            #[inline]
            pub fn new(data: $array) -> Self {
                Self { data }
            }

            /// 获取可以迭代图像像素的迭代器.
            #[inline]
            pub fn iter(&self) -> Iter<'_, $elem, Ix2> {
                self.data.iter()
            }

            /// 获取给定位置 (行, 列) 的像素值. 越界时返回 `None`.
            #[inline]
            pub fn get(&self, pos: Idx2d) -> Option<&$elem> {
                self.data.get(pos)
            }

            /// 图像的分辨率 (高, 宽).
            #[inline]
            pub fn shape(&self) -> Idx2d {
                self.data.dim()
            }

            /// 判断一个索引是否合法 (未越界).
            #[inline]
            pub fn check(&self, (h, w): Idx2d) -> bool {
                let (h_len, w_len) = self.shape();
                h < h_len && w < w_len
            }

            /// 统计图像中值为 `value` 的像素总个数.
            #[inline]
            pub fn count(&self, value: $elem) -> usize {
                self.data.iter().filter(|&p| *p == value).count()
            }

            /// 获得 `pos` 的 8-邻域像素索引. 保证返回的索引都不越界.
            pub fn n8_positions(&self, pos: Idx2d) -> Vec<Idx2d> {
                crate::eight::neighbour8(pos)
                    .into_iter()
                    .filter(|p| self.check(*p))
                    .collect()
            }

            /// 以行优先规则, 获取能迭代图像所有索引的迭代器.
            #[inline]
            pub fn pos_iter(&self) -> impl Iterator<Item = Idx2d> {
                super::iter::PosIter::new(self.shape())
            }

            /// 以行优先规则, 获取能迭代图像所有 `(索引, 像素值)` 的迭代器.
            #[inline]
            pub fn indexed_iter(&self) -> impl Iterator<Item = (Idx2d, &$elem)> {
                self.data.indexed_iter()
            }
        }
    };
}

impl_raster_immut!('a, MaskView<'a>, ArrayView2<'a, u8>, u8);
impl_raster_immut!('a, LabelView<'a>, ArrayView2<'a, u32>, u32);

/// 二值掩膜专有方法.
impl MaskView<'_> {
    /// 该图是否为全背景图?
    #[inline]
    pub fn is_background(&self) -> bool {
        self.data.iter().copied().all(is_background)
    }

    /// 前景像素个数.
    #[inline]
    pub fn foreground_count(&self) -> usize {
        self.data.iter().filter(|p| is_foreground(**p)).count()
    }

    /// 以行优先顺序获取所有前景像素的索引.
    pub fn foreground_pos<B: FromIterator<Idx2d>>(&self) -> B {
        FromIterator::from_iter(
            self.data
                .indexed_iter()
                .filter_map(|(pos, pixel)| is_foreground(*pixel).then_some(pos)),
        )
    }

    /// 克隆自己, 获得一个拥有所有权的掩膜. 非零值统一为 [`MASK_FOREGROUND`].
    pub fn to_owned(&self) -> BinaryMask {
        BinaryMask::from_raw(self.data.to_owned())
    }
}

/// 标签图专有方法.
impl LabelView<'_> {
    /// 该图是否为全背景图?
    #[inline]
    pub fn is_background(&self) -> bool {
        self.data.iter().all(|&l| l == BACKGROUND_LABEL)
    }

    /// 图中最大的标签. 全背景时为 [`BACKGROUND_LABEL`].
    #[inline]
    pub fn max_label(&self) -> u32 {
        self.data.iter().copied().max().unwrap_or(BACKGROUND_LABEL)
    }

    /// 克隆自己, 获得一个拥有所有权的标签图.
    pub fn to_owned(&self) -> LabelMap {
        LabelMap {
            data: self.data.to_owned(),
        }
    }
}

/// 拥有所有权的二维二值掩膜. 像素值只有 [`MASK_BACKGROUND`] 和 [`MASK_FOREGROUND`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryMask {
    data: Array2<u8>,
}

impl BinaryMask {
    /// 创建给定尺寸 (高, 宽) 的全背景掩膜.
    #[inline]
    pub fn new(shape: Idx2d) -> Self {
        Self {
            data: Array2::from_elem(shape, MASK_BACKGROUND),
        }
    }

    /// 从任意单通道数组构造掩膜. 所有非零值视为前景.
    pub fn from_raw(mut data: Array2<u8>) -> Self {
        data.mapv_inplace(|p| {
            if is_foreground(p) {
                MASK_FOREGROUND
            } else {
                MASK_BACKGROUND
            }
        });
        Self { data }
    }

    /// 获得不可变视图.
    #[inline]
    pub fn as_view(&self) -> MaskView<'_> {
        MaskView::new(self.data.view())
    }

    /// 直接获得底层数据.
    #[inline]
    pub fn into_raw(self) -> Array2<u8> {
        self.data
    }

    /// 图像的分辨率 (高, 宽).
    #[inline]
    pub fn shape(&self) -> Idx2d {
        self.data.dim()
    }

    /// 将 `it` 中的每个索引对应的像素改为前景.
    ///
    /// 索引越界时程序 panic; 调用者应事先检查.
    pub(crate) fn fill_batch<I: IntoIterator<Item = Idx2d>>(&mut self, it: I) {
        for pos in it.into_iter() {
            self[pos] = MASK_FOREGROUND;
        }
    }
}

impl Index<Idx2d> for BinaryMask {
    type Output = u8;

    #[inline]
    fn index(&self, index: Idx2d) -> &Self::Output {
        &self.data[index]
    }
}

impl IndexMut<Idx2d> for BinaryMask {
    #[inline]
    fn index_mut(&mut self, index: Idx2d) -> &mut Self::Output {
        &mut self.data[index]
    }
}

/// 拥有所有权的二维标签图.
///
/// `LabelMap` 仅提供到 `LabelView` 的轻量转换和底层数据移动, 其它方法请通过视图调用.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelMap {
    data: Array2<u32>,
}

impl LabelMap {
    /// 直接以任意标签数组初始化.
    #[inline]
    pub fn from_raw(data: Array2<u32>) -> Self {
        Self { data }
    }

    /// 获得不可变视图.
    #[inline]
    pub fn as_view(&self) -> LabelView<'_> {
        LabelView::new(self.data.view())
    }

    /// 直接获得底层数据.
    #[inline]
    pub fn into_raw(self) -> Array2<u32> {
        self.data
    }
}

impl Index<Idx2d> for LabelMap {
    type Output = u32;

    #[inline]
    fn index(&self, index: Idx2d) -> &Self::Output {
        &self.data[index]
    }
}
