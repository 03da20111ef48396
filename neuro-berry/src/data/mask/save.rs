//! 掩膜图像的持久化存储与读取.

use super::{BinaryMask, MaskView};
use crate::consts::gray::*;
use image::{GrayImage, ImageBuffer, ImageResult, Luma, Primitive};
use ndarray::Array2;
use std::path::Path;

/// 表明一个可以通过 **可视化友好** 模式持久化存储的图像对象.
///
/// 背景保存为黑色, 前景保存为白色, 这也是下游数据集消费者期望的掩膜格式.
pub trait ImgWriteVis {
    /// 按照一定的可视化规则将图片保存到 `path` 路径.
    fn save<P: AsRef<Path>>(&self, path: P) -> ImageResult<()>;
}

/// 表明一个可以通过 **按原样** 模式持久化存储的图像对象.
///
/// 二值掩膜按 0/1 原样存储, 肉眼几乎不可见, 但能无损读回.
pub trait ImgWriteRaw {
    /// 按原样将图片保存到 `path` 路径.
    fn save_raw<P: AsRef<Path>>(&self, path: P) -> ImageResult<()>;
}

/// 使前景/背景更有利于单通道可视化.
#[inline]
pub(crate) fn pretty(pix: u8) -> u8 {
    if is_foreground(pix) {
        WHITE
    } else {
        BLACK
    }
}

/// 以 `f` 转换每个像素后写入单通道灰度图.
fn gray_image<'a, T: Copy + 'a, I>(shape: (usize, usize), it: I, f: impl Fn(T) -> u8) -> GrayImage
where
    I: Iterator<Item = ((usize, usize), &'a T)>,
{
    let (height, width) = shape;
    let mut buf = GrayImage::new(width as u32, height as u32);
    for ((h, w), &pix) in it {
        buf.put_pixel(w as u32, h as u32, Luma([f(pix)]));
    }
    buf
}

/// 会将背景/前景分别映射为黑色/白色.
impl ImgWriteVis for MaskView<'_> {
    fn save<P: AsRef<Path>>(&self, path: P) -> ImageResult<()> {
        gray_image(self.shape(), self.indexed_iter(), pretty).save(path)
    }
}

/// 按原样存储.
impl ImgWriteRaw for MaskView<'_> {
    fn save_raw<P: AsRef<Path>>(&self, path: P) -> ImageResult<()> {
        gray_image(self.shape(), self.indexed_iter(), |p| p).save(path)
    }
}

/// 会将背景/前景分别映射为黑色/白色.
impl ImgWriteVis for BinaryMask {
    #[inline]
    fn save<P: AsRef<Path>>(&self, path: P) -> ImageResult<()> {
        self.as_view().save(path)
    }
}

/// 按原样存储.
impl ImgWriteRaw for BinaryMask {
    #[inline]
    fn save_raw<P: AsRef<Path>>(&self, path: P) -> ImageResult<()> {
        self.as_view().save_raw(path)
    }
}

impl BinaryMask {
    /// 从单通道灰度图构造掩膜. 任何非零灰度都视为前景, 与位深无关.
    pub fn from_gray<T: Primitive>(img: &ImageBuffer<Luma<T>, Vec<T>>) -> Self {
        let (width, height) = img.dimensions();
        let data = Array2::from_shape_fn((height as usize, width as usize), |(h, w)| {
            u8::from(img.get_pixel(w as u32, h as u32).0[0] != T::DEFAULT_MIN_VALUE)
        });
        Self::from_raw(data)
    }

    /// 从磁盘读取掩膜图像. 彩色图像会先转换为灰度.
    ///
    /// 统一转换到 16 位灰度再判断前景, 因此 8 位和 16 位图中按原样存储的 0/1 都能正确读回.
    pub fn open<P: AsRef<Path>>(path: P) -> ImageResult<Self> {
        let img = image::open(path)?.to_luma16();
        Ok(Self::from_gray(&img))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_pretty() {
        assert_eq!(pretty(MASK_BACKGROUND), BLACK);
        assert_eq!(pretty(MASK_FOREGROUND), WHITE);
        assert_eq!(pretty(200), WHITE);
    }

    #[test]
    fn test_open_16bit_raw() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("raw16.png");
        let img = ImageBuffer::from_fn(4, 3, |x, y| Luma([u16::from(x == y)]));
        img.save(&path).unwrap();

        let mask = BinaryMask::open(&path).unwrap();
        assert_eq!(mask.shape(), (3, 4));
        assert_eq!(mask.as_view().foreground_count(), 3);
        assert_eq!(mask[(2, 2)], MASK_FOREGROUND);
        assert_eq!(mask[(0, 1)], MASK_BACKGROUND);
    }

    #[test]
    fn test_from_gray_any_nonzero() {
        let img = GrayImage::from_raw(3, 1, vec![0, 1, 200]).unwrap();
        let mask = BinaryMask::from_gray(&img);
        assert_eq!(mask.into_raw(), array![[0, 1, 1]]);
    }

    #[test]
    fn test_vis_save_and_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mask.png");
        let mask = BinaryMask::from_raw(array![[0, 1, 0], [1, 1, 1]]);
        mask.save(&path).unwrap();

        let img = image::open(&path).unwrap().to_luma8();
        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(img.get_pixel(1, 0).0[0], WHITE);
        assert_eq!(img.get_pixel(0, 0).0[0], BLACK);

        assert_eq!(BinaryMask::open(&path).unwrap(), mask);
    }

    #[test]
    fn test_raw_save_and_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("raw.png");
        let mask = BinaryMask::from_raw(array![[1, 0], [0, 1]]);
        mask.save_raw(&path).unwrap();

        let img = image::open(&path).unwrap().to_luma8();
        assert_eq!(img.get_pixel(0, 0).0[0], MASK_FOREGROUND);
        assert_eq!(BinaryMask::open(&path).unwrap(), mask);
    }
}
