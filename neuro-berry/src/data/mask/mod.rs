//! 二值掩膜与标签图对象的操作.

mod core;
mod iter;
mod save;

pub use self::core::{BinaryMask, LabelMap, LabelView, MaskView, PixelClass};

pub use save::{ImgWriteRaw, ImgWriteVis};
