pub mod mask;
mod record;
mod region;

pub use mask::{BinaryMask, ImgWriteRaw, ImgWriteVis, LabelMap, LabelView, MaskView, PixelClass};

pub use record::{assemble, write_records, DatasetRecord};
pub use region::{read_regions, Region};
