//! 🧠欢迎光临🔬
//!
//! 涵盖了本 crate 一系列常用的功能.

pub use crate::Idx2d;

pub use crate::data::{
    assemble, read_regions, write_records, BinaryMask, DatasetRecord, ImgWriteRaw, ImgWriteVis,
    LabelMap, LabelView, MaskView, PixelClass, Region,
};

pub use crate::convert::{
    mask_file_to_regions, rasterize, region_file_to_mask, vectorize, vectorize_batch, ToRegions,
};

pub use crate::consts::gray::{MASK_BACKGROUND, MASK_FOREGROUND};
pub use crate::consts::{BACKGROUND_LABEL, MASK_DIMS};

pub use crate::dataset::{
    self, home_dataset_dir_with, ArchiveExtractor, GsutilStore, LocalMirror, ObjectStore,
    PrepConfig, PrepSummary, Preparer, ZipExtractor,
};

pub use crate::{PrepError, Result};
