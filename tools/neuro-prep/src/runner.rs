//! 子命令运行函数.

use crate::report;
use neuro_berry::prelude::*;
use std::io;
use std::path::{Path, PathBuf};
use utils::loader;

/// 数据集准备. 给定 `mirror` 时从本地目录获取归档, 否则通过 `gsutil` 下载.
pub fn setup(mirror: Option<PathBuf>) -> Result<()> {
    let config = loader::config_from_env_or_default()?;
    log::info!("Data directory: {}", config.data_dir.display());

    let summary = match mirror {
        Some(dir) => Preparer::new(config, LocalMirror::new(dir), ZipExtractor).run()?,
        None => {
            let store = GsutilStore::new(config.bucket_url.clone());
            Preparer::new(config, store, ZipExtractor).run()?
        }
    };

    report::describe_into(&summary, &mut io::stdout().lock())?;
    if !summary.failures.is_empty() {
        log::warn!("{} masks could not be rendered", summary.failures.len());
    }
    Ok(())
}

/// 区域文件 -> 掩膜图像.
pub fn to_mask(regions: &Path, out: &Path, dims: Idx2d) -> Result<()> {
    let mask = region_file_to_mask(regions, dims)?;
    mask.save(out)?;
    log::info!(
        "{} -> {} ({} foreground pixels)",
        regions.display(),
        out.display(),
        mask.as_view().foreground_count()
    );
    Ok(())
}

/// 掩膜图像 -> 记录文件. 数据集名为各图像的文件名 (不含扩展名).
///
/// 任一图像失败时逐个报告并返回第一个错误, 不写出部分记录.
pub fn to_regions(masks: &[PathBuf], out: &Path) -> Result<()> {
    let names: Vec<String> = masks
        .iter()
        .map(|p| {
            p.file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default()
        })
        .collect();

    let mut regions = Vec::with_capacity(masks.len());
    let mut first_err = None;
    for (name, result) in names.iter().zip(vectorize_batch(masks)) {
        match result {
            Ok(r) => {
                log::info!("{name}: {} regions", r.len());
                regions.push(r);
            }
            Err(e) => {
                log::error!("{name}: {e}");
                first_err.get_or_insert(e);
            }
        }
    }
    if let Some(e) = first_err {
        return Err(e);
    }

    let records = assemble(names, regions)?;
    write_records(out, &records)?;
    log::info!("Wrote {} records to {}", records.len(), out.display());
    Ok(())
}
