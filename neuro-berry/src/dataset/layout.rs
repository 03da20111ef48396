use super::{ArchiveExtractor, ObjectStore, PrepConfig};
use crate::convert::region_file_to_mask;
use crate::{ImgWriteVis, PrepError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// 一次数据集准备的结果统计.
#[derive(Debug, Default)]
pub struct PrepSummary {
    /// 下载的归档个数.
    pub downloaded: usize,

    /// 解压 (并删除) 的归档个数.
    pub extracted: usize,

    /// 移入 `train` 目录的数据集个数.
    pub train_moved: usize,

    /// 移入 `test` 目录的数据集个数.
    pub test_moved: usize,

    /// 写入 `masks` 目录的掩膜个数.
    pub masks_written: usize,

    /// 生成掩膜失败的数据集及原因. 单个失败不影响其它数据集.
    pub failures: Vec<(String, PrepError)>,
}

/// 数据集准备调度器.
///
/// 1. 数据集目录中没有下载完成标记时, 获取所有尚未在本地出现的数据集归档, 全部成功后写入标记;
/// 2. 解压数据集目录下所有 `*.zip` 并删除归档;
/// 3. 将尚未移入 `train`/`test` 的数据集移入对应目录;
/// 4. 将尚无掩膜的训练集区域文件光栅化为 `masks` 目录下的掩膜.
///
/// 每一步都只处理尚未完成的部分, 因此中途失败后可以直接重新运行.
pub struct Preparer<S, X> {
    config: PrepConfig,
    store: S,
    extractor: X,
}

impl<S: ObjectStore, X: ArchiveExtractor> Preparer<S, X> {
    /// 初始化.
    pub fn new(config: PrepConfig, store: S, extractor: X) -> Self {
        Self {
            config,
            store,
            extractor,
        }
    }

    /// 获取配置.
    #[inline]
    pub fn config(&self) -> &PrepConfig {
        &self.config
    }

    /// 运行全部步骤.
    pub fn run(&self) -> Result<PrepSummary> {
        let mut summary = PrepSummary::default();
        let data_dir = self.config.data_dir.as_path();
        let marker = self.config.download_marker();

        if marker.is_file() {
            log::info!("NeuroFinder dataset has already been downloaded...");
        } else {
            log::info!("Downloading NeuroFinder dataset...");
            fs::create_dir_all(data_dir)?;
            summary.downloaded = self.download()?;
            fs::write(&marker, b"")?;
        }

        log::info!("Setting up `{}` folder...", data_dir.display());
        summary.extracted = self.extract_all()?;
        summary.train_moved =
            self.organize(&self.config.train_dir(), &self.config.train_files())?;
        summary.test_moved = self.organize(&self.config.test_dir(), &self.config.test_files())?;

        let (written, failures) = self.render_masks()?;
        summary.masks_written = written;
        summary.failures = failures;
        Ok(summary)
    }

    /// 下载本地尚不存在的数据集归档到数据集目录, 返回下载个数.
    /// 任一归档获取失败即返回错误.
    ///
    /// 数据集已解压 (无论是否已移入 `train`/`test`) 时不再下载.
    pub fn download(&self) -> Result<usize> {
        let mut fetched = 0;
        for name in self.config.train_files().into_iter().chain(self.config.test_files()) {
            if self.is_unpacked(&name) {
                log::debug!("{name} is already unpacked");
                continue;
            }
            self.store.fetch(&format!("{name}.zip"), &self.config.data_dir)?;
            fetched += 1;
        }
        Ok(fetched)
    }

    /// 解压数据集目录下所有 `*.zip` (按文件名排序), 并删除归档.
    pub fn extract_all(&self) -> Result<usize> {
        let mut archives: Vec<PathBuf> = Vec::with_capacity(8);
        for entry in fs::read_dir(&self.config.data_dir)? {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "zip") {
                archives.push(path);
            }
        }
        archives.sort();

        for archive in archives.iter() {
            log::info!("Unzipping {}...", archive.display());
            self.extractor.extract(archive, &self.config.data_dir)?;
            fs::remove_file(archive)?;
        }
        Ok(archives.len())
    }

    /// 将 `names` 中尚未位于 `dir` 的数据集目录移入 `dir`, 返回移动个数.
    ///
    /// 先检查所有待移动的数据集都存在, 任一缺失时不做任何移动.
    fn organize(&self, dir: &Path, names: &[String]) -> Result<usize> {
        let mut pending = Vec::with_capacity(names.len());
        for name in names {
            if dir.join(name).exists() {
                continue;
            }
            let src = self.config.data_dir.join(name);
            if !src.exists() {
                return Err(PrepError::DatasetNotFound(name.clone()));
            }
            pending.push((src, dir.join(name)));
        }
        if pending.is_empty() {
            log::info!("`{}` folder already exists. Moving ahead...", dir.display());
            return Ok(0);
        }

        fs::create_dir_all(dir)?;
        for (src, dst) in pending.iter() {
            fs::rename(src, dst)?;
        }
        log::info!(
            "`{}` folder has been successfully created! ({} moved)",
            dir.display(),
            pending.len()
        );
        Ok(pending.len())
    }

    /// 将尚无掩膜的训练集区域文件光栅化为掩膜, 写入 `masks` 目录.
    ///
    /// 返回成功写入的个数, 以及失败的数据集和原因.
    pub fn render_masks(&self) -> Result<(usize, Vec<(String, PrepError)>)> {
        fs::create_dir_all(self.config.masks_dir())?;

        let mut written = 0;
        let mut failures = vec![];
        for name in self.config.train_files() {
            if self.config.mask_path(&name).is_file() {
                continue;
            }
            match self.render_mask(&name) {
                Ok(()) => written += 1,
                Err(e) => {
                    log::warn!("{name}: {e}");
                    failures.push((name, e));
                }
            }
        }
        if written == 0 && failures.is_empty() {
            log::info!("`masks` folder already exists. Moving ahead...");
        } else {
            log::info!("`masks` folder has been successfully created! ({written} masks)");
        }
        Ok((written, failures))
    }

    fn render_mask(&self, name: &str) -> Result<()> {
        let mask = region_file_to_mask(self.config.regions_path(name), self.config.mask_dims)?;
        mask.save(self.config.mask_path(name))?;
        Ok(())
    }

    /// 数据集 `name` 是否已解压 (位于数据集目录, 或已移入 `train`/`test`)?
    fn is_unpacked(&self, name: &str) -> bool {
        [
            self.config.data_dir.clone(),
            self.config.train_dir(),
            self.config.test_dir(),
        ]
        .iter()
        .any(|dir| dir.join(name).is_dir())
    }
}
