use crate::{PrepError, Result};
use std::fs::File;
use std::path::Path;
use zip::ZipArchive;

/// 归档解压工具.
pub trait ArchiveExtractor {
    /// 将 `archive` 解压到 `dest_dir` 目录下. 不删除归档本身.
    fn extract(&self, archive: &Path, dest_dir: &Path) -> Result<()>;
}

/// 进程内解压 zip 归档. 已存在的文件会被覆盖.
///
/// 条目路径试图逃出 `dest_dir` 的归档会被整体拒绝.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZipExtractor;

impl ArchiveExtractor for ZipExtractor {
    fn extract(&self, archive: &Path, dest_dir: &Path) -> Result<()> {
        let extract_err = |reason: String| PrepError::Extract {
            archive: archive.to_owned(),
            reason,
        };

        let file = File::open(archive)?;
        let mut zip = ZipArchive::new(file).map_err(|e| extract_err(e.to_string()))?;
        log::debug!("{}: {} entries", archive.display(), zip.len());
        zip.extract(dest_dir).map_err(|e| extract_err(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use zip::write::FileOptions;
    use zip::ZipWriter;

    fn write_zip(path: &Path, entries: &[(&str, &str)]) {
        let mut zip = ZipWriter::new(File::create(path).unwrap());
        for (name, content) in entries {
            zip.start_file(*name, FileOptions::default()).unwrap();
            zip.write_all(content.as_bytes()).unwrap();
        }
        zip.finish().unwrap();
    }

    #[test]
    fn test_zip_extract() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("neurofinder.00.00.zip");
        write_zip(
            &archive,
            &[
                ("neurofinder.00.00/regions/regions.json", "[]"),
                ("neurofinder.00.00/images/image00000.tiff", "tiff"),
            ],
        );

        ZipExtractor.extract(&archive, dir.path()).unwrap();
        let root = dir.path().join("neurofinder.00.00");
        assert_eq!(fs::read_to_string(root.join("regions/regions.json")).unwrap(), "[]");
        assert!(root.join("images/image00000.tiff").is_file());
        assert!(archive.is_file());
    }

    #[test]
    fn test_zip_extract_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("a.zip");
        fs::write(dir.path().join("x.txt"), "old").unwrap();
        write_zip(&archive, &[("x.txt", "new")]);

        ZipExtractor.extract(&archive, dir.path()).unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("x.txt")).unwrap(), "new");
    }

    #[test]
    fn test_zip_extract_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("a.zip");
        fs::write(&archive, "definitely not a zip").unwrap();
        let err = ZipExtractor.extract(&archive, dir.path()).unwrap_err();
        assert!(matches!(err, PrepError::Extract { archive: a, .. } if a == archive));
    }

    #[test]
    fn test_zip_extract_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = ZipExtractor
            .extract(&dir.path().join("nope.zip"), dir.path())
            .unwrap_err();
        assert!(matches!(err, PrepError::Io(_)));
    }
}
