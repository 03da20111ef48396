use crate::{PrepError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// 远程对象存储. 按名字把一个对象取到本地目录.
///
/// 获取失败时返回 [`PrepError::DatasetNotFound`]; 实现不应自行重试,
/// 重试策略由调用者决定.
pub trait ObjectStore {
    /// 将对象 `name` 下载到 `dest_dir` 目录下, 返回本地文件路径.
    fn fetch(&self, name: &str, dest_dir: &Path) -> Result<PathBuf>;
}

/// 通过 `gsutil` 命令行工具访问 Google Storage.
#[derive(Clone, Debug)]
pub struct GsutilStore {
    url: String,
    program: PathBuf,
}

impl GsutilStore {
    /// 以桶地址初始化, 使用 `$PATH` 中的 `gsutil`.
    pub fn new<S: Into<String>>(url: S) -> Self {
        Self {
            url: url.into(),
            program: PathBuf::from("gsutil"),
        }
    }

    /// 指定 `gsutil` 可执行文件路径.
    pub fn with_program<P: Into<PathBuf>>(mut self, program: P) -> Self {
        self.program = program.into();
        self
    }

    /// 对象 `name` 的完整远程地址.
    pub fn object_url(&self, name: &str) -> String {
        format!("{}/{name}", self.url.trim_end_matches('/'))
    }
}

impl ObjectStore for GsutilStore {
    fn fetch(&self, name: &str, dest_dir: &Path) -> Result<PathBuf> {
        let url = self.object_url(name);
        log::info!("Downloading {url}...");
        let status = Command::new(&self.program)
            .args(["-m", "cp", "-r"])
            .arg(&url)
            .arg(dest_dir)
            .stdin(Stdio::null())
            .status();
        match status {
            Ok(s) if s.success() => Ok(dest_dir.join(name)),
            Ok(s) => {
                log::warn!("`{}` exited with {s} for {url}", self.program.display());
                Err(PrepError::DatasetNotFound(name.to_string()))
            }
            Err(e) => {
                log::warn!("failed to run `{}`: {e}", self.program.display());
                Err(PrepError::DatasetNotFound(name.to_string()))
            }
        }
    }
}

/// 本地镜像目录, 对象即 `{root}/{name}` 文件. 适用于离线环境和测试.
#[derive(Clone, Debug)]
pub struct LocalMirror {
    root: PathBuf,
}

impl LocalMirror {
    /// 以镜像根目录初始化.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }
}

impl ObjectStore for LocalMirror {
    fn fetch(&self, name: &str, dest_dir: &Path) -> Result<PathBuf> {
        let src = self.root.join(name);
        if !src.is_file() {
            return Err(PrepError::DatasetNotFound(name.to_string()));
        }
        let dest = dest_dir.join(name);
        fs::copy(&src, &dest)?;
        log::debug!("{} -> {}", src.display(), dest.display());
        Ok(dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_url() {
        let store = GsutilStore::new("gs://bucket/project/");
        assert_eq!(store.object_url("a.zip"), "gs://bucket/project/a.zip");
        let store = GsutilStore::new("gs://bucket");
        assert_eq!(store.object_url("a.zip"), "gs://bucket/a.zip");
    }

    #[test]
    fn test_gsutil_missing_program() {
        let dir = tempfile::tempdir().unwrap();
        let store = GsutilStore::new("gs://bucket").with_program(dir.path().join("no-gsutil"));
        let err = store.fetch("a.zip", dir.path()).unwrap_err();
        assert!(matches!(err, PrepError::DatasetNotFound(name) if name == "a.zip"));
    }

    #[test]
    fn test_local_mirror() {
        let mirror = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        fs::write(mirror.path().join("a.zip"), b"zip").unwrap();

        let store = LocalMirror::new(mirror.path());
        let got = store.fetch("a.zip", dest.path()).unwrap();
        assert_eq!(got, dest.path().join("a.zip"));
        assert_eq!(fs::read(got).unwrap(), b"zip");

        let err = store.fetch("b.zip", dest.path()).unwrap_err();
        assert!(matches!(err, PrepError::DatasetNotFound(name) if name == "b.zip"));
    }
}
