use super::Region;
use crate::{PrepError, Result};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// 最终写入 JSON 文件的单个数据集记录.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetRecord {
    /// 数据集名, 如 `neurofinder.00.00.test`.
    pub dataset: String,

    /// 该数据集的所有区域.
    pub regions: Vec<Region>,
}

/// 将数据集名与区域列表逐一配对, 组装为输出记录.
///
/// 两个列表长度必须相同, 否则返回 [`PrepError::LengthMismatch`];
/// 不会截断较长的一方, 也不会返回部分结果.
pub fn assemble<S: Into<String>>(
    names: Vec<S>,
    regions_per_dataset: Vec<Vec<Region>>,
) -> Result<Vec<DatasetRecord>> {
    if names.len() != regions_per_dataset.len() {
        return Err(PrepError::LengthMismatch {
            names: names.len(),
            regions: regions_per_dataset.len(),
        });
    }
    Ok(names
        .into_iter()
        .zip_eq(regions_per_dataset)
        .map(|(name, regions)| DatasetRecord {
            dataset: name.into(),
            regions,
        })
        .collect())
}

/// 以缩进格式将记录写入 `path`.
pub fn write_records<P: AsRef<Path>>(path: P, records: &[DatasetRecord]) -> Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut w, records)?;
    w.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(coords: &[(usize, usize)]) -> Region {
        Region::from_pixels(coords.iter().copied())
    }

    #[test]
    fn test_assemble() {
        let records = assemble(
            vec!["a", "b"],
            vec![vec![region(&[(0, 0)])], vec![]],
        )
        .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].dataset, "a");
        assert_eq!(records[0].regions, vec![region(&[(0, 0)])]);
        assert_eq!(records[1].dataset, "b");
        assert!(records[1].regions.is_empty());
    }

    #[test]
    fn test_assemble_length_mismatch() {
        let err = assemble(vec!["a", "b"], vec![vec![region(&[(1, 1)])]]).unwrap_err();
        assert!(matches!(
            err,
            PrepError::LengthMismatch {
                names: 2,
                regions: 1
            }
        ));

        let err = assemble(Vec::<String>::new(), vec![vec![]]).unwrap_err();
        assert!(matches!(err, PrepError::LengthMismatch { names: 0, regions: 1 }));
    }

    #[test]
    fn test_assemble_empty() {
        assert!(assemble(Vec::<&str>::new(), vec![]).unwrap().is_empty());
    }

    #[test]
    fn test_write_records_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("submission.json");
        let records = assemble(vec!["neurofinder.00.00.test"], vec![vec![region(&[(2, 3)])]]).unwrap();
        write_records(&path, &records).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                {"dataset": "neurofinder.00.00.test", "regions": [{"coordinates": [[2, 3]]}]}
            ])
        );
    }
}
