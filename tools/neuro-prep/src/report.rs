//! 数据集准备结果.

use neuro_berry::dataset::PrepSummary;
use std::io::{self, Write};

/// 将 `summary` 的结果写进 `w` 中.
pub fn describe_into<W: Write>(summary: &PrepSummary, w: &mut W) -> io::Result<()> {
    const S4: &str = "    ";

    utils::sep_to(&mut *w)?;
    writeln!(w, "Dataset preparation:")?;
    writeln!(w, "{S4}Archives downloaded: {}", summary.downloaded)?;
    writeln!(w, "{S4}Archives extracted: {}", summary.extracted)?;
    writeln!(w, "{S4}Moved into train: {}", summary.train_moved)?;
    writeln!(w, "{S4}Moved into test: {}", summary.test_moved)?;
    writeln!(w, "{S4}Masks written: {}", summary.masks_written)?;
    if summary.failures.is_empty() {
        writeln!(w, "{S4}Failures: /")?;
    } else {
        writeln!(w, "{S4}Failures:")?;
        for (name, err) in summary.failures.iter() {
            writeln!(w, "{S4}{S4}{name}: {err}")?;
        }
    }
    utils::sep_to(&mut *w)
}
