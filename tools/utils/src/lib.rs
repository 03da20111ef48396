//! 命令行工具依赖的通用组件.

use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::env;
use std::str::FromStr;

pub mod loader;

const SEP: &str = "--------------------------------------------------------";

/// 简单分隔线.
#[inline]
pub fn sep_to<W: std::io::Write>(mut w: W) -> std::io::Result<()> {
    writeln!(&mut w, "{SEP}")
}

/// 初始化日志.
///
/// 日志级别取自环境变量 `$NEURO_LOG` (如 `debug`), 未设置或无法解析时为 `info`.
pub fn init_logger() {
    let level = env::var("NEURO_LOG")
        .ok()
        .and_then(|s| LevelFilter::from_str(&s).ok())
        .unwrap_or(LevelFilter::Info);
    // 重复初始化只会返回错误, 可以忽略.
    let _ = SimpleLogger::new().with_level(level).init();
}
