//! 8-邻域相关的连通分量标记与边缘提取算法.

mod core;

use crate::Idx2d;

/// 获得 `(h, w)` 的 8-邻居索引, 行优先. 不检查越界.
///
/// 位于第 0 行/列时, 对应邻居的分量会回绕为 `usize::MAX`,
/// 因此任何带越界检查的读取都会得到 `None`.
#[inline]
pub(crate) fn neighbour8((h, w): Idx2d) -> [Idx2d; 8] {
    [
        (h.wrapping_sub(1), w.wrapping_sub(1)),
        (h.wrapping_sub(1), w),
        (h.wrapping_sub(1), w.saturating_add(1)),
        (h, w.wrapping_sub(1)),
        (h, w.saturating_add(1)),
        (h.saturating_add(1), w.wrapping_sub(1)),
        (h.saturating_add(1), w),
        (h.saturating_add(1), w.saturating_add(1)),
    ]
}

/// 判断两个索引是否 8-相邻 (不含自身).
#[inline]
pub fn is_n8_neighbouring((a, b): Idx2d, (c, d): Idx2d) -> bool {
    matches!((a.abs_diff(c), b.abs_diff(d)), (1, 0) | (0, 1) | (1, 1))
}
