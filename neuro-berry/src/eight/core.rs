use crate::consts::gray::*;
use crate::consts::BACKGROUND_LABEL;
use crate::{Area2d, Areas2d, Idx2d, LabelMap, LabelView, MaskView, PixelClass};
use ndarray::Array2;
use std::collections::{BTreeMap, VecDeque};

/// 连通分量标记实现块.
impl MaskView<'_> {
    /// 按照 8-相邻规则获取所有前景连通分量. 两个前景像素 `p1` 和 `p2`
    /// 属于同一个分量, 当且仅当存在一条从 `p1` 到 `p2` 的 8-相邻前景路径.
    ///
    /// 分量按其第一个像素的行优先顺序排列, 分量内部按 BFS 顺序排列.
    /// 每次运行产生同样的结果.
    pub fn components(&self) -> Areas2d {
        let mut ans = Areas2d::new();
        let mut bfs_q = VecDeque::with_capacity(16);
        let mut seen = Array2::from_elem(self.shape(), false);

        for pos in self.pos_iter() {
            if seen[pos] || !is_foreground(self[pos]) {
                continue;
            }
            seen[pos] = true;
            bfs_q.push_back(pos);
            let mut this_area = Area2d::with_capacity(1);
            while let Some(cur_pos) = bfs_q.pop_front() {
                this_area.push(cur_pos);
                for neigh in self.n8_positions(cur_pos) {
                    if !seen[neigh] && is_foreground(self[neigh]) {
                        seen[neigh] = true;
                        bfs_q.push_back(neigh);
                    }
                }
            }
            ans.push(this_area);
        }
        ans
    }

    /// 8-邻接连通分量标记. 背景为 [`BACKGROUND_LABEL`], 第 `i` 个分量
    /// (按 [`MaskView::components`] 的顺序) 的标签为 `i + 1`.
    pub fn label(&self) -> LabelMap {
        let mut data = Array2::from_elem(self.shape(), BACKGROUND_LABEL);
        for (label, area) in (1u32..).zip(self.components()) {
            for pos in area {
                data[pos] = label;
            }
        }
        LabelMap::from_raw(data)
    }
}

/// 内部像素剔除实现块.
impl LabelView<'_> {
    /// 判断 `pos` 的 3×3 窗口是否全部为 `pos` 的标签.
    ///
    /// 越界位置视为背景, 因此贴边像素一定不是内部像素.
    fn is_homogeneous(&self, pos: Idx2d) -> bool {
        let label = self[pos];
        crate::eight::neighbour8(pos)
            .into_iter()
            .all(|p| matches!(self.get(p), Some(&v) if v == label))
    }

    /// 对 `pos` 处的像素分类.
    ///
    /// # 注意
    ///
    /// `pos` 越界时程序 panic.
    pub fn classify(&self, pos: Idx2d) -> PixelClass {
        if self[pos] == BACKGROUND_LABEL {
            PixelClass::Background
        } else if self.is_homogeneous(pos) {
            PixelClass::Interior
        } else {
            PixelClass::Boundary
        }
    }

    /// 对所有像素分类, 结果与原图同形状.
    pub fn classes(&self) -> Array2<PixelClass> {
        Array2::from_shape_fn(self.shape(), |pos| self.classify(pos))
    }

    /// 获取每个标签的边缘像素, 键为标签, 值为行优先排列的像素.
    ///
    /// 先对全图分类, 再只从边缘像素构建结果; 不出现在图中的标签不会出现在结果中.
    /// 由于每个非空分量至少有一个边缘像素 (其最上一行最左侧的像素),
    /// 结果中不存在空列表.
    pub fn boundary_areas(&self) -> BTreeMap<u32, Area2d> {
        let classes = self.classes();
        let mut ans: BTreeMap<u32, Area2d> = BTreeMap::new();
        for (pos, class) in classes.indexed_iter() {
            if class.is_boundary() {
                ans.entry(self[pos]).or_default().push(pos);
            }
        }
        ans
    }

    /// 将所有内部像素置为背景, 返回新的标签图. 该操作是幂等的.
    pub fn strip_interiors(&self) -> LabelMap {
        let classes = self.classes();
        let data = Array2::from_shape_fn(self.shape(), |pos| match classes[pos] {
            PixelClass::Boundary => self[pos],
            PixelClass::Interior | PixelClass::Background => BACKGROUND_LABEL,
        });
        LabelMap::from_raw(data)
    }
}
