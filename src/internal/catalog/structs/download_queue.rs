use std::collections::VecDeque;

use crate::internal::catalog::structs::course_catalog::CourseCatalog;

/// 下载队列：课时 id 的有序序列，派生自 [`CourseCatalog::lesson_hashes`]。
///
/// 不重排、不去重；队列长度在一次运行中只会减少。
#[derive(Debug, Clone)]
pub struct DownloadQueue {
    lesson_ids: VecDeque<String>,
}

impl DownloadQueue {
    /// 由课程目录派生队列，顺序与 `lesson_hashes` 完全一致。
    pub fn from_catalog(catalog: &CourseCatalog) -> Self {
        Self {
            lesson_ids: catalog.lesson_hashes.iter().cloned().collect(),
        }
    }

    /// 丢弃队首的 n 项；n 大于等于剩余长度时清空（重复调用幂等）。
    pub fn skip(&mut self, n: usize) {
        let n = n.min(self.lesson_ids.len());
        self.lesson_ids.drain(..n);
    }

    /// 弹出并返回队首课时 id；队列空时返回 `None`。
    pub fn pop(&mut self) -> Option<String> {
        self.lesson_ids.pop_front()
    }

    pub fn len(&self) -> usize {
        self.lesson_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lesson_ids.is_empty()
    }
}
