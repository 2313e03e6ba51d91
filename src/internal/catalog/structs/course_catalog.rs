use std::collections::HashMap;

use serde::Deserialize;

/// 课程目录：一次获取后不再变更。
///
/// `lesson_hashes` 决定下载顺序；`lesson_data` 按课时 id 提供元数据，
/// 对下游组件只读。
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseCatalog {
    /// 课程 slug（本地保存时作为目录名）
    pub slug: String,
    /// 课程标题
    pub title: String,
    /// 课时 id → 元数据
    pub lesson_data: HashMap<String, LessonMeta>,
    /// 课时 id 的有序列表，即下载顺序
    pub lesson_hashes: Vec<String>,
}

impl CourseCatalog {
    /// 按课时 id 查元数据。
    pub fn lesson(&self, lesson_id: &str) -> Option<&LessonMeta> {
        self.lesson_data.get(lesson_id)
    }
}

/// 单个课时的元数据，由 [`CourseCatalog`] 持有。
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonMeta {
    /// 0 基序号（展示文件名用 1 基，见 lesson_filename）
    pub index: u32,
    /// 课时标题
    pub title: String,
    /// 本课时的媒体解析端点根地址
    pub source_base: String,
}
