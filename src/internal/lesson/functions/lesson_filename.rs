//! 课时展示文件名：`{两位序号}.{标题}.{格式}`，并清理文件名非法字符。

use crate::internal::catalog::structs::course_catalog::LessonMeta;

/// 文件名长度上限（字节），对齐 Linux NAME_MAX
const NAME_MAX: usize = 255;

/// 由课时元数据和实际媒体格式计算展示文件名。
///
/// 序号取 1 基：小于 10 时补零到两位（`03.`），两位及以上原样（`12.`）。
pub fn lesson_filename(lesson: &LessonMeta, format: &str) -> String {
    let ix = lesson.index + 1;
    sanitize_filename(&format!("{ix:02}.{}.{format}", lesson.title))
}

/// 清理文件名：删除各平台非法字符（`/ \ ? < > : * | "` 与控制字符），
/// 保留空格，去掉首尾的点和空白，超长时按字符边界截断到 255 字节。
pub fn sanitize_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());

    for c in name.chars() {
        let illegal = matches!(c, '/' | '\\' | '?' | '<' | '>' | ':' | '*' | '|' | '"')
            || c.is_control();
        if !illegal {
            out.push(c);
        }
    }

    let trimmed = out.trim_matches(|c: char| c == '.' || c.is_whitespace());

    if trimmed.len() > NAME_MAX {
        let mut take = NAME_MAX;
        while take > 0 && !trimmed.is_char_boundary(take) {
            take -= 1;
        }
        trimmed[..take].to_string()
    } else {
        trimmed.to_string()
    }
}
