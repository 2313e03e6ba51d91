//! 传输器领域模块：专属于单个课时的流式传输器，由课时元数据与已解析
//! 媒体地址创建并执行传输。
//!
//! 使用方式：`LessonTransfer::new(auth, lesson, source).with_hook(hook).send(&*sink).await`
//! 对外导出以 [`crate::lesson`] 为准，此处仅做模块划分，不重复 pub use。

pub(crate) mod structs;
pub(crate) mod traits;
