//! 课时领域模块：媒体地址解析、展示文件名与流式传输器。

pub(crate) mod functions;
pub(crate) mod structs;
pub(crate) mod transfer;
