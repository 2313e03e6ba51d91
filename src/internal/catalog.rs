//! 课程目录领域模块：目录获取、课程/课时元数据与下载队列。

pub(crate) mod functions;
pub(crate) mod structs;
