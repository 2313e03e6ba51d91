//! 存储汇领域模块：统一的写入流契约与本地/远端两种实现。

pub(crate) mod structs;
pub(crate) mod traits;
