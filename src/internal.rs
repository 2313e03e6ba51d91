//! 内部模块划分：各领域模块在此声明，对外导出以 `lib.rs` 为准。

pub(crate) mod auth;
pub(crate) mod catalog;
pub(crate) mod entrance;
pub(crate) mod lesson;
pub(crate) mod sink;
pub(crate) mod states;
