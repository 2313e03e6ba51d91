//! 响应式状态基础设施：传输进度的广播属性。

pub(crate) mod reactive_core;
