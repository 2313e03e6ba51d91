//! 入口模块：一键串起「目录获取 → 队列消费 → 地址解析 → 流式传输」。

pub(crate) mod download_course;
pub(crate) mod options;
