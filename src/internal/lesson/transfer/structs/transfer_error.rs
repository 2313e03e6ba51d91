//! 传输相关错误类型。

use thiserror::Error;

use crate::internal::lesson::transfer::traits::transfer_hook::HookAbort;
use crate::internal::sink::structs::sink_error::SinkError;

#[derive(Debug, Error)]
pub enum TransferError {
    /// 读侧失败：媒体地址请求或流中断。
    #[error("HTTP 请求失败: {0}")]
    Request(#[from] reqwest::Error),

    /// 写侧失败：存储汇拒绝写入（磁盘满、远端配额等）。
    #[error("存储汇写入失败: {0}")]
    Sink(#[from] SinkError),

    #[error("传输被钩子中止")]
    HookAborted(#[from] HookAbort),
}
