//! 媒体地址解析错误类型。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("HTTP 请求失败: {0}")]
    Request(#[from] reqwest::Error),

    #[error("解析端点地址非法: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// 重试次数耗尽仍未拿到可播放地址。
    #[error("已尝试 {attempts} 次仍未解析出媒体地址")]
    Exhausted { attempts: u32 },
}
