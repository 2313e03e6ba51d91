//! 目录相关错误类型。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP 请求失败: {0}")]
    Request(#[from] reqwest::Error),

    #[error("目录端点返回异常状态 HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("目录响应体解析失败: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("目录地址非法: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
