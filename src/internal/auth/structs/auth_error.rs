//! 认证相关错误类型。

use thiserror::Error;

/// 登录页解析失败（nonce 缺失或页面结构变化）。
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NonceParseError {
    #[error("登录页中未找到 nonce 隐藏字段")]
    FieldMissing,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("HTTP 请求失败: {0}")]
    Request(#[from] reqwest::Error),

    #[error("登录页解析失败: {0}")]
    Nonce(#[from] NonceParseError),

    /// 服务端仅在登录成功时返回 302 重定向，其余状态一律视为认证失败。
    #[error("认证被拒绝，服务端返回 HTTP {0}")]
    Rejected(reqwest::StatusCode),

    #[error("站点地址非法: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("构建 HTTP 客户端失败: {0}")]
    BuildClient(reqwest::Error),
}
