//! 从登录页 HTML 中提取 nonce（防伪令牌）。

use std::sync::OnceLock;

use regex::Regex;

use crate::internal::auth::structs::auth_error::NonceParseError;

/// 登录表单中隐藏字段的固定形态：`name="nonce" value="(令牌)"`
const NONCE_PATTERN: &str = r#"name="nonce" value="(\w+)""#;

fn nonce_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(NONCE_PATTERN).expect("nonce 正则非法"))
}

/// 从登录页原始 HTML 中提取 nonce 令牌。
///
/// 纯函数，无副作用；页面结构变化（找不到隐藏字段）时返回 [`NonceParseError`]。
///
/// - 注意：令牌是一次性的，每次登录尝试前都应重新拉取登录页再提取
pub fn extract_nonce(html: &str) -> Result<String, NonceParseError> {
    nonce_regex()
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or(NonceParseError::FieldMissing)
}
