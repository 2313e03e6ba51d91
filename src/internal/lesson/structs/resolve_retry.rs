use std::time::Duration;

/// 默认最大尝试次数（含首次请求）
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// 默认退避基准延迟（毫秒）
pub const DEFAULT_BASE_DELAY_MS: u64 = 500;

/// 默认退避延迟上限（秒）
pub const DEFAULT_MAX_DELAY_SECS: u64 = 30;

/// 媒体地址解析的有界重试策略：指数退避，带上限。
///
/// 服务端在转码尚未就绪时会返回不含 url 的响应体，此时按本策略
/// 退避后重试；次数耗尽则向上返回
/// [`ResolveError::Exhausted`](super::resolve_error::ResolveError::Exhausted)。
#[derive(Debug, Clone, Copy)]
pub struct ResolveRetry {
    /// 最大尝试次数（含首次）
    pub max_attempts: u32,
    /// 退避基准延迟
    pub base_delay: Duration,
    /// 退避延迟上限
    pub max_delay: Duration,
}

impl Default for ResolveRetry {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay: Duration::from_millis(DEFAULT_BASE_DELAY_MS),
            max_delay: Duration::from_secs(DEFAULT_MAX_DELAY_SECS),
        }
    }
}

impl ResolveRetry {
    /// 第 `attempt` 次（1 基）失败后的退避延迟：base * 2^(attempt-1)，封顶 max_delay。
    pub fn backoff(&self, attempt: u32) -> Duration {
        let exp = 1u32 << attempt.saturating_sub(1).min(16);
        self.base_delay.saturating_mul(exp).min(self.max_delay)
    }
}
