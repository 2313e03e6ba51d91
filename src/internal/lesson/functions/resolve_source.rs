//! 把课时的抽象解析端点 + 期望画质换成具体可播放地址。

use serde::Deserialize;
use url::Url;

use crate::internal::auth::structs::portal_auth::PortalAuth;
use crate::internal::lesson::structs::resolve_error::ResolveError;
use crate::internal::lesson::structs::resolve_retry::ResolveRetry;
use crate::internal::lesson::structs::resolved_source::ResolvedSource;

/// 解析端点的固定子路径
const SOURCE_PATH: &str = "/source";

/// 解析端点的响应体；转码未就绪时 `url` 缺失。
#[derive(Debug, Deserialize)]
struct SourceBody {
    #[serde(default)]
    url: Option<String>,
    /// 服务端回退转码时会纠正格式
    #[serde(default)]
    format: Option<String>,
}

/// 解析课时的可播放媒体地址。
///
/// GET `{source_base}/source?r={resolution}&f={format}`；响应体不含 url 时
/// 按 [`ResolveRetry`] 指数退避重试，次数耗尽返回
/// [`ResolveError::Exhausted`]。首个响应就带 url 时只发一次请求。
///
/// 传输层错误不重试，直接向上传播。
pub async fn resolve_source(
    auth: &PortalAuth,
    source_base: &str,
    resolution: u32,
    format: &str,
    retry: &ResolveRetry,
) -> Result<ResolvedSource, ResolveError> {
    let url = Url::parse(&format!("{}{SOURCE_PATH}", source_base.trim_end_matches('/')))?;

    let mut attempt: u32 = 0;
    loop {
        attempt += 1;

        let res = auth
            .client
            .get(url.clone())
            .query(&[("r", resolution.to_string()), ("f", format.to_string())])
            .send()
            .await?;

        let body: SourceBody = res.json().await.map_err(ResolveError::Request)?;

        if let Some(media_url) = body.url {
            return Ok(ResolvedSource {
                url: media_url,
                format: body.format.unwrap_or_else(|| format.to_string()),
                resolution,
            });
        }

        if attempt >= retry.max_attempts {
            return Err(ResolveError::Exhausted { attempts: attempt });
        }

        let delay = retry.backoff(attempt);
        tracing::debug!(
            attempt,
            delay_ms = delay.as_millis() as u64,
            "响应体暂无媒体地址，退避后重试"
        );
        tokio::time::sleep(delay).await;
    }
}
