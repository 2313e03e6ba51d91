/// 一次解析得到的可播放媒体地址。
///
/// 每个队列项解析一次、立即消费，从不缓存。`format` 可能与请求值不同
/// （服务端回退转码时会纠正格式）。
#[derive(Debug, Clone)]
pub struct ResolvedSource {
    pub url: String,
    pub format: String,
    pub resolution: u32,
}
