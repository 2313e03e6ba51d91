//! 一次课程下载的配置面。

use crate::internal::lesson::structs::resolve_retry::ResolveRetry;
use crate::internal::sink::structs::sink_choice::SinkChoice;

/// 默认目标媒体容器
pub const DEFAULT_FORMAT: &str = "webm";

/// 默认目标画质
pub const DEFAULT_RESOLUTION: u32 = 720;

/// 本次课程下载的配置。
#[derive(Debug, Clone)]
pub struct CourseDownloadOptions {
    /// 目标媒体容器（webm / mp4）；服务端可能回退纠正
    pub format: String,
    /// 目标画质（720 / 1080）
    pub resolution: u32,
    /// 丢弃队首的课时数（跳过已下载的前缀）
    pub skip: usize,
    /// 媒体地址解析的重试策略
    pub resolve_retry: ResolveRetry,
    /// 写入目的地选择
    pub sink: SinkChoice,
    /// 是否在标准输出上逐块覆写单行进度（原地 `\r` 刷新）
    pub echo_progress: bool,
}

impl Default for CourseDownloadOptions {
    fn default() -> Self {
        Self {
            format: DEFAULT_FORMAT.to_string(),
            resolution: DEFAULT_RESOLUTION,
            skip: 0,
            resolve_retry: ResolveRetry::default(),
            sink: SinkChoice::default(),
            echo_progress: true,
        }
    }
}
