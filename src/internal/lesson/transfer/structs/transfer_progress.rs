/// 传输进度：响应式状态，记录已传输字节数；总大小来自响应的
/// Content-Length（可能未知）。
///
/// 调用方通过传输器的 `progress()` 读取或监听；进度比例可用
/// [`TransferProgress::pct`] 获取。传输结束后即丢弃，不跨条目复用。
#[derive(Debug, Clone, Default)]
pub struct TransferProgress {
    /// 已传输的字节数
    pub bytes_done: u64,
    /// 文件总大小（字节），未知时为 `None`
    pub total: Option<u64>,
}

impl TransferProgress {
    /// 进度百分比（0～100）；总大小为 0 或未知时返回 `f64::NAN`。
    pub fn pct(&self) -> f64 {
        self.total
            .filter(|&t| t > 0)
            .map(|t| (self.bytes_done as f64 / t as f64) * 100.0)
            .unwrap_or(f64::NAN)
    }
}
