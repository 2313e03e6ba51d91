/// 单个课时传输完成后的回执。
#[derive(Debug, Clone)]
pub struct TransferReport {
    /// 实际落盘/上传使用的展示文件名
    pub filename: String,
    /// 传输的总字节数
    pub bytes_done: u64,
}
