//! 传输相关 trait：钩子接口，供传输器领域模块调用。

use async_trait::async_trait;

/// 钩子执行时请求中止传输时使用的错误。
#[derive(Debug, Clone)]
pub struct HookAbort;

impl std::fmt::Display for HookAbort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("传输被钩子中止")
    }
}

impl std::error::Error for HookAbort {}

/// 传输流程钩子：在「开始前 / 每块数据 / 进度 / 完成后」插入自定义逻辑。
///
/// 使用方式二选一（可混用）：
/// - **单阶段**：用 `with_before_start_hook` / `with_on_chunk_hook` / `with_on_progress_hook` / `with_after_complete_hook` 传入闭包；
/// - **完整钩子**：实现本 trait，通过传输器的 `with_hook` 注册。
#[async_trait]
pub trait TransferHook: Send + Sync {
    /// 传输开始前调用（如：校验目的地）。返回 `Err` 则中止本次传输。
    async fn before_start(&mut self) -> Result<(), HookAbort> {
        Ok(())
    }

    /// 每收到一段数据时调用。`chunk` 为本段字节。
    fn on_chunk(&mut self, _chunk: &[u8]) {}

    /// 进度更新（累计已传输字节、总大小）。由传输器在每块写入后调用。
    fn on_progress(&mut self, _bytes_done: u64, _total: Option<u64>) {}

    /// 传输成功结束后调用（清理、收尾输出等）。
    async fn after_complete(&mut self) {}
}
