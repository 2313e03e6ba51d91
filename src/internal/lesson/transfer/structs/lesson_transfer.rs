//! 课时传输器
//!
//! 把已解析的媒体地址流式写入任意 [`StorageSink`]，逐块上报进度。
//!
//! ## 功能特性
//!
//! - **流式写入**：整文件 GET，逐块写入存储汇，内存占用与文件大小无关
//! - **响应式进度**：通过 `progress()` 获取可监听的传输进度状态
//! - **钩子机制**：支持在传输各阶段插入自定义逻辑（开始前、每块数据、进度更新、完成后）
//! - **目的地无关**：本地磁盘与远端对象存储走同一条写入契约
//!
//! ## 使用示例
//!
//! ```rust,no_run
//! # use course_dl::auth::PortalAuth;
//! # use course_dl::catalog::structs::LessonMeta;
//! # use course_dl::lesson::ResolvedSource;
//! # use course_dl::lesson::LessonTransfer;
//! # use course_dl::sink::StorageSink;
//! # async fn example(auth: PortalAuth, lesson: LessonMeta, source: ResolvedSource, sink: Box<dyn StorageSink>) -> Result<(), Box<dyn std::error::Error>> {
//! let report = LessonTransfer::new(&auth, &lesson, source)
//!     .with_on_progress_hook(|bytes_done, _total| {
//!         print!("\r{bytes_done} bytes");
//!     })
//!     .send(&*sink)
//!     .await?;
//! println!("{}：共 {} 字节", report.filename, report.bytes_done);
//! # Ok(())
//! # }
//! ```
//!
//! ## 内部实现说明
//!
//! - `run` 子模块：流式传输的实际执行
//! - 失败只影响当前条目：读侧/写侧任一出错都不会破坏队列状态

mod run;

use reqwest::Client;

use crate::internal::auth::structs::portal_auth::PortalAuth;
use crate::internal::catalog::structs::course_catalog::LessonMeta;
use crate::internal::lesson::functions::lesson_filename::lesson_filename;
use crate::internal::lesson::structs::resolved_source::ResolvedSource;
use crate::internal::lesson::transfer::traits::transfer_hook::{HookAbort, TransferHook};
use crate::internal::sink::traits::storage_sink::StorageSink;
use crate::internal::states::reactive_core::ReactiveProperty;

use super::hook_adapters;
use super::transfer_error::TransferError;
use super::transfer_hooks_container::TransferHooksContainer;
use super::transfer_progress::TransferProgress;
use super::transfer_report::TransferReport;

/// 课时传输器
///
/// 拥有响应式属性（通过 `progress()` 获取）：记录已传输大小（`bytes_done`），
/// 总大小（`total`）来自响应头。
pub struct LessonTransfer {
    pub(crate) client: Client,
    pub(crate) source: ResolvedSource,
    pub(crate) filename: String,
    pub(crate) hooks: TransferHooksContainer,
    pub(crate) progress_state: ReactiveProperty<TransferProgress>,
}

impl LessonTransfer {
    /// 创建专属于本课时的传输器；可链式配置后调用 [`LessonTransfer::send`] 执行传输。
    ///
    /// 展示文件名在此计算：`{两位 1 基序号}.{标题}.{实际格式}`（已清理非法字符）。
    pub fn new(auth: &PortalAuth, lesson: &LessonMeta, source: ResolvedSource) -> Self {
        let filename = lesson_filename(lesson, &source.format);
        let progress_state = ReactiveProperty::new(TransferProgress::default());

        Self {
            client: auth.client.clone(),
            source,
            filename,
            hooks: Default::default(),
            progress_state,
        }
    }

    /// 本次传输使用的展示文件名。
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// 注册「开始前」钩子；闭包返回 `Err(HookAbort)` 会中止本次传输。
    pub fn with_before_start_hook<F, Fut>(mut self, f: F) -> Self
    where
        F: FnMut() -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = Result<(), HookAbort>> + Send + 'static,
    {
        self.hooks.add(hook_adapters::BeforeStartHookAdapter(f));
        self
    }

    /// 注册「每块数据」钩子；参数为本段字节。
    pub fn with_on_chunk_hook<F>(mut self, f: F) -> Self
    where
        F: FnMut(&[u8]) + Send + Sync + 'static,
    {
        self.hooks.add(hook_adapters::OnChunkHookAdapter(f));
        self
    }

    /// 注册「进度」钩子；参数为已传输字节数、总大小（可能未知为 `None`）。
    pub fn with_on_progress_hook<F>(mut self, f: F) -> Self
    where
        F: FnMut(u64, Option<u64>) + Send + Sync + 'static,
    {
        self.hooks.add(hook_adapters::OnProgressHookAdapter(f));
        self
    }

    /// 注册「完成后」钩子；传输成功结束后调用。
    pub fn with_after_complete_hook<F, Fut>(mut self, f: F) -> Self
    where
        F: FnMut() -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = ()> + Send + 'static,
    {
        self.hooks.add(hook_adapters::AfterCompleteHookAdapter(f));
        self
    }

    /// 添加完整钩子，在传输各阶段插入逻辑。
    pub fn with_hook(mut self, hook: impl TransferHook + 'static) -> Self {
        self.hooks.add(hook);
        self
    }

    /// 内置的传输进度状态；返回可共享句柄，`.watch()` 后 `changed().await` 监听进度。
    pub fn progress(&self) -> ReactiveProperty<TransferProgress> {
        self.progress_state.clone()
    }

    /// 执行传输：写入流报告 finish 后才返回，队列消费方据此推进下一项。
    pub async fn send(
        self,
        sink: &dyn StorageSink,
    ) -> Result<TransferReport, TransferError> {
        run::run_transfer(
            &self.client,
            self.source,
            self.filename,
            self.hooks,
            self.progress_state,
            sink,
        )
        .await
    }
}
