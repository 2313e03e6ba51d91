//! 单条目流式传输的实际执行。

use futures_util::StreamExt;

use crate::internal::lesson::structs::resolved_source::ResolvedSource;
use crate::internal::lesson::transfer::structs::transfer_error::TransferError;
use crate::internal::lesson::transfer::structs::transfer_hooks_container::TransferHooksContainer;
use crate::internal::lesson::transfer::structs::transfer_progress::TransferProgress;
use crate::internal::lesson::transfer::structs::transfer_report::TransferReport;
use crate::internal::sink::traits::storage_sink::StorageSink;
use crate::internal::states::reactive_core::ReactiveProperty;

/// 整文件 GET，流式写入存储汇并更新进度。
pub(super) async fn run_transfer(
    client: &reqwest::Client,
    source: ResolvedSource,
    filename: String,
    mut hooks: TransferHooksContainer,
    progress: ReactiveProperty<TransferProgress>,
    sink: &dyn StorageSink,
) -> Result<TransferReport, TransferError> {
    hooks.run_before_start().await?;

    let resp = client.get(&source.url).send().await?.error_for_status()?;
    let total = resp.content_length();
    let _ = progress.update(TransferProgress {
        bytes_done: 0,
        total,
    });

    let mut out = sink.open(&filename).await?;
    let mut stream = resp.bytes_stream();
    let mut bytes_done: u64 = 0;

    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result?;
        bytes_done += chunk.len() as u64;

        out.write(&chunk).await?;

        hooks.run_on_chunk(&chunk);
        hooks.run_on_progress(bytes_done, total);

        let _ = progress.update(TransferProgress { bytes_done, total });
    }

    // finish 即写入流的终态确认；未确认前不得视为完成
    out.finish().await?;

    hooks.run_after_complete().await;

    tracing::info!(%filename, bytes = bytes_done, "课时传输完成");

    Ok(TransferReport {
        filename,
        bytes_done,
    })
}
