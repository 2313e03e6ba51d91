//! 本库主入口：认证后一键下载整门课程。

use std::io::Write;

use thiserror::Error;

use crate::internal::auth::structs::portal_auth::PortalAuth;
use crate::internal::catalog::functions::fetch_course::fetch_course;
use crate::internal::catalog::structs::catalog_error::CatalogError;
use crate::internal::catalog::structs::download_queue::DownloadQueue;
use crate::internal::entrance::options::CourseDownloadOptions;
use crate::internal::lesson::functions::resolve_source::resolve_source;
use crate::internal::lesson::structs::resolve_error::ResolveError;
use crate::internal::lesson::transfer::structs::lesson_transfer::LessonTransfer;
use crate::internal::lesson::transfer::structs::transfer_error::TransferError;
use crate::internal::lesson::transfer::structs::transfer_report::TransferReport;
use crate::internal::sink::structs::sink_error::SinkError;

/// 课程下载的顶层错误：逐项失败会携带出错课时的 id。
#[derive(Debug, Error)]
pub enum CourseError {
    #[error("获取课程目录失败: {0}")]
    Catalog(#[from] CatalogError),

    #[error("初始化存储汇失败: {0}")]
    Sink(#[from] SinkError),

    #[error("目录中缺少课时 {0} 的元数据")]
    MissingLesson(String),

    #[error("课时 {lesson_id} 媒体地址解析失败: {source}")]
    Resolve {
        lesson_id: String,
        source: ResolveError,
    },

    #[error("课时 {lesson_id} 传输失败: {source}")]
    Transfer {
        lesson_id: String,
        source: TransferError,
    },
}

/// 一次课程下载的汇总回执。
#[derive(Debug)]
pub struct CourseReport {
    pub slug: String,
    pub title: String,
    /// 按队列顺序排列的逐课时回执
    pub transfers: Vec<TransferReport>,
}

/// 下载整门课程：目录获取 → 队列（跳过前缀）→ 逐项「解析 → 传输」。
///
/// 严格顺序消费：上一项的写入流确认 finish 之后，才开始下一项的地址
/// 解析；产出顺序与课时顺序一致。任一项失败即中止整次运行并带出
/// 课时 id（队列状态不被破坏，幂等重跑可用 `skip` 续接）。
///
/// 必须在 [`PortalAuth::login`] 成功之后调用。
pub async fn download_course(
    auth: &PortalAuth,
    course_slug: &str,
    options: &CourseDownloadOptions,
) -> Result<CourseReport, CourseError> {
    let catalog = fetch_course(auth, course_slug).await?;

    let mut queue = DownloadQueue::from_catalog(&catalog);
    queue.skip(options.skip);
    tracing::info!(
        course = %catalog.slug,
        skipped = options.skip,
        remaining = queue.len(),
        "开始消费下载队列"
    );

    let sink = options.sink.build(auth, &catalog.slug)?;

    let mut transfers = Vec::with_capacity(queue.len());

    // 显式循环消费队列，避免递归推进带来的调用栈增长
    while let Some(lesson_id) = queue.pop() {
        let lesson = catalog
            .lesson(&lesson_id)
            .ok_or_else(|| CourseError::MissingLesson(lesson_id.clone()))?;

        let source = resolve_source(
            auth,
            &lesson.source_base,
            options.resolution,
            &options.format,
            &options.resolve_retry,
        )
        .await
        .map_err(|source| CourseError::Resolve {
            lesson_id: lesson_id.clone(),
            source,
        })?;

        let mut transfer = LessonTransfer::new(auth, lesson, source);

        if options.echo_progress {
            let label = transfer.filename().to_string();
            transfer = transfer
                .with_on_progress_hook(move |bytes_done, _total| {
                    print!("\r{label}: {bytes_done} bytes downloaded ");
                    let _ = std::io::stdout().flush();
                })
                .with_after_complete_hook(|| async {
                    println!();
                });
        }

        let report = transfer.send(&*sink).await.map_err(|source| {
            CourseError::Transfer {
                lesson_id: lesson_id.clone(),
                source,
            }
        })?;

        transfers.push(report);
    }

    tracing::info!(
        course = %catalog.slug,
        lessons = transfers.len(),
        "课程下载完成"
    );

    Ok(CourseReport {
        slug: catalog.slug.clone(),
        title: catalog.title.clone(),
        transfers,
    })
}
