//! 本地文件系统存储汇。

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;

use crate::internal::sink::structs::sink_error::SinkError;
use crate::internal::sink::traits::storage_sink::{SinkStream, StorageSink};

/// 本地文件汇：所有文件写入同一个根目录（按课程 slug 命名）。
///
/// 首次 `open` 时确保目录存在；跨多个队列项复用也只建一次目录。
#[derive(Debug)]
pub struct LocalFileSink {
    dir: PathBuf,
    dir_ready: AtomicBool,
}

impl LocalFileSink {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            dir_ready: AtomicBool::new(false),
        }
    }

    /// 保存根目录。
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl StorageSink for LocalFileSink {
    async fn open(&self, filename: &str) -> Result<Box<dyn SinkStream>, SinkError> {
        if !self.dir_ready.load(Ordering::Relaxed) {
            fs::create_dir_all(&self.dir)
                .await
                .map_err(SinkError::CreateDir)?;
            self.dir_ready.store(true, Ordering::Relaxed);
        }

        let path = self.dir.join(filename);
        let file = File::create(&path).await.map_err(SinkError::CreateFile)?;

        tracing::debug!(path = %path.display(), "本地写入流已打开");
        Ok(Box::new(LocalFileStream { file }))
    }
}

/// 单个文件的写入流。
struct LocalFileStream {
    file: File,
}

#[async_trait]
impl SinkStream for LocalFileStream {
    async fn write(&mut self, chunk: &[u8]) -> Result<(), SinkError> {
        self.file
            .write_all(chunk)
            .await
            .map_err(SinkError::WriteFile)
    }

    async fn finish(mut self: Box<Self>) -> Result<(), SinkError> {
        self.file.flush().await.map_err(SinkError::FlushFile)
    }
}
