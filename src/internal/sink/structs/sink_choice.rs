//! 存储汇的配置期选择。

use std::path::PathBuf;

use crate::internal::auth::structs::portal_auth::PortalAuth;
use crate::internal::sink::structs::local_file_sink::LocalFileSink;
use crate::internal::sink::structs::remote_blob_sink::RemoteBlobSink;
use crate::internal::sink::structs::sink_error::SinkError;
use crate::internal::sink::traits::storage_sink::StorageSink;

/// 默认本地保存根目录名（位于用户下载目录下）
const DEFAULT_DOWNLOAD_DIR: &str = "course_dl";

/// 写入目的地的配置期选择；课程 slug 确定后再实化为具体的汇。
///
/// 写入侧只面向 [`StorageSink`] 契约，不再按布尔分支走两套 API。
#[derive(Debug, Clone)]
pub enum SinkChoice {
    /// 本地文件系统：`{download_root}/{课程 slug}/`；`download_root`
    /// 缺省时取用户下载目录（再缺省取当前目录）下的 `course_dl`
    Local { download_root: Option<PathBuf> },
    /// 远端对象存储：调用方托管的上传端点 + 可选父目录 id
    RemoteBlob {
        endpoint: String,
        parent: Option<String>,
    },
}

impl Default for SinkChoice {
    fn default() -> Self {
        Self::Local {
            download_root: None,
        }
    }
}

impl SinkChoice {
    /// 按课程 slug 实化出具体的存储汇。
    pub fn build(
        &self,
        auth: &PortalAuth,
        course_slug: &str,
    ) -> Result<Box<dyn StorageSink>, SinkError> {
        match self {
            Self::Local { download_root } => {
                let root = download_root.clone().unwrap_or_else(|| {
                    dirs::download_dir()
                        .unwrap_or_else(|| PathBuf::from("."))
                        .join(DEFAULT_DOWNLOAD_DIR)
                });
                Ok(Box::new(LocalFileSink::new(root.join(course_slug))))
            }
            Self::RemoteBlob { endpoint, parent } => Ok(Box::new(RemoteBlobSink::new(
                auth.client.clone(),
                endpoint,
                parent.clone(),
            )?)),
        }
    }
}
