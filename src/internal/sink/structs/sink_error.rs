//! 存储汇相关错误类型。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("创建保存目录失败: {0}")]
    CreateDir(std::io::Error),

    #[error("创建文件失败: {0}")]
    CreateFile(std::io::Error),

    #[error("写入文件失败: {0}")]
    WriteFile(tokio::io::Error),

    #[error("刷新文件失败: {0}")]
    FlushFile(tokio::io::Error),

    #[error("上传请求失败: {0}")]
    Upload(#[from] reqwest::Error),

    #[error("上传被拒绝，服务端返回 HTTP {0}")]
    UploadRejected(reqwest::StatusCode),

    #[error("上传通道已关闭")]
    UploadChannelClosed,

    #[error("上传任务失败: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),

    #[error("上传端点地址非法: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}
