//! 远端对象存储汇：把字节流上传到调用方托管的 blob 端点。

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Body, Client};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_stream::wrappers::ReceiverStream;
use url::Url;

use crate::internal::sink::structs::sink_error::SinkError;
use crate::internal::sink::traits::storage_sink::{SinkStream, StorageSink};

/// 上传通道的缓冲块数；写入侧超过时会等待上传侧消费
const UPLOAD_CHANNEL_CAPACITY: usize = 16;

/// 远端 blob 汇：`open` 即发起一次流式上传请求，`finish` 等待服务端确认。
///
/// 端点约定：POST `{endpoint}?filename={名}&parent={父目录 id}`，请求体为
/// 原始字节流；2xx 视为上传成功。
#[derive(Debug)]
pub struct RemoteBlobSink {
    client: Client,
    endpoint: Url,
    parent: Option<String>,
}

impl RemoteBlobSink {
    pub fn new(
        client: Client,
        endpoint: &str,
        parent: Option<String>,
    ) -> Result<Self, SinkError> {
        Ok(Self {
            client,
            endpoint: Url::parse(endpoint)?,
            parent,
        })
    }
}

#[async_trait]
impl StorageSink for RemoteBlobSink {
    async fn open(&self, filename: &str) -> Result<Box<dyn SinkStream>, SinkError> {
        let mut url = self.endpoint.clone();
        {
            let mut qs = url.query_pairs_mut();
            qs.append_pair("filename", filename);
            if let Some(parent) = &self.parent {
                qs.append_pair("parent", parent);
            }
        }

        let (tx, rx) = mpsc::channel::<Result<Bytes, std::io::Error>>(UPLOAD_CHANNEL_CAPACITY);
        let body = Body::wrap_stream(ReceiverStream::new(rx));

        // 上传请求与写入并行推进：写入侧喂通道，这里消费通道发请求体
        let client = self.client.clone();
        let upload: JoinHandle<Result<reqwest::Response, reqwest::Error>> =
            tokio::spawn(async move { client.post(url).body(body).send().await });

        tracing::debug!(%filename, "远端上传流已打开");
        Ok(Box::new(RemoteBlobStream { tx: Some(tx), upload }))
    }
}

/// 单次上传的写入流。
struct RemoteBlobStream {
    /// `finish` 时置 `None` 关闭通道，通知上传侧请求体结束
    tx: Option<mpsc::Sender<Result<Bytes, std::io::Error>>>,
    upload: JoinHandle<Result<reqwest::Response, reqwest::Error>>,
}

#[async_trait]
impl SinkStream for RemoteBlobStream {
    async fn write(&mut self, chunk: &[u8]) -> Result<(), SinkError> {
        let tx = self.tx.as_ref().ok_or(SinkError::UploadChannelClosed)?;
        tx.send(Ok(Bytes::copy_from_slice(chunk)))
            .await
            .map_err(|_| SinkError::UploadChannelClosed)
    }

    async fn finish(mut self: Box<Self>) -> Result<(), SinkError> {
        // 关闭发送端，上传请求体随之收尾
        self.tx.take();

        let res = self.upload.await??;
        let status = res.status();
        if !status.is_success() {
            return Err(SinkError::UploadRejected(status));
        }
        Ok(())
    }
}
