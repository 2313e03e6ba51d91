//! 存储汇 trait：本地磁盘与远端对象存储的统一写入契约。
//!
//! 传输器只面向本契约写入，不关心目的地形态；具体变体在配置期由
//! [`SinkChoice`](crate::internal::sink::structs::sink_choice::SinkChoice) 选定。

use async_trait::async_trait;

use crate::internal::sink::structs::sink_error::SinkError;

/// 写入目的地：`open(filename)` 打开一条专属写入流。
///
/// 同一个汇可被多个队列项依次复用（顺序消费，一次只开一条流）。
#[async_trait]
pub trait StorageSink: Send + Sync {
    /// 为给定展示文件名打开写入流。
    async fn open(&self, filename: &str) -> Result<Box<dyn SinkStream>, SinkError>;
}

/// 一条进行中的写入流：逐块写入，最后必须显式 `finish`。
///
/// `finish` 成功返回即等价于 `finish` 事件：数据已完整落到目的地；
/// 中途任何 `Err` 都表示本条流已失效，不得继续写入。
#[async_trait]
pub trait SinkStream: Send {
    /// 写入一段字节。
    async fn write(&mut self, chunk: &[u8]) -> Result<(), SinkError>;

    /// 结束写入并等待目的地确认。
    async fn finish(self: Box<Self>) -> Result<(), SinkError>;
}
