/// 内部导出的模块
mod internal;


/// 导出核心入口函数
pub use internal::entrance::download_course::*;
pub use internal::entrance::options::*;

pub mod auth {
    use crate::internal;
    pub use internal::auth::functions::extract_nonce::*;
    pub use internal::auth::structs::auth_error::{AuthError, NonceParseError};
    pub use internal::auth::structs::portal_auth::PortalAuth;
}

/// 对外提供课程目录访问能力，不能限制死在入口函数中，以防有人自己要用
pub mod catalog {
    pub mod functions {
        use crate::internal;
        pub use internal::catalog::functions::fetch_course::*;
    }

    pub mod structs {
        use crate::internal;
        pub use internal::catalog::structs::catalog_error::CatalogError;
        pub use internal::catalog::structs::course_catalog::*;
        pub use internal::catalog::structs::download_queue::DownloadQueue;
    }
}

pub mod states {
    use crate::internal;
    pub use internal::states::reactive_core::*;
}

pub mod lesson {
    use crate::internal;
    // 结构体模型
    pub use internal::lesson::structs::resolve_error::ResolveError;
    pub use internal::lesson::structs::resolve_retry::ResolveRetry;
    pub use internal::lesson::structs::resolved_source::ResolvedSource;
    // 媒体地址解析与文件名
    pub use internal::lesson::functions::lesson_filename::*;
    pub use internal::lesson::functions::resolve_source::*;
    // 传输器：类型与入口（以 lib 为中心，此处统一导出）
    pub use internal::lesson::transfer::structs::*;
    pub use internal::lesson::transfer::traits::*;
}

pub mod sink {
    use crate::internal;
    pub use internal::sink::structs::local_file_sink::LocalFileSink;
    pub use internal::sink::structs::remote_blob_sink::RemoteBlobSink;
    pub use internal::sink::structs::sink_choice::SinkChoice;
    pub use internal::sink::structs::sink_error::SinkError;
    pub use internal::sink::traits::storage_sink::{SinkStream, StorageSink};
}
