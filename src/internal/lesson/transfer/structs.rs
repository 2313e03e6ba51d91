pub mod hook_adapters;
pub mod lesson_transfer;
pub mod transfer_error;
pub mod transfer_hooks_container;
pub mod transfer_progress;
pub mod transfer_report;

// 重导出公共类型
pub use lesson_transfer::LessonTransfer;
pub use transfer_error::TransferError;
pub use transfer_hooks_container::TransferHooksContainer;
pub use transfer_progress::TransferProgress;
pub use transfer_report::TransferReport;
