pub mod auth;
pub mod download_queue;
pub mod lesson_filename;
pub mod live;
pub mod sink;
