pub(crate) mod catalog_error;
pub(crate) mod course_catalog;
pub(crate) mod download_queue;
