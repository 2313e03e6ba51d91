pub(crate) mod lesson_filename;
pub(crate) mod resolve_source;
