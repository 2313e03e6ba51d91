pub(crate) mod resolve_error;
pub(crate) mod resolve_retry;
pub(crate) mod resolved_source;
