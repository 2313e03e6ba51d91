pub(crate) mod storage_sink;
