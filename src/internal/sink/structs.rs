pub(crate) mod local_file_sink;
pub(crate) mod remote_blob_sink;
pub(crate) mod sink_choice;
pub(crate) mod sink_error;
