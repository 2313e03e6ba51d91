pub(crate) mod fetch_course;
