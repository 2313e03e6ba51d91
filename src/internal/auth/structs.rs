pub(crate) mod auth_error;
pub(crate) mod portal_auth;
