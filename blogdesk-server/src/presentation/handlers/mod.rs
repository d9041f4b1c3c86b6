pub(crate) mod auth;
pub(crate) mod blogs;
pub(crate) mod users;
