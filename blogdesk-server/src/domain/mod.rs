pub(crate) mod blog;
pub(crate) mod error;
pub(crate) mod session;
pub(crate) mod user;
