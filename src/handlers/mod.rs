//! HTTP handlers for users CRUD.

pub mod users;
pub use users::*;
