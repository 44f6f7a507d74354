//! UserService and request validation.

mod crud;
mod validation;
pub use crud::UserService;
pub use validation::RequestValidator;
