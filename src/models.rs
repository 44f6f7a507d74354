//! The users entity as exposed over HTTP.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored user. `id` is assigned by the remote store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Ada")]
    pub name: String,
    #[schema(example = "ada@x.com")]
    pub email: String,
}

/// Request body for create and update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserInput {
    #[schema(example = "Ada")]
    pub name: String,
    #[schema(example = "ada@x.com")]
    pub email: String,
}
