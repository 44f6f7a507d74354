//! OpenAPI document generated from the handler annotations, served with Swagger UI.

use crate::error::ErrorBody;
use crate::executor::StatementOutcome;
use crate::models::{User, UserInput};
use crate::response::MessageResult;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Turso Mini CRUD API",
        description = "A simple CRUD API using Turso as the database"
    ),
    paths(
        crate::handlers::users::create,
        crate::handlers::users::list,
        crate::handlers::users::update,
        crate::handlers::users::delete,
    ),
    components(schemas(User, UserInput, MessageResult, StatementOutcome, ErrorBody)),
    tags((name = "users", description = "Create, list, update and delete users"))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_users_route() {
        let doc = ApiDoc::openapi();
        let users = doc.paths.paths.get("/users").expect("/users documented");
        assert!(users.get.is_some());
        assert!(users.post.is_some());
        let by_id = doc.paths.paths.get("/users/{id}").expect("/users/{id} documented");
        assert!(by_id.put.is_some());
        assert!(by_id.delete.is_some());
    }

    #[test]
    fn registers_schemas_and_title() {
        let doc = ApiDoc::openapi();
        assert_eq!(doc.info.title, "Turso Mini CRUD API");
        let schemas = doc.components.expect("components").schemas;
        for name in ["User", "UserInput", "MessageResult", "StatementOutcome", "ErrorBody"] {
            assert!(schemas.contains_key(name), "missing schema {name}");
        }
    }
}
