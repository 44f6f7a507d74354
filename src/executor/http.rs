//! `SqlExecutor` over the remote store's HTTP query endpoint.

use super::{SqlExecutor, StatementOutcome};
use crate::config::GatewayConfig;
use crate::error::ExecutionError;
use crate::sql::Statement;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
struct QueryRequest<'a> {
    query: &'a str,
    params: &'a [Value],
}

/// Posts `{query, params}` to `{base}/query` with a bearer token. Built once, shared by all handlers.
#[derive(Clone)]
pub struct HttpExecutor {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl HttpExecutor {
    pub fn new(config: &GatewayConfig) -> Result<Self, ExecutionError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ExecutionError::Transport(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self::with_client(client, &config.api_url, &config.api_key))
    }

    pub fn with_client(client: reqwest::Client, base_url: &str, api_key: &str) -> Self {
        HttpExecutor {
            client,
            endpoint: format!("{}/query", base_url.trim_end_matches('/')),
            api_key: api_key.to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send(&self, statement: &Statement) -> Result<StatementOutcome, ExecutionError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&QueryRequest {
                query: &statement.sql,
                params: &statement.params,
            })
            .send()
            .await
            .map_err(|e| ExecutionError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ExecutionError::Status {
                status: status.as_u16(),
                message: status_message(status, &text),
            });
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| ExecutionError::Malformed(e.to_string()))?;
        StatementOutcome::from_payload(payload)
    }
}

/// Prefer the remote's own `error`/`message` field, then the raw body, then the canonical reason.
fn status_message(status: reqwest::StatusCode, body: &str) -> String {
    if let Ok(Value::Object(obj)) = serde_json::from_str::<Value>(body) {
        for key in ["error", "message"] {
            if let Some(Value::String(m)) = obj.get(key) {
                return m.clone();
            }
        }
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }
    status.canonical_reason().unwrap_or("unknown status").to_string()
}

#[async_trait]
impl SqlExecutor for HttpExecutor {
    async fn execute(&self, statement: &Statement) -> Result<StatementOutcome, ExecutionError> {
        tracing::debug!(sql = %statement.sql, params = ?statement.params, "query");
        let result = self.send(statement).await;
        if let Err(e) = &result {
            tracing::error!(error = %e, sql = %statement.sql, "SQL execution error");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::{insert_user, select_users};
    use axum::{
        extract::State,
        http::{HeaderMap, StatusCode},
        routing::post,
        Json, Router,
    };
    use serde_json::json;
    use std::sync::{Arc, Mutex};
    use tokio::net::TcpListener;

    #[derive(Clone, Default)]
    struct Captured {
        requests: Arc<Mutex<Vec<(Option<String>, Value)>>>,
    }

    /// Serve `reply` for every POST /query, recording the auth header and body.
    async fn stub_upstream(reply: (StatusCode, String)) -> (String, Captured) {
        let captured = Captured::default();
        let app = Router::new()
            .route(
                "/query",
                post(
                    move |State(c): State<Captured>, headers: HeaderMap, Json(body): Json<Value>| {
                        let reply = reply.clone();
                        async move {
                            let auth = headers
                                .get("authorization")
                                .and_then(|v| v.to_str().ok())
                                .map(str::to_string);
                            c.requests.lock().unwrap().push((auth, body));
                            (reply.0, [("content-type", "application/json")], reply.1)
                        }
                    },
                ),
            )
            .with_state(captured.clone());
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{}/", addr), captured)
    }

    fn executor(base: &str) -> HttpExecutor {
        HttpExecutor::with_client(reqwest::Client::new(), base, "test-token")
    }

    #[test]
    fn endpoint_appends_query_once() {
        assert_eq!(executor("https://db.example/").endpoint(), "https://db.example/query");
        assert_eq!(executor("https://db.example").endpoint(), "https://db.example/query");
    }

    #[tokio::test]
    async fn sends_query_params_and_bearer_token() {
        let (base, captured) = stub_upstream((StatusCode::OK, json!({"rows_affected": 1}).to_string())).await;
        let out = executor(&base).execute(&insert_user("Ada", "ada@x.com")).await.unwrap();
        assert_eq!(out.rows_affected, Some(1));

        let requests = captured.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        let (auth, body) = &requests[0];
        assert_eq!(auth.as_deref(), Some("Bearer test-token"));
        assert_eq!(body["query"], r#"INSERT INTO "users" ("name", "email") VALUES (?, ?)"#);
        assert_eq!(body["params"], json!(["Ada", "ada@x.com"]));
    }

    #[tokio::test]
    async fn empty_params_are_sent_as_empty_array() {
        let (base, captured) = stub_upstream((StatusCode::OK, "[]".into())).await;
        let out = executor(&base).execute(&select_users()).await.unwrap();
        assert!(out.rows.is_empty());
        assert_eq!(captured.requests.lock().unwrap()[0].1["params"], json!([]));
    }

    #[tokio::test]
    async fn non_success_status_is_status_error() {
        let (base, _) = stub_upstream((
            StatusCode::UNAUTHORIZED,
            json!({"error": "invalid token"}).to_string(),
        ))
        .await;
        let err = executor(&base).execute(&select_users()).await.unwrap_err();
        match err {
            ExecutionError::Status { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "invalid token");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_json_success_body_is_malformed() {
        let (base, _) = stub_upstream((StatusCode::OK, "<html>".into())).await;
        let err = executor(&base).execute(&select_users()).await.unwrap_err();
        assert!(matches!(err, ExecutionError::Malformed(_)));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let err = executor(&format!("http://{}", addr))
            .execute(&select_users())
            .await
            .unwrap_err();
        assert!(matches!(err, ExecutionError::Transport(_)));
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn status_message_falls_back_to_reason() {
        assert_eq!(status_message(reqwest::StatusCode::BAD_GATEWAY, ""), "Bad Gateway");
        assert_eq!(status_message(reqwest::StatusCode::BAD_GATEWAY, "upstream down"), "upstream down");
    }
}
