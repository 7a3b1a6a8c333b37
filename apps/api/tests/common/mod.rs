//! Shared fixtures for integration tests
//!
//! Builds the real router over in-memory stores, with recording fakes in
//! place of the completion and search backends.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use promptdeck_api::api::{routes, state::AppState};
use promptdeck_api::auth::jwt::create_token;
use promptdeck_api::domain::repositories::user_repository::{NewUser, UserRepository};
use promptdeck_api::domain::services::{
    CompletionClient, CompletionError, TemplateProcessor, WebSearch,
};
use promptdeck_api::domain::user::value_objects::Username;
use promptdeck_api::infrastructure::repositories::{
    InMemoryPromptRepository, InMemoryUserRepository,
};
use serde_json::Value;
use tower::util::ServiceExt; // for oneshot

pub const TEST_SECRET: &str = "integration-test-secret";

/// Records every prompt it receives; optionally fails every call
#[derive(Default)]
pub struct FakeCompletion {
    pub prompts: Mutex<Vec<String>>,
    pub fail_with: Option<String>,
}

#[async_trait]
impl CompletionClient for FakeCompletion {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.fail_with {
            Some(message) => Err(CompletionError::Api(message.clone())),
            None => Ok(format!("echo: {}", prompt)),
        }
    }
}

/// Records every query and answers with a fixed digest
#[derive(Default)]
pub struct FakeSearch {
    pub queries: Mutex<Vec<String>>,
}

#[async_trait]
impl WebSearch for FakeSearch {
    async fn search(&self, query: &str) -> String {
        self.queries.lock().unwrap().push(query.to_string());
        format!("results for {}", query)
    }
}

pub struct TestApp {
    pub app: Router,
    pub users: Arc<InMemoryUserRepository>,
    pub completion: Arc<FakeCompletion>,
    pub search: Arc<FakeSearch>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_completion(FakeCompletion::default())
    }

    /// App whose completion backend always fails with `message`
    pub fn failing(message: &str) -> Self {
        Self::with_completion(FakeCompletion {
            prompts: Mutex::new(Vec::new()),
            fail_with: Some(message.to_string()),
        })
    }

    fn with_completion(completion: FakeCompletion) -> Self {
        let users = Arc::new(InMemoryUserRepository::new());
        let completion = Arc::new(completion);
        let search = Arc::new(FakeSearch::default());

        let processor = Arc::new(TemplateProcessor::new(completion.clone(), search.clone()));
        let state = AppState::new(
            users.clone(),
            Arc::new(InMemoryPromptRepository::new()),
            processor,
            TEST_SECRET,
        );

        Self {
            app: routes::router(state),
            users,
            completion,
            search,
        }
    }

    /// Creates a user directly in the store and returns (id, bearer token)
    pub async fn user_token(&self, username: &str, is_admin: bool) -> (i64, String) {
        let user = self
            .users
            .create(NewUser {
                username: Username::new(username).unwrap(),
                password_hash: "not-used".to_string(),
            })
            .await
            .unwrap();

        if is_admin {
            self.users.set_admin(user.id, true).await.unwrap();
        }

        (user.id, create_token(user.id, TEST_SECRET).unwrap())
    }

    pub async fn admin_token(&self) -> String {
        self.user_token("admin", true).await.1
    }

    pub fn completion_prompts(&self) -> Vec<String> {
        self.completion.prompts.lock().unwrap().clone()
    }

    pub fn search_queries(&self) -> Vec<String> {
        self.search.queries.lock().unwrap().clone()
    }

    /// Sends one request; the body is parsed as JSON when possible
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {}", token));
        }

        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&json).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        (status, value)
    }
}
