//! # Users collaborator
//!
//! [`UserDirectory`] is the client's view of the external users service. The
//! production implementation is [`HttpDirectory`], which speaks the mock REST
//! API:
//!
//! | Call | Request |
//! |------|---------|
//! | [`find_by_credentials`](UserDirectory::find_by_credentials) | `GET /users?email=E&password=P` |
//! | [`find_by_email`](UserDirectory::find_by_email) | `GET /users?email=E` |
//! | [`create`](UserDirectory::create) | `POST /users` with `{name, email, password, role}` |
//!
//! [`MemoryDirectory`] keeps records in process and is used by tests.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::de::DeserializeOwned;
use serde_json::Value;
use store::{NewUser, UserRecord};
use tracing::{debug, warn};

use crate::error::DirectoryError;

/// Async access to the users collaborator.
pub trait UserDirectory {
    /// Users whose email and password both match exactly.
    fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<Vec<UserRecord>, DirectoryError>>;

    /// Users registered under `email`.
    fn find_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Vec<UserRecord>, DirectoryError>>;

    /// Create a user and return the record the collaborator stored.
    fn create(&self, user: &NewUser) -> impl Future<Output = Result<UserRecord, DirectoryError>>;
}

/// HTTP client for the mock REST users endpoint.
#[derive(Clone, Debug)]
pub struct HttpDirectory {
    base_url: String,
    client: reqwest::Client,
}

impl HttpDirectory {
    /// Create a client for a collaborator at `base_url` (e.g. `http://localhost:3000`).
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<T, DirectoryError> {
        let response = req.send().await.map_err(DirectoryError::Transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::Status(status.as_u16()));
        }
        let body = response.text().await.map_err(DirectoryError::Transport)?;
        serde_json::from_str(&body).map_err(|e| DirectoryError::Decode(e.to_string()))
    }

    async fn execute_list(&self, req: reqwest::RequestBuilder) -> Result<Vec<UserRecord>, DirectoryError> {
        let values: Vec<Value> = self.execute(req).await?;
        Ok(decode_users(values))
    }
}

/// Decode listed records one by one, skipping any a session could not hold.
fn decode_users(values: Vec<Value>) -> Vec<UserRecord> {
    values
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<UserRecord>(value) {
            Ok(user) if user.is_complete() => Some(user),
            Ok(user) => {
                warn!(email = %user.email, "skipping user record without name or email");
                None
            }
            Err(e) => {
                warn!("skipping malformed user record: {e}");
                None
            }
        })
        .collect()
}

impl UserDirectory for HttpDirectory {
    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Vec<UserRecord>, DirectoryError> {
        debug!(email, "looking up user by credentials");
        let req = self
            .client
            .get(self.users_url())
            .query(&[("email", email), ("password", password)]);
        self.execute_list(req).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Vec<UserRecord>, DirectoryError> {
        debug!(email, "looking up user by email");
        let req = self.client.get(self.users_url()).query(&[("email", email)]);
        self.execute_list(req).await
    }

    async fn create(&self, user: &NewUser) -> Result<UserRecord, DirectoryError> {
        debug!(email = %user.email, "creating user");
        let req = self.client.post(self.users_url()).json(user);
        self.execute(req).await
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    users: Vec<UserRecord>,
    next_id: u64,
    reject_creates: Option<u16>,
}

/// In-process collaborator for tests.
///
/// Assigns sequential numeric ids on create. Clones share the same records.
#[derive(Clone, Debug, Default)]
pub struct MemoryDirectory {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<UserRecord>) -> Self {
        let directory = Self::new();
        {
            let mut state = directory.state();
            state.next_id = users.len() as u64;
            state.users = users;
        }
        directory
    }

    /// Make every subsequent `create` fail with `status`.
    pub fn reject_creates(self, status: u16) -> Self {
        self.state().reject_creates = Some(status);
        self
    }

    pub fn users(&self) -> Vec<UserRecord> {
        self.state().users.clone()
    }

    fn state(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl UserDirectory for MemoryDirectory {
    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Vec<UserRecord>, DirectoryError> {
        Ok(self
            .state()
            .users
            .iter()
            .filter(|u| u.email == email && u.password == password)
            .cloned()
            .collect())
    }

    async fn find_by_email(&self, email: &str) -> Result<Vec<UserRecord>, DirectoryError> {
        Ok(self
            .state()
            .users
            .iter()
            .filter(|u| u.email == email)
            .cloned()
            .collect())
    }

    async fn create(&self, user: &NewUser) -> Result<UserRecord, DirectoryError> {
        let mut state = self.state();
        if let Some(status) = state.reject_creates {
            return Err(DirectoryError::Status(status));
        }
        state.next_id += 1;
        let record = UserRecord {
            id: Some(Value::from(state.next_id)),
            name: user.name.clone(),
            email: user.email.clone(),
            password: user.password.clone(),
            role: user.role,
            ..Default::default()
        };
        state.users.push(record.clone());
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use store::Role;
    use wiremock::{
        matchers::{body_json, method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    #[tokio::test]
    async fn test_find_by_credentials_sends_both_fields() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .and(query_param("email", "a@x.com"))
            .and(query_param("password", "p&q"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 1, "email": "a@x.com", "password": "p&q", "name": "A", "role": "seeker"}
            ])))
            .mount(&mock_server)
            .await;

        let directory = HttpDirectory::new(&mock_server.uri());
        let users = directory.find_by_credentials("a@x.com", "p&q").await.unwrap();

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "A");
        assert_eq!(users[0].id, Some(json!(1)));
    }

    #[tokio::test]
    async fn test_malformed_records_are_skipped() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .and(query_param("email", "a@x.com"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 1, "email": "a@x.com", "password": "p"},
                {"id": 2, "email": "a@x.com", "password": "p", "name": "A", "role": "admin"},
                {"id": 3, "email": "a@x.com", "password": "p", "name": "  "},
                {"id": 4, "email": "a@x.com", "password": "p", "name": "A", "role": "seeker"}
            ])))
            .mount(&mock_server)
            .await;

        let directory = HttpDirectory::new(&mock_server.uri());
        let users = directory.find_by_credentials("a@x.com", "p").await.unwrap();

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, Some(json!(4)));
    }

    #[tokio::test]
    async fn test_find_by_email_empty() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .and(query_param("email", "new@x.com"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&mock_server)
            .await;

        let directory = HttpDirectory::new(&format!("{}/", mock_server.uri()));
        assert!(directory.find_by_email("new@x.com").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_posts_signup_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/users"))
            .and(body_json(json!({
                "name": "B",
                "email": "b@x.com",
                "password": "pw",
                "role": "employer"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": "9c1e",
                "name": "B",
                "email": "b@x.com",
                "password": "pw",
                "role": "employer"
            })))
            .mount(&mock_server)
            .await;

        let directory = HttpDirectory::new(&mock_server.uri());
        let created = directory
            .create(&NewUser {
                name: "B".to_string(),
                email: "b@x.com".to_string(),
                password: "pw".to_string(),
                role: Role::Employer,
            })
            .await
            .unwrap();

        assert_eq!(created.id, Some(json!("9c1e")));
        assert_eq!(created.role, Role::Employer);
    }

    #[tokio::test]
    async fn test_error_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let directory = HttpDirectory::new(&mock_server.uri());
        let result = directory.create(&NewUser::default()).await;
        assert!(matches!(result, Err(DirectoryError::Status(500))));
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&mock_server)
            .await;

        let directory = HttpDirectory::new(&mock_server.uri());
        let result = directory.find_by_email("a@x.com").await;
        assert!(matches!(result, Err(DirectoryError::Decode(_))));
    }

    #[tokio::test]
    async fn test_unreachable_server() {
        let directory = HttpDirectory::new("http://127.0.0.1:1");
        let result = directory.find_by_email("a@x.com").await;
        assert!(matches!(result, Err(DirectoryError::Transport(_))));
    }

    #[tokio::test]
    async fn test_memory_directory() {
        let directory = MemoryDirectory::new();
        let created = directory
            .create(&NewUser {
                name: "A".to_string(),
                email: "a@x.com".to_string(),
                password: "p".to_string(),
                role: Role::Seeker,
            })
            .await
            .unwrap();
        assert_eq!(created.id, Some(json!(1)));

        assert_eq!(directory.find_by_email("a@x.com").await.unwrap().len(), 1);
        assert_eq!(directory.find_by_credentials("a@x.com", "p").await.unwrap().len(), 1);
        assert!(directory.find_by_credentials("a@x.com", "P").await.unwrap().is_empty());

        let rejecting = MemoryDirectory::new().reject_creates(503);
        assert!(matches!(
            rejecting.create(&NewUser::default()).await,
            Err(DirectoryError::Status(503))
        ));
        assert!(rejecting.users().is_empty());
    }
}
