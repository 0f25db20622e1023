//! In-memory backend, transport and session store for tests

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::core::backend::{Account, BackendClient, BackendError, SignUpResponse};
use crate::core::session::{SessionStore, StoredSession};
use crate::core::supabase::{ApiRequest, ApiResponse, Transport};

/// Recorded backend call
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CurrentUser,
    SignUp { email: String, password: String },
    SignIn { email: String },
    SignOut,
    Insert { table: String, record: serde_json::Value },
    Select { table: String, id: String },
}

/// Backend returning canned results and recording every call
pub struct MockBackend {
    pub current_user: Result<Option<Account>, BackendError>,
    pub sign_up: Result<SignUpResponse, BackendError>,
    pub sign_in: Result<Account, BackendError>,
    pub sign_out: Result<(), BackendError>,
    pub insert: Result<(), BackendError>,
    pub select: Result<Option<serde_json::Value>, BackendError>,
    calls: Mutex<Vec<Call>>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self {
            current_user: Ok(None),
            sign_up: Ok(SignUpResponse::default()),
            sign_in: Err(BackendError::api(400, "Invalid login credentials")),
            sign_out: Ok(()),
            insert: Ok(()),
            select: Ok(None),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_current_user(mut self, account: Account) -> Self {
        self.current_user = Ok(Some(account));
        self
    }

    pub fn with_sign_up_id(mut self, id: &str) -> Self {
        self.sign_up = Ok(SignUpResponse {
            user: Some(Account::new(id)),
        });
        self
    }

    pub fn with_sign_up_error(mut self, message: &str) -> Self {
        self.sign_up = Err(BackendError::api(422, message));
        self
    }

    pub fn with_insert_error(mut self, message: &str) -> Self {
        self.insert = Err(BackendError::api(409, message));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn sign_up_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::SignUp { .. }))
            .count()
    }

    pub fn inserts(&self) -> Vec<(String, serde_json::Value)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Insert { table, record } => Some((table, record)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait(?Send)]
impl BackendClient for MockBackend {
    async fn current_user(&self) -> Result<Option<Account>, BackendError> {
        self.record(Call::CurrentUser);
        self.current_user.clone()
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<SignUpResponse, BackendError> {
        self.record(Call::SignUp {
            email: email.to_string(),
            password: password.to_string(),
        });
        self.sign_up.clone()
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        _password: &str,
    ) -> Result<Account, BackendError> {
        self.record(Call::SignIn {
            email: email.to_string(),
        });
        self.sign_in.clone()
    }

    async fn sign_out(&self) -> Result<(), BackendError> {
        self.record(Call::SignOut);
        self.sign_out.clone()
    }

    async fn insert_row(&self, table: &str, record: serde_json::Value) -> Result<(), BackendError> {
        self.record(Call::Insert {
            table: table.to_string(),
            record,
        });
        self.insert.clone()
    }

    async fn select_row(
        &self,
        table: &str,
        id: &str,
    ) -> Result<Option<serde_json::Value>, BackendError> {
        self.record(Call::Select {
            table: table.to_string(),
            id: id.to_string(),
        });
        self.select.clone()
    }
}

// ============================================================================
// Transport and session store
// ============================================================================

/// Transport answering from a queue of canned responses
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<ApiResponse>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next response
    pub fn respond(self, status: u16, body: &str) -> Self {
        self.responses.lock().unwrap().push_back(ApiResponse {
            status,
            body: body.to_string(),
        });
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.url).collect()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, BackendError> {
        let url = request.url.clone();
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| BackendError::Network(format!("no response queued for {}", url)))
    }
}

/// Session store held in memory
#[derive(Default)]
pub struct MemorySessionStore {
    session: Mutex<Option<StoredSession>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: StoredSession) -> Self {
        Self {
            session: Mutex::new(Some(session)),
        }
    }

    pub fn current(&self) -> Option<StoredSession> {
        self.session.lock().unwrap().clone()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<StoredSession> {
        self.current()
    }

    fn save(&self, session: &StoredSession) -> Result<(), String> {
        *self.session.lock().unwrap() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) {
        *self.session.lock().unwrap() = None;
    }
}
