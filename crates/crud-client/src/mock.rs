//! # Mock Transport & Testing Guide
//!
//! [`MockTransport<T>`] implements [`Transport<T>`] entirely in memory from a queue of
//! expectations. Each incoming call pops the next expectation and returns its canned
//! response, so tests can script backend failures that a real server or the resource
//! actor would not produce on demand.
//!
//! ## When to use Mocks vs the Resource Actor
//!
//! | Feature | MockTransport | ResourceActor |
//! |---------|---------------|---------------|
//! | **State** | None (scripted answers) | Real record store |
//! | **Determinism** | Fully scripted | Sequential mailbox |
//! | **Use Case** | Error paths, call ordering | CRUD properties, end-to-end flows |
//! | **Error Injection** | Easy (`return_err`) | Only 400/404 |
//!
//! ## Example
//!
//! ```rust
//! use crud_client::mock::MockTransport;
//! use crud_client::{RecordId, RequestError, RestEntity};
//! use serde::{Deserialize, Serialize};
//! use validator::Validate;
//!
//! #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Validate)]
//! struct Tag { #[serde(default)] id: RecordId, label: String }
//! #[derive(Debug)] enum TagField {}
//! impl RestEntity for Tag {
//!     const RESOURCE: &'static str = "tag";
//!     type Field = TagField;
//!     fn id(&self) -> RecordId { self.id }
//!     fn with_id(self, id: RecordId) -> Self { Self { id, ..self } }
//!     fn apply(&mut self, field: TagField) { match field {} }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockTransport::<Tag>::new();
//!     mock.expect_find_all().return_ok(vec![]);
//!     mock.expect_delete(3).return_err(RequestError::status(500, "Database offline"));
//!
//!     let client = mock.client();
//!     assert!(client.find_all().await.unwrap().is_empty());
//!     let err = client.delete(3).await.unwrap_err();
//!     assert_eq!(err.to_string(), "Database offline");
//!
//!     mock.verify();
//! }
//! ```

use crate::client::RestClient;
use crate::entity::{RecordId, RestEntity};
use crate::error::RequestError;
use crate::transport::Transport;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected call and the response to hand back.
enum Expectation<T: RestEntity> {
    FindAll {
        response: Result<Vec<T>, RequestError>,
    },
    FindById {
        id: RecordId,
        response: Result<T, RequestError>,
    },
    Save {
        response: Result<T, RequestError>,
    },
    Update {
        id: RecordId,
        response: Result<(), RequestError>,
    },
    Delete {
        id: RecordId,
        response: Result<(), RequestError>,
    },
}

impl<T: RestEntity> Expectation<T> {
    fn describe(&self) -> String {
        match self {
            Self::FindAll { .. } => "find_all".into(),
            Self::FindById { id, .. } => format!("find_by_id({id})"),
            Self::Save { .. } => "save".into(),
            Self::Update { id, .. } => format!("update({id})"),
            Self::Delete { id, .. } => format!("delete({id})"),
        }
    }
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A scripted transport with expectation tracking for fluent testing.
///
/// Calls must arrive in the order the expectations were registered, except for
/// `delete`: a batch delete issues its calls concurrently, so a delete is matched
/// against the first queued delete expectation for the same id.
pub struct MockTransport<T: RestEntity> {
    expectations: Queue<T>,
}

impl<T: RestEntity> Clone for MockTransport<T> {
    fn clone(&self) -> Self {
        Self {
            expectations: Arc::clone(&self.expectations),
        }
    }
}

impl<T: RestEntity> Default for MockTransport<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RestEntity> MockTransport<T> {
    /// Creates a new mock with no expectations.
    pub fn new() -> Self {
        Self {
            expectations: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> RestClient<T> {
        RestClient::new(self.clone())
    }

    pub fn expect_find_all(&self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(|response| Expectation::FindAll { response })
    }

    pub fn expect_find_by_id(&self, id: RecordId) -> ExpectationBuilder<T, T> {
        self.builder(move |response| Expectation::FindById { id, response })
    }

    pub fn expect_save(&self) -> ExpectationBuilder<T, T> {
        self.builder(|response| Expectation::Save { response })
    }

    pub fn expect_update(&self, id: RecordId) -> ExpectationBuilder<T, ()> {
        self.builder(move |response| Expectation::Update { id, response })
    }

    pub fn expect_delete(&self, id: RecordId) -> ExpectationBuilder<T, ()> {
        self.builder(move |response| Expectation::Delete { id, response })
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            let pending: Vec<String> = exps.iter().map(Expectation::describe).collect();
            panic!("Not all expectations were met. Remaining: {pending:?}");
        }
    }

    fn builder<R>(
        &self,
        make: impl FnOnce(Result<R, RequestError>) -> Expectation<T> + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            expectations: Arc::clone(&self.expectations),
            make: Box::new(make),
        }
    }

    fn next(&self, call: &str) -> Expectation<T> {
        let mut exps = self.expectations.lock().unwrap();
        exps.pop_front()
            .unwrap_or_else(|| panic!("Unexpected {call}: no expectation left"))
    }

    fn next_delete(&self, id: RecordId) -> Result<(), RequestError> {
        let mut exps = self.expectations.lock().unwrap();
        let position = exps
            .iter()
            .position(|e| matches!(e, Expectation::Delete { id: expected, .. } if *expected == id))
            .unwrap_or_else(|| panic!("Unexpected delete({id})"));
        match exps.remove(position) {
            Some(Expectation::Delete { response, .. }) => response,
            _ => unreachable!("position points at a delete expectation"),
        }
    }
}

/// Builder returned by the `expect_*` methods.
pub struct ExpectationBuilder<T: RestEntity, R> {
    expectations: Queue<T>,
    make: Box<dyn FnOnce(Result<R, RequestError>) -> Expectation<T>>,
}

impl<T: RestEntity, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: RequestError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, RequestError>) {
        let expectation = (self.make)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

#[async_trait]
impl<T: RestEntity> Transport<T> for MockTransport<T> {
    async fn find_all(&self) -> Result<Vec<T>, RequestError> {
        match self.next("find_all") {
            Expectation::FindAll { response } => response,
            other => panic!("Expected {}, got find_all", other.describe()),
        }
    }

    async fn find_by_id(&self, id: RecordId) -> Result<T, RequestError> {
        match self.next("find_by_id") {
            Expectation::FindById { id: expected, response } if expected == id => response,
            other => panic!("Expected {}, got find_by_id({id})", other.describe()),
        }
    }

    async fn save(&self, _record: T) -> Result<T, RequestError> {
        match self.next("save") {
            Expectation::Save { response } => response,
            other => panic!("Expected {}, got save", other.describe()),
        }
    }

    async fn update(&self, id: RecordId, _record: T) -> Result<(), RequestError> {
        match self.next("update") {
            Expectation::Update { id: expected, response } if expected == id => response,
            other => panic!("Expected {}, got update({id})", other.describe()),
        }
    }

    async fn delete(&self, id: RecordId) -> Result<(), RequestError> {
        self.next_delete(id)
    }
}
