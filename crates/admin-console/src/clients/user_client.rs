//! # User Client
//!
//! Binds the generic client to the `user` resource. All CRUD operations come from
//! [`EntityClient`]; the only user-specific call is the login lookup.
use crate::error::ConsoleError;
use crate::model::User;
use crud_client::{EntityClient, RequestError, RestClient, RestEntity};
use tracing::{debug, instrument};

/// Client for the `user` resource.
#[derive(Clone)]
pub struct UserClient {
    inner: RestClient<User>,
}

impl UserClient {
    pub fn new(inner: RestClient<User>) -> Self {
        Self { inner }
    }

    /// Finds a user by login. The backend has no such endpoint, so this filters the
    /// full list.
    #[instrument(skip(self))]
    pub async fn find_by_login(&self, login: &str) -> Result<Option<User>, ConsoleError> {
        debug!("Searching user list");
        let users = self.find_all().await?;
        Ok(users.into_iter().find(|u| u.login == login))
    }
}

impl EntityClient<User> for UserClient {
    type Error = ConsoleError;

    fn inner(&self) -> &RestClient<User> {
        &self.inner
    }

    fn map_error(e: RequestError) -> Self::Error {
        ConsoleError::request(User::RESOURCE, e)
    }
}
