use crate::error::ConsoleError;
use crate::model::ProfileUser;
use crud_client::{EntityClient, RequestError, RestClient, RestEntity};

/// Client for the `profile` resource.
#[derive(Clone)]
pub struct ProfileClient {
    inner: RestClient<ProfileUser>,
}

impl ProfileClient {
    pub fn new(inner: RestClient<ProfileUser>) -> Self {
        Self { inner }
    }
}

impl EntityClient<ProfileUser> for ProfileClient {
    type Error = ConsoleError;

    fn inner(&self) -> &RestClient<ProfileUser> {
        &self.inner
    }

    fn map_error(e: RequestError) -> Self::Error {
        ConsoleError::request(ProfileUser::RESOURCE, e)
    }
}
