use crate::error::ConsoleError;
use crate::model::EnterpriseProfile;
use crud_client::{EntityClient, RequestError, RestClient, RestEntity};

/// Client for the `enterprise-profile` resource.
#[derive(Clone)]
pub struct EnterpriseProfileClient {
    inner: RestClient<EnterpriseProfile>,
}

impl EnterpriseProfileClient {
    pub fn new(inner: RestClient<EnterpriseProfile>) -> Self {
        Self { inner }
    }
}

impl EntityClient<EnterpriseProfile> for EnterpriseProfileClient {
    type Error = ConsoleError;

    fn inner(&self) -> &RestClient<EnterpriseProfile> {
        &self.inner
    }

    fn map_error(e: RequestError) -> Self::Error {
        ConsoleError::request(EnterpriseProfile::RESOURCE, e)
    }
}
