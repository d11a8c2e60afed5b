use crate::error::ConsoleError;
use crate::model::Resource;
use crud_client::{EntityClient, RequestError, RestClient, RestEntity};

/// Client for the `resource` resource.
#[derive(Clone)]
pub struct ResourceClient {
    inner: RestClient<Resource>,
}

impl ResourceClient {
    pub fn new(inner: RestClient<Resource>) -> Self {
        Self { inner }
    }
}

impl EntityClient<Resource> for ResourceClient {
    type Error = ConsoleError;

    fn inner(&self) -> &RestClient<Resource> {
        &self.inner
    }

    fn map_error(e: RequestError) -> Self::Error {
        ConsoleError::request(Resource::RESOURCE, e)
    }
}
