use crud_client::{RecordId, RestEntity};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A protected resource that profiles grant access to, identified by its key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    #[serde(default)]
    pub id: RecordId,
    #[validate(length(min = 1, message = "Name is required!"))]
    pub name: String,
    #[validate(length(min = 1, message = "Key is required!"))]
    pub resource_key: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResourceField {
    Name(String),
    ResourceKey(String),
}

impl Resource {
    pub fn new(name: impl Into<String>, resource_key: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            resource_key: resource_key.into(),
        }
    }
}

impl RestEntity for Resource {
    const RESOURCE: &'static str = "resource";
    type Field = ResourceField;

    fn id(&self) -> RecordId {
        self.id
    }

    fn with_id(self, id: RecordId) -> Self {
        Self { id, ..self }
    }

    fn apply(&mut self, field: ResourceField) {
        match field {
            ResourceField::Name(name) => self.name = name,
            ResourceField::ResourceKey(key) => self.resource_key = key,
        }
    }
}
