use crud_client::{RecordId, RestEntity};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Profile of a client enterprise, served by the `enterprise-profile` resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct EnterpriseProfile {
    #[serde(default)]
    pub id: RecordId,
    #[validate(length(min = 1, message = "Description is required!"))]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EnterpriseProfileField {
    Description(String),
}

impl EnterpriseProfile {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: 0,
            description: description.into(),
        }
    }
}

impl RestEntity for EnterpriseProfile {
    const RESOURCE: &'static str = "enterprise-profile";
    type Field = EnterpriseProfileField;

    fn id(&self) -> RecordId {
        self.id
    }

    fn with_id(self, id: RecordId) -> Self {
        Self { id, ..self }
    }

    fn apply(&mut self, field: EnterpriseProfileField) {
        match field {
            EnterpriseProfileField::Description(description) => self.description = description,
        }
    }
}
