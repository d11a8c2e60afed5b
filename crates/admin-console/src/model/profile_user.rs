use crud_client::{RecordId, RestEntity};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A user profile (role), served by the `profile` resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProfileUser {
    #[serde(default)]
    pub id: RecordId,
    #[validate(length(min = 1, message = "Description is required!"))]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProfileUserField {
    Description(String),
}

impl ProfileUser {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: 0,
            description: description.into(),
        }
    }
}

impl RestEntity for ProfileUser {
    const RESOURCE: &'static str = "profile";
    type Field = ProfileUserField;

    fn id(&self) -> RecordId {
        self.id
    }

    fn with_id(self, id: RecordId) -> Self {
        Self { id, ..self }
    }

    fn apply(&mut self, field: ProfileUserField) {
        match field {
            ProfileUserField::Description(description) => self.description = description,
        }
    }
}
