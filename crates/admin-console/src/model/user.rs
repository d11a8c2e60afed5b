use crud_client::{RecordId, RestEntity};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// An account that can log into the backoffice.
///
/// Served by the `user` resource. All four text fields are required.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct User {
    #[serde(default)]
    pub id: RecordId,
    #[validate(length(min = 1, message = "Name is required!"))]
    pub name: String,
    #[validate(length(min = 1, message = "Login is required!"))]
    pub login: String,
    #[validate(length(min = 1, message = "Password is required!"))]
    pub password: String,
    #[validate(length(min = 1, message = "Email is required!"))]
    pub email: String,
}

/// Editable fields of a [`User`].
#[derive(Debug, Clone, PartialEq)]
pub enum UserField {
    Name(String),
    Login(String),
    Password(String),
    Email(String),
}

impl User {
    /// Creates an unsaved user.
    pub fn new(
        name: impl Into<String>,
        login: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            login: login.into(),
            password: password.into(),
            email: email.into(),
        }
    }
}

// Keeps passwords out of debug logs.
impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("login", &self.login)
            .field("password", &"***")
            .field("email", &self.email)
            .finish()
    }
}

impl RestEntity for User {
    const RESOURCE: &'static str = "user";
    type Field = UserField;

    fn id(&self) -> RecordId {
        self.id
    }

    fn with_id(self, id: RecordId) -> Self {
        Self { id, ..self }
    }

    fn apply(&mut self, field: UserField) {
        match field {
            UserField::Name(name) => self.name = name,
            UserField::Login(login) => self.login = login,
            UserField::Password(password) => self.password = password,
            UserField::Email(email) => self.email = email,
        }
    }
}
