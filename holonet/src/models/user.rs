use garde::Validate;
use holonet_core::validation::{required, validate};
use holonet_core::ValidationErrorResponse;
use holonet_data::{Entity, Insertable, SqlValue};
use serde::{Deserialize, Serialize};

/// A registered user.
///
/// The password is stored and serialized in clear text; existing clients
/// read it back from `GET /users`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password: String,
}

impl Entity for User {
    fn table_name() -> &'static str {
        "users"
    }

    fn columns() -> &'static [&'static str] {
        &["id", "username", "email", "password"]
    }

    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct UserPayload {
    #[garde(required, length(min = 1, max = 12))]
    pub username: Option<String>,
    #[garde(required, email, length(max = 120))]
    pub email: Option<String>,
    #[garde(required, length(max = 80))]
    pub password: Option<String>,
}

impl UserPayload {
    pub fn into_new(self) -> Result<NewUser, ValidationErrorResponse> {
        validate(&self)?;
        Ok(NewUser {
            username: required(self.username, "username")?,
            email: required(self.email, "email")?,
            password: required(self.password, "password")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl Insertable for NewUser {
    type Entity = User;

    fn values(&self) -> Vec<(&'static str, SqlValue)> {
        vec![
            ("username", self.username.as_str().into()),
            ("email", self.email.as_str().into()),
            ("password", self.password.as_str().into()),
        ]
    }
}
