use garde::Validate;
use holonet_core::validation::{required, validate};
use holonet_core::ValidationErrorResponse;
use holonet_data::{Entity, Insertable, SqlValue};
use serde::{Deserialize, Serialize};

/// A character, stored in the `people` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Character {
    pub id: i64,
    pub name: String,
    pub gender: Option<String>,
    pub birth_year: String,
    pub hair_color: Option<String>,
    pub skin_color: String,
    pub eye_color: Option<String>,
    pub height: i64,
    pub mass: i64,
}

impl Entity for Character {
    fn table_name() -> &'static str {
        "people"
    }

    fn columns() -> &'static [&'static str] {
        &[
            "id",
            "name",
            "gender",
            "birth_year",
            "hair_color",
            "skin_color",
            "eye_color",
            "height",
            "mass",
        ]
    }

    fn id(&self) -> i64 {
        self.id
    }
}

/// Request body of `POST /people`. A key that is absent and a key set to
/// `null` are treated alike.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CharacterPayload {
    #[garde(required)]
    pub name: Option<String>,
    #[garde(skip)]
    pub gender: Option<String>,
    #[garde(required)]
    pub birth_year: Option<String>,
    #[garde(skip)]
    pub hair_color: Option<String>,
    #[garde(required)]
    pub skin_color: Option<String>,
    #[garde(skip)]
    pub eye_color: Option<String>,
    #[garde(required)]
    pub height: Option<i64>,
    #[garde(required)]
    pub mass: Option<i64>,
}

impl CharacterPayload {
    pub fn into_new(self) -> Result<NewCharacter, ValidationErrorResponse> {
        validate(&self)?;
        Ok(NewCharacter {
            name: required(self.name, "name")?,
            gender: self.gender,
            birth_year: required(self.birth_year, "birth_year")?,
            hair_color: self.hair_color,
            skin_color: required(self.skin_color, "skin_color")?,
            eye_color: self.eye_color,
            height: required(self.height, "height")?,
            mass: required(self.mass, "mass")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewCharacter {
    pub name: String,
    pub gender: Option<String>,
    pub birth_year: String,
    pub hair_color: Option<String>,
    pub skin_color: String,
    pub eye_color: Option<String>,
    pub height: i64,
    pub mass: i64,
}

impl Insertable for NewCharacter {
    type Entity = Character;

    fn values(&self) -> Vec<(&'static str, SqlValue)> {
        vec![
            ("name", self.name.clone().into()),
            ("gender", self.gender.clone().into()),
            ("birth_year", self.birth_year.clone().into()),
            ("hair_color", self.hair_color.clone().into()),
            ("skin_color", self.skin_color.clone().into()),
            ("eye_color", self.eye_color.clone().into()),
            ("height", self.height.into()),
            ("mass", self.mass.into()),
        ]
    }
}
