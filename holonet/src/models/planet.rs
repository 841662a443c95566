use garde::Validate;
use holonet_core::validation::{required, validate};
use holonet_core::ValidationErrorResponse;
use holonet_data::{Entity, Insertable, SqlValue};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Planet {
    pub id: i64,
    pub name: String,
    pub terrain: String,
    pub climate: String,
    pub population: i64,
    pub gravity: String,
    pub diameter: i64,
}

impl Entity for Planet {
    fn table_name() -> &'static str {
        "planets"
    }

    fn columns() -> &'static [&'static str] {
        &[
            "id",
            "name",
            "terrain",
            "climate",
            "population",
            "gravity",
            "diameter",
        ]
    }

    fn id(&self) -> i64 {
        self.id
    }
}

/// Request body of `POST /planets`. Every field is required.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct PlanetPayload {
    #[garde(required)]
    pub name: Option<String>,
    #[garde(required)]
    pub terrain: Option<String>,
    #[garde(required)]
    pub climate: Option<String>,
    #[garde(required)]
    pub population: Option<i64>,
    #[garde(required)]
    pub gravity: Option<String>,
    #[garde(required)]
    pub diameter: Option<i64>,
}

impl PlanetPayload {
    pub fn into_new(self) -> Result<NewPlanet, ValidationErrorResponse> {
        validate(&self)?;
        Ok(NewPlanet {
            name: required(self.name, "name")?,
            terrain: required(self.terrain, "terrain")?,
            climate: required(self.climate, "climate")?,
            population: required(self.population, "population")?,
            gravity: required(self.gravity, "gravity")?,
            diameter: required(self.diameter, "diameter")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPlanet {
    pub name: String,
    pub terrain: String,
    pub climate: String,
    pub population: i64,
    pub gravity: String,
    pub diameter: i64,
}

impl Insertable for NewPlanet {
    type Entity = Planet;

    fn values(&self) -> Vec<(&'static str, SqlValue)> {
        vec![
            ("name", self.name.as_str().into()),
            ("terrain", self.terrain.as_str().into()),
            ("climate", self.climate.as_str().into()),
            ("population", self.population.into()),
            ("gravity", self.gravity.as_str().into()),
            ("diameter", self.diameter.into()),
        ]
    }
}
