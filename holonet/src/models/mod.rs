pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;

use serde::Serialize;

pub use character::{Character, CharacterPayload, NewCharacter};
pub use favorite::{Favorite, FavoriteView, NewFavorite, TargetKind};
pub use planet::{NewPlanet, Planet, PlanetPayload};
pub use user::{NewUser, User, UserPayload};

/// `{"message": ...}` confirmation body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn deleted(name: &str) -> Self {
        Self {
            message: format!("{name} has been deleted"),
        }
    }
}
