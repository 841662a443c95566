use holonet_data::{Entity, Insertable, SqlValue};
use serde::{Deserialize, Serialize};

/// What a favorite points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum TargetKind {
    Planet,
    People,
}

impl TargetKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TargetKind::Planet => "planet",
            TargetKind::People => "people",
        }
    }

    /// Column of `favorites` holding the target id.
    pub fn id_column(self) -> &'static str {
        match self {
            TargetKind::Planet => "planet_id",
            TargetKind::People => "people_id",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TargetKind::Planet => "Planet",
            TargetKind::People => "People",
        }
    }
}

impl std::fmt::Display for TargetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<TargetKind> for SqlValue {
    fn from(kind: TargetKind) -> Self {
        SqlValue::Text(kind.as_str().to_string())
    }
}

/// A row of `favorites`. Exactly one of `people_id`/`planet_id` is set,
/// matching `kind`.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Favorite {
    pub id: i64,
    pub user_id: i64,
    pub kind: TargetKind,
    pub people_id: Option<i64>,
    pub planet_id: Option<i64>,
}

impl Entity for Favorite {
    fn table_name() -> &'static str {
        "favorites"
    }

    fn columns() -> &'static [&'static str] {
        &["id", "user_id", "kind", "people_id", "planet_id"]
    }

    fn id(&self) -> i64 {
        self.id
    }
}

/// A favorite with its target's name, read from the `favorite_details` view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct FavoriteView {
    pub id: i64,
    pub user_id: i64,
    pub kind: TargetKind,
    pub people_id: Option<i64>,
    pub people: Option<String>,
    pub planet_id: Option<i64>,
    pub planet: Option<String>,
}

impl FavoriteView {
    pub fn target_name(&self) -> Option<&str> {
        match self.kind {
            TargetKind::Planet => self.planet.as_deref(),
            TargetKind::People => self.people.as_deref(),
        }
    }
}

impl Entity for FavoriteView {
    fn table_name() -> &'static str {
        "favorite_details"
    }

    fn columns() -> &'static [&'static str] {
        &[
            "id",
            "user_id",
            "kind",
            "people_id",
            "people",
            "planet_id",
            "planet",
        ]
    }

    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewFavorite {
    pub user_id: i64,
    pub kind: TargetKind,
    pub target_id: i64,
}

impl Insertable for NewFavorite {
    type Entity = Favorite;

    fn values(&self) -> Vec<(&'static str, SqlValue)> {
        vec![
            ("user_id", self.user_id.into()),
            ("kind", self.kind.into()),
            (self.kind.id_column(), self.target_id.into()),
        ]
    }
}
