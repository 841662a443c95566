use holonet_data::prelude::*;
use holonet_data::{connect, DatabaseConfig};
use sqlx::SqlitePool;

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
struct Ship {
    id: i64,
    name: String,
    crew: Option<i64>,
}

impl Entity for Ship {
    fn table_name() -> &'static str {
        "ships"
    }

    fn columns() -> &'static [&'static str] {
        &["id", "name", "crew"]
    }

    fn id(&self) -> i64 {
        self.id
    }
}

struct NewShip {
    name: &'static str,
    crew: Option<i64>,
}

impl Insertable for NewShip {
    type Entity = Ship;

    fn values(&self) -> Vec<(&'static str, SqlValue)> {
        vec![("name", self.name.into()), ("crew", self.crew.into())]
    }
}

async fn setup() -> SqlitePool {
    let pool = connect(&DatabaseConfig::in_memory()).await.unwrap();
    sqlx::query("CREATE TABLE ships (id INTEGER PRIMARY KEY, name TEXT NOT NULL UNIQUE, crew INTEGER)")
        .execute(&pool)
        .await
        .unwrap();
    pool
}

fn ship(name: &'static str, crew: Option<i64>) -> NewShip {
    NewShip { name, crew }
}

#[tokio::test]
async fn insert_returns_stored_row() {
    let repo = SqlxRepository::<Ship>::new(setup().await);
    let falcon = repo.insert(&ship("Millennium Falcon", Some(4))).await.unwrap();
    assert_eq!(falcon.id, 1);
    assert_eq!(falcon.name, "Millennium Falcon");
    assert_eq!(falcon.crew, Some(4));

    let found = repo.find_by_id(falcon.id).await.unwrap();
    assert_eq!(found, Some(falcon));
}

#[tokio::test]
async fn null_values_round_trip() {
    let repo = SqlxRepository::<Ship>::new(setup().await);
    let probe = repo.insert(&ship("Probe Droid Pod", None)).await.unwrap();
    assert_eq!(probe.crew, None);

    let uncrewed = repo
        .find_where(&Filter::new().eq("crew", None::<i64>))
        .await
        .unwrap();
    assert_eq!(uncrewed, vec![probe]);
}

#[tokio::test]
async fn find_all_orders_by_id() {
    let repo = SqlxRepository::<Ship>::new(setup().await);
    for name in ["X-wing", "Y-wing", "A-wing"] {
        repo.insert(&ship(name, Some(1))).await.unwrap();
    }
    let names: Vec<String> = repo
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, ["X-wing", "Y-wing", "A-wing"]);
    assert_eq!(repo.count().await.unwrap(), 3);
}

#[tokio::test]
async fn missing_id_is_none() {
    let repo = SqlxRepository::<Ship>::new(setup().await);
    assert_eq!(repo.find_by_id(42).await.unwrap(), None);
    assert!(repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_reports_whether_a_row_went() {
    let repo = SqlxRepository::<Ship>::new(setup().await);
    let tie = repo.insert(&ship("TIE Fighter", Some(1))).await.unwrap();
    assert!(repo.delete(tie.id).await.unwrap());
    assert!(!repo.delete(tie.id).await.unwrap());
    assert_eq!(repo.find_by_id(tie.id).await.unwrap(), None);
}

#[tokio::test]
async fn delete_where_requires_a_filter() {
    let repo = SqlxRepository::<Ship>::new(setup().await);
    repo.insert(&ship("Slave I", Some(1))).await.unwrap();
    let err = repo.delete_where(&Filter::new()).await.unwrap_err();
    assert!(matches!(err, DataError::Other(_)));
    assert_eq!(repo.count().await.unwrap(), 1);

    let removed = repo
        .delete_where(&Filter::new().eq("name", "Slave I"))
        .await
        .unwrap();
    assert_eq!(removed, 1);
}

#[tokio::test]
async fn unique_violation_is_conflict() {
    let repo = SqlxRepository::<Ship>::new(setup().await);
    repo.insert(&ship("Tantive IV", Some(30))).await.unwrap();
    let err = repo.insert(&ship("Tantive IV", Some(30))).await.unwrap_err();
    assert!(err.is_conflict(), "{err}");
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn tx_commit_persists() {
    let repo = SqlxRepository::<Ship>::new(setup().await);
    let mut tx = repo.begin().await.unwrap();
    let ship = tx.insert(&ship("Ghost", Some(6))).await.unwrap();
    let seen: Option<Ship> = tx.find_by_id(ship.id).await.unwrap();
    assert!(seen.is_some());
    tx.commit().await.unwrap();

    assert_eq!(repo.find_by_id(ship.id).await.unwrap(), Some(ship));
}

#[tokio::test]
async fn tx_dropped_rolls_back() {
    let repo = SqlxRepository::<Ship>::new(setup().await);
    {
        let mut tx = repo.begin().await.unwrap();
        tx.insert(&ship("Executor", Some(280_000))).await.unwrap();
    }
    assert_eq!(repo.count().await.unwrap(), 0);

    let mut tx = repo.begin().await.unwrap();
    tx.insert(&ship("Home One", Some(5_400))).await.unwrap();
    tx.rollback().await.unwrap();
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn tx_delete_where_then_find_where() {
    let repo = SqlxRepository::<Ship>::new(setup().await);
    repo.insert(&ship("Razor Crest", Some(1))).await.unwrap();
    repo.insert(&ship("Outrider", Some(1))).await.unwrap();

    let mut tx = repo.begin().await.unwrap();
    let removed = tx
        .delete_where::<Ship>(&Filter::new().eq("name", "Outrider"))
        .await
        .unwrap();
    assert_eq!(removed, 1);
    let left: Vec<Ship> = tx.find_where(&Filter::new().eq("crew", 1i64)).await.unwrap();
    assert_eq!(left.len(), 1);
    tx.commit().await.unwrap();

    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn write_tx_deletes_by_id_once() {
    let repo = SqlxRepository::<Ship>::new(setup().await);
    let wing = repo.insert(&ship("B-wing", Some(1))).await.unwrap();

    let mut tx = repo.begin_write().await.unwrap();
    assert!(tx.delete::<Ship>(wing.id).await.unwrap());
    assert!(!tx.delete::<Ship>(wing.id).await.unwrap());
    tx.commit().await.unwrap();

    assert_eq!(repo.count().await.unwrap(), 0);
}
