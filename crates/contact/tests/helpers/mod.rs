use std::{path::PathBuf, str::FromStr};

use mailroom_contact::{ContactStore, NewContactMessage, SqliteStore};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub async fn setup_test_store(path: PathBuf) -> anyhow::Result<SqliteStore> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    mailroom_db::migrator()?
        .run(&mut *conn, &Plan::apply_all())
        .await?;
    drop(conn);

    Ok(SqliteStore::new(pool))
}

pub fn draft(name: impl Into<String>) -> NewContactMessage {
    let name = name.into();

    NewContactMessage {
        email: format!("{name}@mailroom.localhost"),
        name,
        subject: "Hi".to_owned(),
        message: "my message".to_owned(),
    }
}

#[allow(dead_code)]
pub async fn create_all(
    store: &SqliteStore,
    names: impl IntoIterator<Item = impl Into<String>>,
) -> anyhow::Result<Vec<String>> {
    let mut ids = vec![];
    for name in names.into_iter() {
        let message = store.create(draft(name)).await?;
        ids.push(message.id);
    }

    Ok(ids)
}
