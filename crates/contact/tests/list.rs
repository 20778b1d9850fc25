use mailroom_contact::ContactStore;
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_find_all_returns_newest_first() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let store = helpers::setup_test_store(dir.child("db.sqlite3")).await?;

    let ids = helpers::create_all(&store, vec!["first", "second", "third", "fourth"])
        .await?
        .into_iter()
        .rev()
        .collect::<Vec<_>>();

    let messages = store.find_all().await?;
    assert_eq!(messages.len(), 4);
    assert_eq!(messages.iter().map(|m| m.id.to_owned()).collect::<Vec<_>>(), ids);

    for pair in messages.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }

    Ok(())
}

#[tokio::test]
async fn test_find_all_on_empty_store() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let store = helpers::setup_test_store(dir.child("db.sqlite3")).await?;

    assert!(store.find_all().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_concurrent_creates_are_all_listed() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let store = helpers::setup_test_store(dir.child("db.sqlite3")).await?;

    let fut = (0..8).map(|i| store.create(helpers::draft(format!("sender{i}"))));
    for result in futures::future::join_all(fut).await {
        result?;
    }

    assert_eq!(store.find_all().await?.len(), 8);

    Ok(())
}
