use std::sync::Arc;

use async_trait::async_trait;
use chrono::{SubsecRound, Utc};
use mailroom_shared::Result;
use tokio::sync::RwLock;

use crate::{ContactMessage, IdGenerator, NewContactMessage, parse_id};

use super::ContactStore;

/// Process-local store, for tests and for running without a database.
#[derive(Clone, Default)]
pub struct MemoryStore {
    messages: Arc<RwLock<Vec<ContactMessage>>>,
    ids: IdGenerator,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.messages.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.messages.read().await.is_empty()
    }
}

#[async_trait]
impl ContactStore for MemoryStore {
    async fn create(&self, draft: NewContactMessage) -> Result<ContactMessage> {
        let message = draft.into_message(self.ids.generate()?, Utc::now().trunc_subsecs(3));
        self.messages.write().await.push(message.clone());

        Ok(message)
    }

    async fn find_all(&self) -> Result<Vec<ContactMessage>> {
        let mut messages = self.messages.read().await.clone();
        messages.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        Ok(messages)
    }

    async fn mark_read(&self, id: &str) -> Result<Option<ContactMessage>> {
        let id = parse_id(id)?;
        let mut messages = self.messages.write().await;

        Ok(messages.iter_mut().find(|m| m.id == id).map(|message| {
            message.is_read = true;
            message.clone()
        }))
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mailroom_shared::Error;

    use super::*;

    fn draft(name: &str) -> NewContactMessage {
        NewContactMessage {
            name: name.to_owned(),
            email: format!("{name}@mailroom.localhost"),
            subject: "Hi".to_owned(),
            message: "Hello".to_owned(),
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_starts_unread() {
        let store = MemoryStore::new();
        let message = store.create(draft("john")).await.unwrap();

        assert_eq!(message.id.len(), 26);
        assert!(!message.is_read);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn find_all_is_newest_first() {
        let store = MemoryStore::new();
        let mut ids = vec![];
        for name in ["a", "b", "c"] {
            ids.push(store.create(draft(name)).await.unwrap().id);
        }
        ids.reverse();

        let listed = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.id)
            .collect::<Vec<_>>();

        assert_eq!(listed, ids);
    }

    #[tokio::test]
    async fn mark_read_is_idempotent() {
        let store = MemoryStore::new();
        let created = store.create(draft("john")).await.unwrap();

        let first = store.mark_read(&created.id).await.unwrap().unwrap();
        let second = store.mark_read(&created.id).await.unwrap().unwrap();

        assert!(first.is_read);
        assert_eq!(first, second);
        assert_eq!(
            ContactMessage {
                is_read: false,
                ..second
            },
            created
        );
    }

    #[tokio::test]
    async fn mark_read_unknown_id_returns_none() {
        let store = MemoryStore::new();
        store.create(draft("john")).await.unwrap();
        let unknown = IdGenerator::default().generate().unwrap();

        assert!(store.mark_read(&unknown).await.unwrap().is_none());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn mark_read_malformed_id_is_an_error() {
        let store = MemoryStore::new();

        assert!(matches!(store.mark_read("42").await, Err(Error::InvalidId(_))));
    }
}
