use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::{
    model::player::{NewPlayer, Player},
    store::PlayerStore,
};

#[derive(Debug, Default)]
struct MemoryInner {
    last_id: i64,
    players: BTreeMap<i64, Player>,
}

/// In-process player store. Identifiers start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<MemoryInner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> anyhow::Result<RwLockReadGuard<'_, MemoryInner>> {
        self.inner
            .read()
            .map_err(|e| anyhow::anyhow!("memory store lock poisoned: {e}"))
    }

    fn write(&self) -> anyhow::Result<RwLockWriteGuard<'_, MemoryInner>> {
        self.inner
            .write()
            .map_err(|e| anyhow::anyhow!("memory store lock poisoned: {e}"))
    }
}

#[async_trait]
impl PlayerStore for MemoryStore {
    async fn insert(&self, player: &NewPlayer) -> anyhow::Result<Player> {
        let mut inner = self.write()?;
        inner.last_id = inner
            .last_id
            .checked_add(1)
            .ok_or_else(|| anyhow::anyhow!("memory store exhausted player identifiers"))?;

        let stored = player.clone().with_id(inner.last_id);
        inner.players.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn list_all(&self) -> anyhow::Result<Vec<Player>> {
        Ok(self.read()?.players.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Player>> {
        Ok(self.read()?.players.get(&id).cloned())
    }

    async fn exists(&self, id: i64) -> anyhow::Result<bool> {
        Ok(self.read()?.players.contains_key(&id))
    }

    async fn update(&self, player: &Player) -> anyhow::Result<Option<Player>> {
        let mut inner = self.write()?;
        let Some(slot) = inner.players.get_mut(&player.id) else {
            return Ok(None);
        };

        *slot = player.clone();
        Ok(Some(player.clone()))
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        Ok(self.write()?.players.remove(&id).is_some())
    }
}
