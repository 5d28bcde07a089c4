use async_trait::async_trait;

use crate::model::player::{NewPlayer, Player};

/// Record storage for players, keyed by a storage-assigned identifier.
///
/// Each call is expected to be atomic on its own. Nothing here coordinates
/// across calls, so two concurrent updates of one player race and the last
/// write wins.
#[async_trait]
pub trait PlayerStore: Send + Sync {
    /// Persist a new player and return it with its assigned identifier.
    async fn insert(&self, player: &NewPlayer) -> anyhow::Result<Player>;

    /// Every stored player, ordered by identifier.
    async fn list_all(&self) -> anyhow::Result<Vec<Player>>;

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Player>>;

    async fn exists(&self, id: i64) -> anyhow::Result<bool>;

    /// Overwrite every non-identifier column of `player.id`.
    ///
    /// Returns `None` when no such player exists.
    async fn update(&self, player: &Player) -> anyhow::Result<Option<Player>>;

    /// Returns whether a row was removed.
    async fn delete(&self, id: i64) -> anyhow::Result<bool>;
}
