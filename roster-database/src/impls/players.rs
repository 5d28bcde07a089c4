use std::str::FromStr;

use anyhow::Context as _;
use async_trait::async_trait;

use crate::{
    database::Database,
    model::player::{NewPlayer, Player, Profession, Race},
    store::PlayerStore,
};

#[derive(sqlx::FromRow)]
struct PlayerRow {
    id: i64,
    name: String,
    title: String,
    race: String,
    profession: String,
    birthday: i64,
    banned: bool,
    experience: i32,
    level: i32,
    until_next_level: i32,
}

pub async fn insert_player(db: &Database, player: &NewPlayer) -> anyhow::Result<Player> {
    let row: PlayerRow = sqlx::query_as(
        "INSERT INTO players (name, title, race, profession, birthday, banned, experience, level, until_next_level)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
         RETURNING id, name, title, race, profession, birthday, banned, experience, level, until_next_level",
    )
    .bind(&player.name)
    .bind(&player.title)
    .bind(player.race.as_ref())
    .bind(player.profession.as_ref())
    .bind(player.birthday)
    .bind(player.banned)
    .bind(player.experience)
    .bind(player.level)
    .bind(player.until_next_level)
    .fetch_one(db.pool())
    .await?;

    to_player(row)
}

pub async fn list_players(db: &Database) -> anyhow::Result<Vec<Player>> {
    let rows: Vec<PlayerRow> = sqlx::query_as(
        "SELECT id, name, title, race, profession, birthday, banned, experience, level, until_next_level
         FROM players
         ORDER BY id ASC",
    )
    .fetch_all(db.pool())
    .await?;

    rows.into_iter().map(to_player).collect()
}

pub async fn get_player(db: &Database, id: i64) -> anyhow::Result<Option<Player>> {
    let row: Option<PlayerRow> = sqlx::query_as(
        "SELECT id, name, title, race, profession, birthday, banned, experience, level, until_next_level
         FROM players
         WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(db.pool())
    .await?;

    row.map(to_player).transpose()
}

pub async fn player_exists(db: &Database, id: i64) -> anyhow::Result<bool> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM players WHERE id = $1)")
        .bind(id)
        .fetch_one(db.pool())
        .await?;

    Ok(exists)
}

pub async fn update_player(db: &Database, player: &Player) -> anyhow::Result<Option<Player>> {
    let row: Option<PlayerRow> = sqlx::query_as(
        "UPDATE players
         SET name = $1, title = $2, race = $3, profession = $4, birthday = $5,
             banned = $6, experience = $7, level = $8, until_next_level = $9
         WHERE id = $10
         RETURNING id, name, title, race, profession, birthday, banned, experience, level, until_next_level",
    )
    .bind(&player.name)
    .bind(&player.title)
    .bind(player.race.as_ref())
    .bind(player.profession.as_ref())
    .bind(player.birthday)
    .bind(player.banned)
    .bind(player.experience)
    .bind(player.level)
    .bind(player.until_next_level)
    .bind(player.id)
    .fetch_optional(db.pool())
    .await?;

    row.map(to_player).transpose()
}

pub async fn delete_player(db: &Database, id: i64) -> anyhow::Result<bool> {
    let deleted = sqlx::query("DELETE FROM players WHERE id = $1")
        .bind(id)
        .execute(db.pool())
        .await?
        .rows_affected();

    Ok(deleted > 0)
}

fn to_player(row: PlayerRow) -> anyhow::Result<Player> {
    Ok(Player {
        id: row.id,
        race: Race::from_str(&row.race)
            .with_context(|| format!("unknown race `{}` in player row {}", row.race, row.id))?,
        profession: Profession::from_str(&row.profession).with_context(|| {
            format!(
                "unknown profession `{}` in player row {}",
                row.profession, row.id
            )
        })?,
        name: row.name,
        title: row.title,
        birthday: row.birthday,
        banned: row.banned,
        experience: row.experience,
        level: row.level,
        until_next_level: row.until_next_level,
    })
}

#[async_trait]
impl PlayerStore for Database {
    async fn insert(&self, player: &NewPlayer) -> anyhow::Result<Player> {
        insert_player(self, player).await
    }

    async fn list_all(&self) -> anyhow::Result<Vec<Player>> {
        list_players(self).await
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Player>> {
        get_player(self, id).await
    }

    async fn exists(&self, id: i64) -> anyhow::Result<bool> {
        player_exists(self, id).await
    }

    async fn update(&self, player: &Player) -> anyhow::Result<Option<Player>> {
        update_player(self, player).await
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        delete_player(self, id).await
    }
}
